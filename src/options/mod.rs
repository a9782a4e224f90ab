//! Centralized viewport options with TOML preset support.
//!
//! All tweakable settings (camera projection, radius limits, display)
//! are consolidated here. Options serialize to/from TOML so a preset can
//! be passed to the viewer at startup.

mod camera;
mod display;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
use serde::{Deserialize, Serialize};

use crate::error::SpinviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and radius-limit parameters.
    pub camera: CameraOptions,
    /// Surface presentation settings.
    pub display: DisplayOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SpinviewError::Io`] if the file cannot be read and
    /// [`SpinviewError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, SpinviewError> {
        let content = std::fs::read_to_string(path).map_err(SpinviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SpinviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SpinviewError::OptionsParse`] if serialization fails and
    /// [`SpinviewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SpinviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SpinviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SpinviewError::Io)?;
        }
        std::fs::write(path, content).map_err(SpinviewError::Io)
    }
}
