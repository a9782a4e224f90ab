use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Presentation settings for the viewport surface.
pub struct DisplayOptions {
    /// Clear color as linear RGB.
    pub background: [f32; 3],
    /// Synchronize presentation with the display refresh rate.
    pub vsync: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            // Neutral dark gray (0x303030).
            background: [0.188, 0.188, 0.188],
            vsync: true,
        }
    }
}
