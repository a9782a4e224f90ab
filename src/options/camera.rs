use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection parameters and orbit-radius limits.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Smallest allowed orbit radius (wheel zoom-in limit).
    pub min_radius: f32,
    /// Largest allowed orbit radius (wheel zoom-out limit).
    pub max_radius: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 1.0,
            zfar: 1024.0,
            min_radius: 0.1,
            max_radius: 1000.0,
        }
    }
}
