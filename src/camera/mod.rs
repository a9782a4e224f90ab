//! Camera system for 3D viewport interaction.
//!
//! Provides an orbital / first-person camera driven by pointer and wheel
//! gestures, with view/projection matrix construction for the renderer.

/// Gesture-driven camera controller (orbit, look, pan, zoom).
pub mod controller;
/// Camera pose and view/projection matrix construction.
pub mod core;
/// Drag-gesture button state and mode dispatch.
pub mod gesture;

pub use controller::CameraController;
pub use gesture::{DragMode, GestureState};
pub use self::core::{CameraUniform, Pose};
