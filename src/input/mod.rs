//! Input handling: platform-agnostic pointer/wheel event types consumed
//! by the engine and camera controller.

/// Platform-agnostic input events.
pub mod event;

pub use event::{ButtonMask, InputEvent};
