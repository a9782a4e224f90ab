//! Rendering subsystems for the viewport.
//!
//! Contains the static demo-scene renderer (a vertex-colored cube) that
//! consumes the camera controller's view/projection output.

/// Vertex-colored cube renderer.
pub mod cube;

pub use cube::CubeRenderer;
