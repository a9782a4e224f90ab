//! GPU plumbing: wgpu device/surface ownership and depth-buffer helpers.

/// Core wgpu context: device, queue, surface, configuration.
pub mod render_context;
/// Depth attachment texture.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::DepthTarget;
