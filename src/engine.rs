//! Surface-level render engine.
//!
//! [`ViewportEngine`] ties the pieces together: it owns the wgpu context,
//! the camera controller, the depth attachment, and the demo-cube
//! renderer. Window shells forward platform-agnostic
//! [`InputEvent`](crate::input::InputEvent) values into
//! [`handle_input`](ViewportEngine::handle_input) and repaint via
//! [`render`](ViewportEngine::render) when a handler asks for it.

use glam::Vec2;

use crate::camera::CameraController;
use crate::error::SpinviewError;
use crate::gpu::{DepthTarget, RenderContext};
use crate::input::InputEvent;
use crate::options::Options;
use crate::renderer::CubeRenderer;

/// Owns the render surface, camera, and scene for one viewport.
pub struct ViewportEngine {
    context: RenderContext,
    camera: CameraController,
    cube: CubeRenderer,
    depth: DepthTarget,
    options: Options,
}

impl ViewportEngine {
    /// Create an engine rendering to the given window surface.
    ///
    /// One-time GPU resource creation (pipeline, vertex/index buffers,
    /// camera uniform) happens here; per-frame work is limited to one
    /// uniform upload and one render pass.
    ///
    /// # Errors
    ///
    /// Returns [`SpinviewError::Gpu`] if wgpu context creation fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, SpinviewError> {
        let context =
            RenderContext::new(window, size, options.display.vsync).await?;
        let camera = CameraController::new(size.0, size.1, &options.camera);
        let cube = CubeRenderer::new(&context);
        let depth = DepthTarget::new(&context.device, size.0, size.1);

        log::info!("viewport engine initialized ({}x{})", size.0, size.1);

        Ok(Self {
            context,
            camera,
            cube,
            depth,
            options,
        })
    }

    /// Propagate a window resize to the surface, depth target, and
    /// camera viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera.resize(width, height);
        self.depth = DepthTarget::new(&self.context.device, width, height);
    }

    /// Process a platform-agnostic input event.
    ///
    /// Returns `true` if a repaint should be scheduled. The signal is
    /// level-triggered: any number of `true` results before the next
    /// frame collapse into a single repaint.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerPressed { buttons, x, y } => {
                self.camera.pointer_pressed(buttons, Vec2::new(x, y))
            }
            InputEvent::PointerReleased { buttons, x, y } => {
                self.camera.pointer_released(buttons, Vec2::new(x, y))
            }
            InputEvent::PointerMoved { x, y } => {
                self.camera.pointer_moved(Vec2::new(x, y))
            }
            InputEvent::Wheel { delta_y } => self.camera.wheel(delta_y),
        }
    }

    /// Reset the camera to its default pose.
    pub fn reset_camera(&mut self) {
        self.camera.reset_to_default();
    }

    /// Read-only access to the camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options, re-applying camera limits and presentation
    /// settings.
    pub fn set_options(&mut self, options: Options) {
        self.context.set_vsync(options.display.vsync);
        self.camera.apply_options(&options.camera);
        self.options = options;
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired (lost/outdated surface); the caller resizes and retries.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // The depth-range convention is a backend capability; query it
        // each frame instead of baking it in at startup.
        let homogeneous_depth = self.context.homogeneous_depth();
        let (view, proj) = self
            .camera
            .view_projection(&self.options.camera, homogeneous_depth);
        self.cube.update_camera(
            &self.context.queue,
            self.camera.pose(),
            view,
            proj,
        );

        let frame = self.context.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Encoder"),
            },
        );
        {
            let [r, g, b] = self.options.display.background;
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Viewport Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &frame_view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });
            self.cube.draw(&mut pass);
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}
