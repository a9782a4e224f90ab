use wgpu::util::DeviceExt;

use crate::camera::{CameraUniform, Pose};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DEPTH_FORMAT;
use glam::Mat4;

/// Vertex format for the demo cube: position plus a packed RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PosColorVertex {
    /// Corner position in model space.
    pub position: [f32; 3],
    /// RGBA color, one byte per channel.
    pub color: [u8; 4],
}

impl PosColorVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Unorm8x4];

    /// Vertex buffer layout matching the cube shader's inputs.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// The eight corners of a unit cube, each with a distinct color.
const CUBE_VERTICES: [PosColorVertex; 8] = [
    PosColorVertex {
        position: [-1.0, 1.0, 1.0],
        color: [0, 0, 0, 255],
    },
    PosColorVertex {
        position: [1.0, 1.0, 1.0],
        color: [255, 0, 0, 255],
    },
    PosColorVertex {
        position: [-1.0, -1.0, 1.0],
        color: [0, 255, 0, 255],
    },
    PosColorVertex {
        position: [1.0, -1.0, 1.0],
        color: [255, 255, 0, 255],
    },
    PosColorVertex {
        position: [-1.0, 1.0, -1.0],
        color: [0, 0, 255, 255],
    },
    PosColorVertex {
        position: [1.0, 1.0, -1.0],
        color: [255, 0, 255, 255],
    },
    PosColorVertex {
        position: [-1.0, -1.0, -1.0],
        color: [0, 255, 255, 255],
    },
    PosColorVertex {
        position: [1.0, -1.0, -1.0],
        color: [255, 255, 255, 255],
    },
];

/// Triangle-list indices for the cube, two triangles per face.
const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, // front
    1, 3, 2, //
    4, 6, 5, // back
    5, 6, 7, //
    0, 2, 4, // left
    4, 2, 6, //
    1, 5, 3, // right
    5, 7, 3, //
    0, 4, 1, // top
    4, 5, 1, //
    2, 3, 6, // bottom
    6, 3, 7, //
];

/// Renders a static vertex-colored cube with the camera uniform.
///
/// All GPU resources (vertex buffer, index buffer, pipeline, camera
/// uniform buffer) are created once at surface initialization and live
/// for the surface's lifetime; per-frame work is one uniform upload and
/// one indexed draw.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniform: CameraUniform,
}

impl CubeRenderer {
    /// Create the cube pipeline and static buffers.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;

        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/cube.wgsl"
        ));

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&CUBE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Index Buffer"),
                contents: bytemuck::cast_slice(&CUBE_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        let uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Cube Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Cube Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[PosColorVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(context.config.format.into())],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            camera_buffer,
            bind_group,
            uniform,
        }
    }

    /// Upload the camera matrices for this frame.
    pub fn update_camera(
        &mut self,
        queue: &wgpu::Queue,
        pose: &Pose,
        view: Mat4,
        proj: Mat4,
    ) {
        self.uniform.update_view_proj(pose, view, proj);
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }

    /// Record the cube draw into an open render pass.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint16,
        );
        render_pass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_indices_stay_in_bounds() {
        assert_eq!(CUBE_INDICES.len(), 36);
        for &i in &CUBE_INDICES {
            assert!((i as usize) < CUBE_VERTICES.len());
        }
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        // 12 bytes position + 4 bytes color; no implicit padding allowed,
        // since the buffer is uploaded with bytemuck as raw bytes.
        assert_eq!(size_of::<PosColorVertex>(), 16);
    }

    #[test]
    fn every_face_uses_four_distinct_corners() {
        for face in CUBE_INDICES.chunks(6) {
            let mut corners: Vec<u16> = face.to_vec();
            corners.sort_unstable();
            corners.dedup();
            assert_eq!(corners.len(), 4);
        }
    }
}
