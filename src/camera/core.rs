use glam::{Mat4, Vec3};

/// Camera pose: eye position, look-at target, and up direction.
///
/// Maintained by [`CameraController`](super::CameraController) under two
/// invariants: `up` is unit length and orthogonal to `target - position`,
/// and `position != target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector (unit length).
    pub up: Vec3,
}

impl Pose {
    /// Build the right-handed view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Unnormalized view direction, from eye toward target.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        self.target - self.position
    }
}

/// Build a right-handed perspective projection matrix.
///
/// `homogeneous_depth` selects the depth-range convention of the active
/// render backend: `true` maps depth to [-1,1] (GL style), `false` to
/// [0,1] (wgpu/Vulkan/D3D style). The flag is a backend capability and
/// must be queried per frame, not assumed.
#[must_use]
pub fn perspective(
    fovy_degrees: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    homogeneous_depth: bool,
) -> Mat4 {
    if homogeneous_depth {
        Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, znear, zfar)
    } else {
        Mat4::perspective_rh(fovy_degrees.to_radians(), aspect, znear, zfar)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given pose and matrices.
    pub fn update_view_proj(&mut self, pose: &Pose, view: Mat4, proj: Mat4) {
        self.view_proj = (proj * view).to_cols_array_2d();
        self.position = pose.position.to_array();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::Vec4;

    use super::*;

    #[test]
    fn view_matrix_maps_target_in_front_of_eye() {
        let pose = Pose {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        let view = pose.view_matrix();
        // The target sits straight ahead on the view-space -Z axis.
        let t = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(t.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t.z, -10.0, epsilon = 1e-5);
    }

    #[test]
    fn perspective_depth_range_follows_backend_convention() {
        let znear = 1.0;
        let zfar = 1024.0;

        // A point on the near plane, centered.
        let near_point = Vec4::new(0.0, 0.0, -znear, 1.0);

        let clip = perspective(50.0, 1.0, znear, zfar, false) * near_point;
        assert_abs_diff_eq!(clip.z / clip.w, 0.0, epsilon = 1e-5);

        let clip_gl = perspective(50.0, 1.0, znear, zfar, true) * near_point;
        assert_abs_diff_eq!(clip_gl.z / clip_gl.w, -1.0, epsilon = 1e-5);

        // Both conventions agree on the far plane mapping to 1.
        let far_point = Vec4::new(0.0, 0.0, -zfar, 1.0);
        let clip = perspective(50.0, 1.0, znear, zfar, false) * far_point;
        assert_abs_diff_eq!(clip.z / clip.w, 1.0, epsilon = 1e-4);
        let clip_gl = perspective(50.0, 1.0, znear, zfar, true) * far_point;
        assert_abs_diff_eq!(clip_gl.z / clip_gl.w, 1.0, epsilon = 1e-4);
    }
}
