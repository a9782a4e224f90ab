use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec2, Vec3};

use super::core::{perspective, Pose};
use super::gesture::{DragMode, GestureState};
use crate::input::ButtonMask;
use crate::options::CameraOptions;

/// Floor applied to the pan scale so panning stays perceptible when the
/// camera is zoomed in tight.
const PAN_RADIUS_FLOOR: f32 = 10.0;

/// Wheel angle-delta units per 100% radius change. One detent of a
/// conventional wheel reports ±120, i.e. a 12% zoom step.
const WHEEL_ZOOM_DIVISOR: f32 = 1000.0;

/// Eye position after a reset.
const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);

/// Gesture-driven orbital / first-person camera controller.
///
/// Owns the camera pose and converts pointer and wheel events into pose
/// mutations under three drag modes: orbit (left button), first-person
/// look (right button), and pan (both buttons). All math runs against a
/// pose snapshot taken at gesture start, so deltas within one drag
/// compose from a fixed reference instead of accumulating rounding error
/// move by move.
///
/// Invariants re-enforced after every mutation:
///
/// - `up` is unit length and orthogonal to the view direction,
/// - the eye sits at exactly the orbit radius from the target,
/// - the orbit radius stays within the configured limits.
///
/// Event handlers return `true` when a repaint should be scheduled. The
/// signal is level-triggered: the caller may collapse any number of
/// requests into one repaint.
///
/// The controller has no GPU or windowing dependency and is driven from a
/// single thread; see [`view_projection`](Self::view_projection) for the
/// render-facing output.
pub struct CameraController {
    pose: Pose,
    /// Pose captured at the last press/release transition; the fixed
    /// reference frame for the current gesture.
    snapshot: Pose,
    radius: f32,
    min_radius: f32,
    max_radius: f32,
    gesture: GestureState,
    /// Widget size in physical pixels, for delta normalization and aspect.
    viewport: Vec2,
}

impl CameraController {
    /// Create a controller for a widget of the given size, with radius
    /// limits taken from `options`. Starts at the default pose.
    #[must_use]
    pub fn new(width: u32, height: u32, options: &CameraOptions) -> Self {
        let mut controller = Self {
            pose: Pose {
                position: DEFAULT_POSITION,
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
            snapshot: Pose {
                position: DEFAULT_POSITION,
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
            radius: 0.0,
            min_radius: options.min_radius,
            max_radius: options.max_radius,
            gesture: GestureState::default(),
            viewport: Vec2::new(width.max(1) as f32, height.max(1) as f32),
        };
        controller.reset_to_default();
        controller
    }

    /// Restore the default pose: eye (0,0,10), target at the origin, up
    /// +Y, radius 10. Held-button state is left alone so an in-flight
    /// drag keeps working against the fresh snapshot.
    pub fn reset_to_default(&mut self) {
        self.pose = Pose {
            position: DEFAULT_POSITION,
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        self.radius = (self.pose.position - self.pose.target).length();
        self.snapshot = self.pose;
    }

    /// Update the widget size used for delta normalization and aspect
    /// ratio. Ignores zero-sized dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = Vec2::new(width as f32, height as f32);
        }
    }

    /// Re-apply camera options: radius limits are refreshed and the
    /// current radius re-clamped (with the eye re-projected) if it falls
    /// outside the new bounds.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.min_radius = options.min_radius;
        self.max_radius = options.max_radius;
        let clamped = self.radius.clamp(self.min_radius, self.max_radius);
        if clamped != self.radius {
            self.radius = clamped;
            let eye_offset = self.pose.position - self.pose.target;
            self.pose.position =
                self.pose.target + eye_offset.normalize() * self.radius;
            self.snapshot = self.pose;
        }
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Current orbit radius (distance from eye to target).
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The drag mode implied by the currently held buttons.
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.gesture.mode()
    }

    /// Handle a pointer press carrying the full button mask.
    ///
    /// When either the left or right button newly transitions to held,
    /// the pointer position and current pose are captured as the gesture
    /// reference. Always requests a repaint.
    pub fn pointer_pressed(
        &mut self,
        buttons: ButtonMask,
        position: Vec2,
    ) -> bool {
        if self.gesture.press(buttons, position) {
            self.snapshot = self.pose;
        }
        true
    }

    /// Handle a pointer release carrying the full button mask.
    ///
    /// When either button newly transitions to released, the reference
    /// point and pose snapshot are refreshed so the next gesture (even a
    /// different mode) starts clean. Always requests a repaint.
    pub fn pointer_released(
        &mut self,
        buttons: ButtonMask,
        position: Vec2,
    ) -> bool {
        if self.gesture.release(buttons, position) {
            self.snapshot = self.pose;
        }
        true
    }

    /// Handle a pointer move, dispatching on the current drag mode.
    ///
    /// Returns `true` (repaint wanted) unless no drag is active.
    pub fn pointer_moved(&mut self, position: Vec2) -> bool {
        match self.gesture.mode() {
            DragMode::Idle => false,
            DragMode::Pan => {
                self.pan(position);
                true
            }
            DragMode::Orbit => {
                self.orbit(position);
                true
            }
            DragMode::Look => {
                self.look(position);
                true
            }
        }
    }

    /// Handle a wheel event with a signed vertical angle delta.
    ///
    /// Zoom is proportional: the radius changes by `delta_y / 1000` of
    /// itself, clamps to the configured limits, and the eye is
    /// re-projected along the unchanged view direction. Always requests a
    /// repaint.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.radius += delta_y / WHEEL_ZOOM_DIVISOR * self.radius;
        self.radius = self.radius.clamp(self.min_radius, self.max_radius);
        let eye_offset = self.pose.position - self.pose.target;
        self.pose.position =
            self.pose.target + eye_offset.normalize() * self.radius;
        true
    }

    /// Build the view and projection matrices for the current pose.
    ///
    /// `homogeneous_depth` is the render backend's depth-range capability
    /// ([-1,1] vs [0,1]) and must be queried from the backend each frame.
    #[must_use]
    pub fn view_projection(
        &self,
        options: &CameraOptions,
        homogeneous_depth: bool,
    ) -> (Mat4, Mat4) {
        let view = self.pose.view_matrix();
        let aspect = self.viewport.x / self.viewport.y;
        let proj = perspective(
            options.fovy,
            aspect,
            options.znear,
            options.zfar,
            homogeneous_depth,
        );
        (view, proj)
    }

    /// Pan: translate eye and target together in the view plane.
    fn pan(&mut self, current: Vec2) {
        let Pose {
            position,
            target,
            up,
        } = self.snapshot;
        let scale = self.radius.max(PAN_RADIUS_FLOOR);
        let delta = (current - self.gesture.anchor()) / self.viewport * scale;
        let eye_offset = position - target;
        let right = up.cross(eye_offset).normalize();
        let offset = right * delta.x + up * delta.y;
        self.pose.position = position + offset;
        self.pose.target = target + offset;
        // Pin the target at exactly the orbit radius along the panned
        // view direction.
        self.pose.target = self.pose.position
            + (self.pose.target - self.pose.position).normalize()
                * self.radius;
    }

    /// Orbit: rotate the eye about the target, keeping the radius.
    fn orbit(&mut self, current: Vec2) {
        let Pose {
            position,
            target,
            up,
        } = self.snapshot;
        let delta = self.gesture.anchor() - current;
        let yaw_angle = delta.x / self.viewport.x * PI;
        let pitch_angle = delta.y / self.viewport.y * PI;
        let eye_offset = position - target;
        let yaw = Quat::from_axis_angle(up, yaw_angle);
        // The pitch axis comes from the yawed offset so the two rotations
        // compose about consistent axes.
        let left = (yaw * eye_offset).cross(up).normalize();
        let pitch = Quat::from_axis_angle(left, pitch_angle);
        let rotation = pitch * yaw;
        let rotated = (rotation * eye_offset).normalize() * self.radius;
        self.pose.position = target + rotated;
        self.pose.up = (rotation * up).normalize();
        // Compounded rotations drift `up` off-orthogonal; re-derive it
        // against the new view direction.
        let new_left = rotated.cross(self.pose.up);
        self.pose.up = new_left.cross(rotated).normalize();
    }

    /// First-person look: rotate the target about the eye, keeping the
    /// radius.
    fn look(&mut self, current: Vec2) {
        let Pose {
            position,
            target,
            up,
        } = self.snapshot;
        let delta = current - self.gesture.anchor();
        let yaw_angle = delta.x / self.viewport.x * PI;
        let pitch_angle = delta.y / self.viewport.y * PI;
        let view_direction = target - position;
        let yaw = Quat::from_axis_angle(up, yaw_angle);
        let left = up.cross(yaw * view_direction).normalize();
        let pitch = Quat::from_axis_angle(left, pitch_angle);
        let rotation = pitch * yaw;
        let rotated = (rotation * view_direction).normalize() * self.radius;
        self.pose.target = position + rotated;
        self.pose.up = (rotation * up).normalize();
        let new_left = self.pose.up.cross(rotated);
        self.pose.up = rotated.cross(new_left).normalize();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const EPS: f32 = 1e-4;

    fn controller() -> CameraController {
        CameraController::new(500, 500, &CameraOptions::default())
    }

    fn point(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    /// Deterministic pseudo-random pointer coordinates.
    struct Lcg(u32);

    impl Lcg {
        fn coord(&mut self) -> f32 {
            self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (self.0 >> 8) as f32 / (1 << 24) as f32 * 500.0
        }
    }

    fn assert_invariants(c: &CameraController) {
        let pose = c.pose();
        let dir = pose.view_direction();
        assert!(
            (dir.length() - c.radius()).abs() < 1e-3,
            "eye-target distance {} drifted from radius {}",
            dir.length(),
            c.radius()
        );
        assert_abs_diff_eq!(pose.up.length(), 1.0, epsilon = EPS);
        assert!(
            pose.up.dot(dir.normalize()).abs() < EPS,
            "up lost orthogonality: dot = {}",
            pose.up.dot(dir.normalize())
        );
    }

    #[test]
    fn reset_is_deterministic() {
        let mut c = controller();
        assert!(c.pointer_pressed(ButtonMask::LEFT, point(10.0, 10.0)));
        assert!(c.pointer_moved(point(400.0, 300.0)));
        assert!(c.wheel(700.0));
        c.reset_to_default();
        assert_eq!(c.pose().position, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(c.pose().target, Vec3::ZERO);
        assert_eq!(c.pose().up, Vec3::Y);
        assert_eq!(c.radius(), 10.0);
    }

    #[test]
    fn move_without_buttons_is_a_no_op() {
        let mut c = controller();
        let before = *c.pose();
        assert!(!c.pointer_moved(point(320.0, 240.0)));
        assert_eq!(*c.pose(), before);
        assert_eq!(c.drag_mode(), DragMode::Idle);
    }

    #[test]
    fn orbit_yaws_by_normalized_delta() {
        let mut c = controller();
        assert!(c.pointer_pressed(ButtonMask::LEFT, point(100.0, 100.0)));
        assert!(c.pointer_moved(point(150.0, 100.0)));

        let pose = c.pose();
        // Eye stays on the radius-10 sphere about the origin.
        assert_abs_diff_eq!(pose.position.length(), 10.0, epsilon = 1e-3);
        assert_eq!(pose.target, Vec3::ZERO);
        // Pure horizontal drag: no elevation change.
        assert_abs_diff_eq!(pose.position.y, 0.0, epsilon = EPS);
        // Yaw magnitude is dx / width * pi.
        let cos_yaw = pose.position.normalize().dot(Vec3::Z);
        assert_abs_diff_eq!(cos_yaw, (PI / 10.0).cos(), epsilon = EPS);
        // Dragging right swings the eye toward -X.
        assert!(pose.position.x < 0.0);
        assert_invariants(&c);
    }

    #[test]
    fn look_rotates_target_about_fixed_eye() {
        let mut c = controller();
        assert!(c.pointer_pressed(ButtonMask::RIGHT, point(100.0, 100.0)));
        assert!(c.pointer_moved(point(150.0, 130.0)));

        let pose = c.pose();
        // First-person look leaves the eye in place.
        assert_eq!(pose.position, Vec3::new(0.0, 0.0, 10.0));
        assert!(pose.target != Vec3::ZERO);
        assert_invariants(&c);
    }

    #[test]
    fn wheel_zoom_is_proportional_and_direction_preserving() {
        let mut c = controller();
        assert!(c.wheel(-500.0));
        assert_abs_diff_eq!(c.radius(), 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(
            (c.pose().position - Vec3::new(0.0, 0.0, 5.0)).length(),
            0.0,
            epsilon = 1e-4
        );

        // Zoom after an orbit keeps the view direction bit-stable.
        assert!(c.pointer_pressed(ButtonMask::LEFT, point(100.0, 100.0)));
        assert!(c.pointer_moved(point(260.0, 220.0)));
        let dir_before = c.pose().view_direction().normalize();
        assert!(c.wheel(300.0));
        let dir_after = c.pose().view_direction().normalize();
        assert_abs_diff_eq!(dir_before.dot(dir_after), 1.0, epsilon = 1e-6);
        assert_invariants(&c);
    }

    #[test]
    fn wheel_zoom_clamps_to_radius_limits() {
        let mut c = controller();
        for _ in 0..50 {
            assert!(c.wheel(2000.0));
            assert!(c.radius() <= 1000.0);
        }
        assert_abs_diff_eq!(c.radius(), 1000.0, epsilon = 1e-3);

        for _ in 0..200 {
            assert!(c.wheel(-999.0));
            assert!(c.radius() >= 0.1);
        }
        assert_abs_diff_eq!(c.radius(), 0.1, epsilon = 1e-5);
        assert_invariants(&c);
    }

    #[test]
    fn pan_scale_floors_at_tight_zoom() {
        let mut c = controller();
        for _ in 0..200 {
            assert!(c.wheel(-999.0));
        }
        assert_abs_diff_eq!(c.radius(), 0.1, epsilon = 1e-5);
        let before = c.pose().position;

        assert!(c.pointer_pressed(ButtonMask::BOTH, point(0.0, 0.0)));
        assert!(c.pointer_moved(point(250.0, 0.0)));
        // Half the viewport at the 10-unit pan floor: 5 world units.
        assert_abs_diff_eq!(
            (c.pose().position - before).length(),
            5.0,
            epsilon = 1e-3
        );
        assert_invariants(&c);
    }

    #[test]
    fn pan_preserves_radius_and_direction() {
        let mut c = controller();
        assert!(c.pointer_pressed(ButtonMask::BOTH, point(250.0, 250.0)));
        assert!(c.pointer_moved(point(350.0, 250.0)));

        let pose = c.pose();
        // dx of 100/500 at radius 10 translates both points by 2 along +X.
        assert_abs_diff_eq!(pose.position.x, 2.0, epsilon = EPS);
        assert_abs_diff_eq!(pose.target.x, 2.0, epsilon = EPS);
        assert_invariants(&c);
    }

    #[test]
    fn fresh_gesture_snapshots_post_pan_pose() {
        let mut c = controller();
        assert!(c.pointer_pressed(ButtonMask::BOTH, point(250.0, 250.0)));
        assert!(c.pointer_moved(point(350.0, 250.0)));
        let panned_target = c.pose().target;
        let panned_position = c.pose().position;
        assert!(c.pointer_released(ButtonMask::NONE, point(350.0, 250.0)));

        // The next orbit must reference the post-pan pose, not the
        // pre-pan one.
        assert!(c.pointer_pressed(ButtonMask::LEFT, point(100.0, 100.0)));
        assert!(c.pointer_moved(point(150.0, 100.0)));
        assert_eq!(c.pose().target, panned_target);
        assert!(c.pose().position != panned_position);
        assert_abs_diff_eq!(
            (c.pose().position - panned_target).length(),
            c.radius(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn moves_within_a_gesture_compose_from_the_snapshot() {
        let mut stepped = controller();
        assert!(stepped.pointer_pressed(ButtonMask::LEFT, point(100.0, 100.0)));
        assert!(stepped.pointer_moved(point(130.0, 180.0)));
        assert!(stepped.pointer_moved(point(150.0, 100.0)));

        let mut direct = controller();
        assert!(direct.pointer_pressed(ButtonMask::LEFT, point(100.0, 100.0)));
        assert!(direct.pointer_moved(point(150.0, 100.0)));

        // Deltas run against the gesture-start snapshot, so the detour
        // through (130,180) leaves no trace.
        assert_eq!(stepped.pose(), direct.pose());
    }

    #[test]
    fn second_button_press_rebases_the_gesture() {
        let mut c = controller();
        assert!(c.pointer_pressed(ButtonMask::LEFT, point(100.0, 100.0)));
        assert!(c.pointer_moved(point(200.0, 150.0)));
        let orbited = *c.pose();

        // Right button joins mid-drag: pan now composes from the orbited
        // pose, not from where the left-drag started.
        assert!(c.pointer_pressed(ButtonMask::BOTH, point(200.0, 150.0)));
        assert_eq!(c.drag_mode(), DragMode::Pan);
        assert!(c.pointer_moved(point(200.0, 150.0)));
        let pose = c.pose();
        assert_abs_diff_eq!(
            (pose.position - orbited.position).length(),
            0.0,
            epsilon = 1e-4
        );
        assert_invariants(&c);
    }

    #[test]
    fn up_stays_orthogonal_across_compound_drags() {
        let mut c = controller();
        let mut rng = Lcg(0x5EED_CAFE);

        for gesture in 0..40_u32 {
            let mask = match gesture % 3 {
                0 => ButtonMask::LEFT,
                1 => ButtonMask::RIGHT,
                _ => ButtonMask::BOTH,
            };
            let start = point(rng.coord(), rng.coord());
            assert!(c.pointer_pressed(mask, start));
            for _ in 0..5 {
                let _ = c.pointer_moved(point(rng.coord(), rng.coord()));
                assert_invariants(&c);
            }
            assert!(c
                .pointer_released(ButtonMask::NONE, point(rng.coord(), rng.coord())));
        }
    }

    #[test]
    fn radius_invariant_holds_across_mixed_operations() {
        let mut c = controller();
        let mut rng = Lcg(0xBAD5_EED);

        for round in 0..25_u32 {
            let mask = match round % 3 {
                0 => ButtonMask::LEFT,
                1 => ButtonMask::RIGHT,
                _ => ButtonMask::BOTH,
            };
            assert!(c.pointer_pressed(mask, point(rng.coord(), rng.coord())));
            let _ = c.pointer_moved(point(rng.coord(), rng.coord()));
            assert_invariants(&c);
            assert!(c.wheel(rng.coord() - 250.0));
            assert_invariants(&c);
            assert!(c
                .pointer_released(ButtonMask::NONE, point(rng.coord(), rng.coord())));
            assert_invariants(&c);
        }
    }

    #[test]
    fn apply_options_reclamps_radius() {
        let mut c = controller();
        assert!(c.wheel(2000.0));
        assert!(c.radius() > 20.0);

        let tight = CameraOptions {
            max_radius: 15.0,
            ..CameraOptions::default()
        };
        c.apply_options(&tight);
        assert_abs_diff_eq!(c.radius(), 15.0, epsilon = 1e-5);
        assert_invariants(&c);
    }
}
