use glam::Vec2;

use crate::input::ButtonMask;

/// Which camera interaction a drag is currently driving.
///
/// Derived from the held-button pair; kept as an explicit enum so mode
/// transitions are visible at dispatch sites and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// No relevant button held; move events are ignored.
    Idle,
    /// Left button held: rotate the eye about the target.
    Orbit,
    /// Right button held: rotate the look target about the eye.
    Look,
    /// Both buttons held: translate eye and target together.
    Pan,
}

/// Held-button flags plus the pointer position anchoring the gesture.
///
/// The anchor is only refreshed on press/release transitions, never on
/// move events: every move within one gesture measures its delta from the
/// same fixed origin, paired with the pose snapshot taken at the same
/// moment.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureState {
    left_held: bool,
    right_held: bool,
    anchor: Vec2,
}

impl GestureState {
    /// The interaction mode implied by the currently held buttons.
    #[must_use]
    pub fn mode(&self) -> DragMode {
        match (self.left_held, self.right_held) {
            (true, true) => DragMode::Pan,
            (true, false) => DragMode::Orbit,
            (false, true) => DragMode::Look,
            (false, false) => DragMode::Idle,
        }
    }

    /// Pointer position captured at the last press/release transition.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Apply a press event carrying the full button mask.
    ///
    /// Returns `true` if either button newly transitioned to held, in
    /// which case the anchor has been moved to `position` and the caller
    /// must re-snapshot its pose.
    pub fn press(&mut self, buttons: ButtonMask, position: Vec2) -> bool {
        let mut transitioned = false;
        if buttons.left && !self.left_held {
            self.left_held = true;
            transitioned = true;
        }
        if buttons.right && !self.right_held {
            self.right_held = true;
            transitioned = true;
        }
        if transitioned {
            self.anchor = position;
        }
        transitioned
    }

    /// Apply a release event carrying the full button mask.
    ///
    /// Returns `true` if either button newly transitioned to released, in
    /// which case the anchor has been moved to `position` and the caller
    /// must re-snapshot its pose so the next gesture (possibly a
    /// different mode) starts from a clean reference.
    pub fn release(&mut self, buttons: ButtonMask, position: Vec2) -> bool {
        let mut transitioned = false;
        if !buttons.left && self.left_held {
            self.left_held = false;
            transitioned = true;
        }
        if !buttons.right && self.right_held {
            self.right_held = false;
            transitioned = true;
        }
        if transitioned {
            self.anchor = position;
        }
        transitioned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn mask(left: bool, right: bool) -> ButtonMask {
        ButtonMask { left, right }
    }

    #[test]
    fn mode_dispatch_table() {
        let mut gesture = GestureState::default();
        assert_eq!(gesture.mode(), DragMode::Idle);

        assert!(gesture.press(mask(true, false), Vec2::ZERO));
        assert_eq!(gesture.mode(), DragMode::Orbit);

        assert!(gesture.press(mask(true, true), Vec2::ZERO));
        assert_eq!(gesture.mode(), DragMode::Pan);

        assert!(gesture.release(mask(false, true), Vec2::ZERO));
        assert_eq!(gesture.mode(), DragMode::Look);

        assert!(gesture.release(mask(false, false), Vec2::ZERO));
        assert_eq!(gesture.mode(), DragMode::Idle);
    }

    #[test]
    fn repeated_press_without_transition_keeps_anchor() {
        let mut gesture = GestureState::default();
        assert!(gesture.press(mask(true, false), Vec2::new(5.0, 5.0)));
        assert_eq!(gesture.anchor(), Vec2::new(5.0, 5.0));

        // Same mask again: no transition, anchor untouched.
        assert!(!gesture.press(mask(true, false), Vec2::new(90.0, 90.0)));
        assert_eq!(gesture.anchor(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn second_button_press_moves_anchor() {
        let mut gesture = GestureState::default();
        assert!(gesture.press(mask(true, false), Vec2::new(5.0, 5.0)));
        // Right pressed mid-drag: transition, fresh anchor.
        assert!(gesture.press(mask(true, true), Vec2::new(40.0, 20.0)));
        assert_eq!(gesture.anchor(), Vec2::new(40.0, 20.0));
        assert_eq!(gesture.mode(), DragMode::Pan);
    }
}
