/// Snapshot of the camera-relevant pointer buttons currently held.
///
/// Press/release events carry the full mask (the state *after* the
/// transition) rather than a single button, so the consumer detects
/// newly-down / newly-up buttons itself. The windowing layer is
/// responsible for folding per-button transitions into this mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonMask {
    /// Primary (left) button held.
    pub left: bool,
    /// Secondary (right) button held.
    pub right: bool,
}

impl ButtonMask {
    /// No buttons held.
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
    /// Left button only.
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    /// Right button only.
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
    /// Both buttons held.
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };

    /// Whether any camera-relevant button is held.
    #[must_use]
    pub const fn any(self) -> bool {
        self.left || self.right
    }
}

#[cfg(feature = "viewer")]
impl ButtonMask {
    /// Fold a winit per-button transition into the mask. Buttons other
    /// than left/right are ignored.
    pub fn apply(&mut self, button: winit::event::MouseButton, pressed: bool) {
        match button {
            winit::event::MouseButton::Left => self.left = pressed,
            winit::event::MouseButton::Right => self.right = pressed,
            _ => (),
        }
    }
}

/// Platform-agnostic input events.
///
/// These are fed into
/// [`ViewportEngine::handle_input`](crate::ViewportEngine::handle_input),
/// which dispatches them to the camera controller and reports whether a
/// repaint should be scheduled.
///
/// # Example
///
/// ```ignore
/// if engine.handle_input(InputEvent::PointerMoved { x, y }) {
///     window.request_redraw();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer button pressed. `buttons` is the held mask after the
    /// press.
    PointerPressed {
        /// Held-button mask after the press.
        buttons: ButtonMask,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button released. `buttons` is the held mask after the
    /// release.
    PointerReleased {
        /// Held-button mask after the release.
        buttons: ButtonMask,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer moved to an absolute widget position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel turned.
    Wheel {
        /// Signed vertical angle delta, ±120 per wheel detent
        /// (positive zooms out).
        delta_y: f32,
    },
}
