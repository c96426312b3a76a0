//! Focus and coverage policy for pointer events.
//!
//! Coverage decides whether the engine should stop treating an event as its
//! own input. Cursor visibility is an independent gate: while the engine has
//! captured the pointer, the scene receives no presses or motion even where the
//! overlay is visible.

use winit::event::ElementState;

/// What to do with the overlay's logical focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Grab,
    Lose,
    Keep,
}

/// Outcome for a mouse button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDecision {
    /// Mark the native event consumed.
    pub consume: bool,
    pub focus: FocusChange,
    /// Forward the event to the scene.
    pub dispatch: bool,
}

/// Outcome for a mouse motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionDecision {
    pub consume: bool,
    pub dispatch: bool,
}

/// Decide a button event.
///
/// Presses reach the scene only over the overlay with a visible cursor;
/// releases always do, so the scene never misses the end of a press.
#[must_use]
pub const fn decide_button(covered: bool, cursor_visible: bool, state: ElementState) -> ButtonDecision {
    let released = matches!(state, ElementState::Released);
    let (consume, focus) = if !covered {
        (false, FocusChange::Lose)
    } else if cursor_visible {
        (true, FocusChange::Grab)
    } else {
        (false, FocusChange::Keep)
    };
    ButtonDecision {
        consume,
        focus,
        dispatch: released || (covered && cursor_visible),
    }
}

/// Decide a motion event. Motion never changes focus.
#[must_use]
pub const fn decide_motion(covered: bool, cursor_visible: bool) -> MotionDecision {
    MotionDecision {
        consume: covered,
        dispatch: cursor_visible,
    }
}
