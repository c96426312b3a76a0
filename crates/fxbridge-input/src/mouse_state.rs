//! Mouse button state shared between the engine thread and the GUI context.

use std::sync::atomic::{AtomicBool, Ordering};

use fxbridge_core::SceneButton;

/// One of the three tracked mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSlot {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
}

impl ButtonSlot {
    /// Slot for an engine button index; other indices are not tracked.
    #[must_use]
    pub const fn from_native_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Secondary),
            2 => Some(Self::Middle),
            _ => None,
        }
    }

    /// The scene protocol's identifier for this button.
    #[must_use]
    pub const fn scene_button(self) -> SceneButton {
        match self {
            Self::Primary => SceneButton::Primary,
            Self::Secondary => SceneButton::Secondary,
            Self::Middle => SceneButton::Middle,
        }
    }
}

/// Copy of the button flags at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSnapshot {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl ButtonSnapshot {
    /// First held button in primary, secondary, middle order.
    #[must_use]
    pub const fn first_down(self) -> Option<ButtonSlot> {
        if self.primary {
            Some(ButtonSlot::Primary)
        } else if self.secondary {
            Some(ButtonSlot::Secondary)
        } else if self.middle {
            Some(ButtonSlot::Middle)
        } else {
            None
        }
    }
}

/// Last known physical state of the three tracked buttons.
///
/// Written only by the engine thread; any thread may take a snapshot.
#[derive(Debug, Default)]
pub struct MouseButtonState {
    buttons: [AtomicBool; 3],
}

impl MouseButtonState {
    /// Create a state with all buttons up.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of one button.
    pub fn set(&self, slot: ButtonSlot, pressed: bool) {
        self.buttons[slot as usize].store(pressed, Ordering::Release);
    }

    /// Returns `true` if the button is currently down.
    #[must_use]
    pub fn is_pressed(&self, slot: ButtonSlot) -> bool {
        self.buttons[slot as usize].load(Ordering::Acquire)
    }

    /// Read all three flags.
    #[must_use]
    pub fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot {
            primary: self.is_pressed(ButtonSlot::Primary),
            secondary: self.is_pressed(ButtonSlot::Secondary),
            middle: self.is_pressed(ButtonSlot::Middle),
        }
    }

    /// Mark all buttons as up.
    pub fn clear(&self) {
        for button in &self.buttons {
            button.store(false, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_indices() {
        assert_eq!(ButtonSlot::from_native_index(0), Some(ButtonSlot::Primary));
        assert_eq!(ButtonSlot::from_native_index(1), Some(ButtonSlot::Secondary));
        assert_eq!(ButtonSlot::from_native_index(2), Some(ButtonSlot::Middle));
        assert_eq!(ButtonSlot::from_native_index(3), None);
        assert_eq!(ButtonSlot::Secondary.scene_button(), SceneButton::Secondary);
    }

    #[test]
    fn set_and_snapshot() {
        let state = MouseButtonState::new();
        assert_eq!(state.snapshot(), ButtonSnapshot::default());

        state.set(ButtonSlot::Middle, true);
        state.set(ButtonSlot::Secondary, true);
        let snapshot = state.snapshot();
        assert!(!snapshot.primary);
        assert!(snapshot.secondary);
        assert!(snapshot.middle);

        state.clear();
        assert_eq!(state.snapshot(), ButtonSnapshot::default());
    }

    #[test]
    fn first_down_priority() {
        let all = ButtonSnapshot {
            primary: true,
            secondary: true,
            middle: true,
        };
        assert_eq!(all.first_down(), Some(ButtonSlot::Primary));

        let lower = ButtonSnapshot {
            primary: false,
            secondary: true,
            middle: true,
        };
        assert_eq!(lower.first_down(), Some(ButtonSlot::Secondary));
        assert_eq!(ButtonSnapshot::default().first_down(), None);
    }
}
