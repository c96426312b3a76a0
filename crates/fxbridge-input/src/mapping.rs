//! Code and coordinate mapping between engine input and scene events.

use fxbridge_core::keycodes::{VK_BACK_SLASH, VK_UNDEFINED};
use fxbridge_core::{MouseEventKind, SceneButton};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::key_state::KeyState;
use crate::key_table::KeyCodeTable;
use crate::mouse_state::ButtonSnapshot;

/// Device wheel units per notch of scene wheel rotation.
pub const WHEEL_NOTCH_DELTA: f64 = 120.0;

/// Target code for a key event, or `None` if the key is unsupported.
///
/// Codes outside the key tables are only kept for a typed backslash, which is
/// remapped to [`VK_BACK_SLASH`].
#[must_use]
pub fn target_key_code(table: &dyn KeyCodeTable, key: Option<KeyCode>, key_char: char) -> Option<i32> {
    let code = key.map_or(VK_UNDEFINED, |key| table.target_code(key));
    if KeyState::in_range(code) {
        return Some(code);
    }
    match key_char {
        '\\' => Some(VK_BACK_SLASH),
        _ => None,
    }
}

/// Scene wheel notches for a device wheel delta.
///
/// The sign is inverted; half-way values round towards positive infinity.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn wheel_rotation(delta_wheel: i32) -> i32 {
    (f64::from(delta_wheel) / -WHEEL_NOTCH_DELTA + 0.5).floor() as i32
}

/// Scene event kind for a button transition.
#[must_use]
pub const fn button_event_kind(state: ElementState) -> MouseEventKind {
    match state {
        ElementState::Pressed => MouseEventKind::Pressed,
        ElementState::Released => MouseEventKind::Released,
    }
}

/// Classify pointer motion as a wheel scroll, a drag, or a plain move.
#[must_use]
pub fn classify_motion(wheel_rotation: i32, buttons: ButtonSnapshot) -> (MouseEventKind, SceneButton) {
    if wheel_rotation != 0 {
        return (MouseEventKind::Wheel, SceneButton::None);
    }
    match buttons.first_down() {
        Some(slot) => (MouseEventKind::Dragged, slot.scene_button()),
        None => (MouseEventKind::Moved, SceneButton::None),
    }
}
