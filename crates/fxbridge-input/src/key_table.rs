//! Translation of engine key codes into target key codes.

use fxbridge_core::keycodes::{
    VK_0, VK_A, VK_ADD, VK_ALT, VK_BACK_QUOTE, VK_BACK_SLASH, VK_BACK_SPACE, VK_CAPS_LOCK,
    VK_CLOSE_BRACKET, VK_COMMA, VK_CONTEXT_MENU, VK_CONTROL, VK_DECIMAL, VK_DELETE, VK_DIVIDE,
    VK_DOWN, VK_END, VK_ENTER, VK_EQUALS, VK_ESCAPE, VK_F1, VK_F13, VK_HELP, VK_HOME, VK_INSERT,
    VK_LEFT, VK_META, VK_MINUS, VK_MULTIPLY, VK_NUMPAD0, VK_NUM_LOCK, VK_OPEN_BRACKET,
    VK_PAGE_DOWN, VK_PAGE_UP, VK_PAUSE, VK_PERIOD, VK_PRINTSCREEN, VK_QUOTE, VK_RIGHT,
    VK_SCROLL_LOCK, VK_SEMICOLON, VK_SEPARATOR, VK_SHIFT, VK_SLASH, VK_SPACE, VK_SUBTRACT,
    VK_TAB, VK_UNDEFINED, VK_UP,
};
use winit::keyboard::KeyCode;

/// Maps engine key codes to the target key codes of the embedded scene.
pub trait KeyCodeTable: Send + Sync {
    /// Target code for `key`, [`VK_UNDEFINED`] if the key has no counterpart.
    fn target_code(&self, key: KeyCode) -> i32;
}

/// Default table producing virtual key codes.
///
/// Left and right variants of a key share one code.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwtKeyTable;

impl KeyCodeTable for AwtKeyTable {
    fn target_code(&self, key: KeyCode) -> i32 {
        if let Some(offset) = letter_offset(key) {
            return VK_A + offset;
        }
        if let Some(offset) = digit_offset(key) {
            return VK_0 + offset;
        }
        if let Some(offset) = numpad_digit_offset(key) {
            return VK_NUMPAD0 + offset;
        }
        if let Some(n) = function_key_number(key) {
            return match n {
                1..=12 => VK_F1 + n - 1,
                _ => VK_F13 + n - 13,
            };
        }

        match key {
            KeyCode::Backquote => VK_BACK_QUOTE,
            KeyCode::Backslash | KeyCode::IntlBackslash => VK_BACK_SLASH,
            KeyCode::BracketLeft => VK_OPEN_BRACKET,
            KeyCode::BracketRight => VK_CLOSE_BRACKET,
            KeyCode::Comma => VK_COMMA,
            KeyCode::Equal | KeyCode::NumpadEqual => VK_EQUALS,
            KeyCode::Minus => VK_MINUS,
            KeyCode::Period => VK_PERIOD,
            KeyCode::Quote => VK_QUOTE,
            KeyCode::Semicolon => VK_SEMICOLON,
            KeyCode::Slash => VK_SLASH,
            KeyCode::AltLeft | KeyCode::AltRight => VK_ALT,
            KeyCode::ControlLeft | KeyCode::ControlRight => VK_CONTROL,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => VK_SHIFT,
            KeyCode::SuperLeft | KeyCode::SuperRight | KeyCode::Meta => VK_META,
            KeyCode::Backspace => VK_BACK_SPACE,
            KeyCode::CapsLock => VK_CAPS_LOCK,
            KeyCode::ContextMenu => VK_CONTEXT_MENU,
            KeyCode::Enter | KeyCode::NumpadEnter => VK_ENTER,
            KeyCode::Space => VK_SPACE,
            KeyCode::Tab => VK_TAB,
            KeyCode::Delete => VK_DELETE,
            KeyCode::End => VK_END,
            KeyCode::Help => VK_HELP,
            KeyCode::Home => VK_HOME,
            KeyCode::Insert => VK_INSERT,
            KeyCode::PageDown => VK_PAGE_DOWN,
            KeyCode::PageUp => VK_PAGE_UP,
            KeyCode::ArrowDown => VK_DOWN,
            KeyCode::ArrowLeft => VK_LEFT,
            KeyCode::ArrowRight => VK_RIGHT,
            KeyCode::ArrowUp => VK_UP,
            KeyCode::NumLock => VK_NUM_LOCK,
            KeyCode::NumpadAdd => VK_ADD,
            KeyCode::NumpadComma => VK_SEPARATOR,
            KeyCode::NumpadDecimal => VK_DECIMAL,
            KeyCode::NumpadDivide => VK_DIVIDE,
            KeyCode::NumpadMultiply => VK_MULTIPLY,
            KeyCode::NumpadSubtract => VK_SUBTRACT,
            KeyCode::Escape => VK_ESCAPE,
            KeyCode::PrintScreen => VK_PRINTSCREEN,
            KeyCode::ScrollLock => VK_SCROLL_LOCK,
            KeyCode::Pause => VK_PAUSE,
            _ => VK_UNDEFINED,
        }
    }
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

const NUMPAD_DIGITS: [KeyCode; 10] = [
    KeyCode::Numpad0,
    KeyCode::Numpad1,
    KeyCode::Numpad2,
    KeyCode::Numpad3,
    KeyCode::Numpad4,
    KeyCode::Numpad5,
    KeyCode::Numpad6,
    KeyCode::Numpad7,
    KeyCode::Numpad8,
    KeyCode::Numpad9,
];

const FUNCTION_KEYS: [KeyCode; 24] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
    KeyCode::F8,
    KeyCode::F9,
    KeyCode::F10,
    KeyCode::F11,
    KeyCode::F12,
    KeyCode::F13,
    KeyCode::F14,
    KeyCode::F15,
    KeyCode::F16,
    KeyCode::F17,
    KeyCode::F18,
    KeyCode::F19,
    KeyCode::F20,
    KeyCode::F21,
    KeyCode::F22,
    KeyCode::F23,
    KeyCode::F24,
];

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn position_in(table: &[KeyCode], key: KeyCode) -> Option<i32> {
    table.iter().position(|k| *k == key).map(|i| i as i32)
}

fn letter_offset(key: KeyCode) -> Option<i32> {
    position_in(&LETTERS, key)
}

fn digit_offset(key: KeyCode) -> Option<i32> {
    position_in(&DIGITS, key)
}

fn numpad_digit_offset(key: KeyCode) -> Option<i32> {
    position_in(&NUMPAD_DIGITS, key)
}

/// 1-based function key number.
fn function_key_number(key: KeyCode) -> Option<i32> {
    position_in(&FUNCTION_KEYS, key).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        let table = AwtKeyTable;
        assert_eq!(table.target_code(KeyCode::KeyA), 65);
        assert_eq!(table.target_code(KeyCode::KeyZ), 90);
        assert_eq!(table.target_code(KeyCode::Digit0), 48);
        assert_eq!(table.target_code(KeyCode::Digit9), 57);
        assert_eq!(table.target_code(KeyCode::Numpad7), 103);
    }

    #[test]
    fn function_keys() {
        let table = AwtKeyTable;
        assert_eq!(table.target_code(KeyCode::F1), 112);
        assert_eq!(table.target_code(KeyCode::F12), 123);
        assert_eq!(table.target_code(KeyCode::F13), 0xF000);
        assert_eq!(table.target_code(KeyCode::F24), 0xF00B);
    }

    #[test]
    fn modifiers_share_codes() {
        let table = AwtKeyTable;
        assert_eq!(table.target_code(KeyCode::ShiftLeft), VK_SHIFT);
        assert_eq!(table.target_code(KeyCode::ShiftRight), VK_SHIFT);
        assert_eq!(table.target_code(KeyCode::ControlRight), VK_CONTROL);
        assert_eq!(table.target_code(KeyCode::AltLeft), VK_ALT);
        assert_eq!(table.target_code(KeyCode::SuperLeft), VK_META);
    }

    #[test]
    fn unmapped_key_is_undefined() {
        assert_eq!(AwtKeyTable.target_code(KeyCode::F35), VK_UNDEFINED);
        assert_eq!(AwtKeyTable.target_code(KeyCode::AudioVolumeUp), VK_UNDEFINED);
    }
}
