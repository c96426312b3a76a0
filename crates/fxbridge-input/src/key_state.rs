//! Pressed-key tracking for key event translation.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use fxbridge_core::keycodes::{KEY_CODE_LIMIT, VK_ALT, VK_CONTROL, VK_META, VK_SHIFT};
use fxbridge_core::Modifiers;

const WORD_BITS: usize = u64::BITS as usize;

/// Modifier state published by the engine thread for readers on other threads.
///
/// Only [`KeyState`] writes it; clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedModifiers(Arc<AtomicU8>);

impl SharedModifiers {
    /// Current modifier flags.
    #[must_use]
    pub fn load(&self) -> Modifiers {
        Modifiers::from_bits_truncate(self.0.load(Ordering::Acquire))
    }

    fn store(&self, modifiers: Modifiers) {
        self.0.store(modifiers.bits(), Ordering::Release);
    }
}

/// Pressed target key codes and the character last typed for each.
///
/// Both tables are dense over [`KEY_CODE_LIMIT`] codes. A code in the pressed
/// set always has its character recorded, because [`KeyState::press`] writes
/// the character before setting the bit.
#[derive(Debug)]
pub struct KeyState {
    pressed: Box<[u64]>,
    chars: Box<[char]>,
    shared: SharedModifiers,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyState {
    /// Create an empty key state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed: vec![0; KEY_CODE_LIMIT / WORD_BITS].into_boxed_slice(),
            chars: vec!['\0'; KEY_CODE_LIMIT].into_boxed_slice(),
            shared: SharedModifiers::default(),
        }
    }

    /// Returns `true` if `code` indexes the key tables.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn in_range(code: i32) -> bool {
        code >= 0 && (code as usize) < KEY_CODE_LIMIT
    }

    /// Handle to the modifier flags for readers off the engine thread.
    #[must_use]
    pub fn shared_modifiers(&self) -> SharedModifiers {
        self.shared.clone()
    }

    /// Record a press of `code` that typed `ch`.
    pub fn press(&mut self, code: i32, ch: char) {
        let Some(slot) = slot(code) else {
            return;
        };
        self.chars[slot] = ch;
        self.pressed[slot / WORD_BITS] |= bit(slot);
        self.publish_if_modifier(code);
    }

    /// Record a release of `code`, returning the character typed at its press.
    ///
    /// The character is read before the pressed bit is cleared.
    pub fn release(&mut self, code: i32) -> char {
        let Some(slot) = slot(code) else {
            return '\0';
        };
        let ch = self.chars[slot];
        self.pressed[slot / WORD_BITS] &= !bit(slot);
        self.publish_if_modifier(code);
        ch
    }

    /// Character recorded at the most recent press of `code`.
    #[must_use]
    pub fn typed_char(&self, code: i32) -> char {
        slot(code).map_or('\0', |slot| self.chars[slot])
    }

    /// Returns `true` if `code` is currently held.
    #[must_use]
    pub fn is_pressed(&self, code: i32) -> bool {
        slot(code).is_some_and(|slot| self.pressed[slot / WORD_BITS] & bit(slot) != 0)
    }

    /// Modifier flags derived from the pressed set.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, self.is_pressed(VK_SHIFT));
        modifiers.set(Modifiers::CTRL, self.is_pressed(VK_CONTROL));
        modifiers.set(Modifiers::ALT, self.is_pressed(VK_ALT));
        modifiers.set(Modifiers::META, self.is_pressed(VK_META));
        modifiers
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn pressed_count(&self) -> usize {
        self.pressed.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Clear all key state.
    pub fn clear(&mut self) {
        self.pressed.fill(0);
        self.chars.fill('\0');
        self.shared.store(Modifiers::empty());
    }

    fn publish_if_modifier(&self, code: i32) {
        if matches!(code, VK_SHIFT | VK_CONTROL | VK_ALT | VK_META) {
            self.shared.store(self.modifiers());
        }
    }
}

#[allow(clippy::cast_sign_loss)]
const fn slot(code: i32) -> Option<usize> {
    if KeyState::in_range(code) {
        Some(code as usize)
    } else {
        None
    }
}

const fn bit(slot: usize) -> u64 {
    1 << (slot % WORD_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxbridge_core::keycodes::VK_A;

    #[test]
    fn press_and_release() {
        let mut keys = KeyState::new();
        assert!(!keys.is_pressed(VK_A));

        keys.press(VK_A, 'a');
        assert!(keys.is_pressed(VK_A));
        assert_eq!(keys.typed_char(VK_A), 'a');
        assert_eq!(keys.pressed_count(), 1);

        assert_eq!(keys.release(VK_A), 'a');
        assert!(!keys.is_pressed(VK_A));
        assert_eq!(keys.pressed_count(), 0);
    }

    #[test]
    fn press_overwrites_char() {
        let mut keys = KeyState::new();
        keys.press(VK_A, 'a');
        keys.release(VK_A);
        keys.press(VK_A, 'A');
        assert_eq!(keys.typed_char(VK_A), 'A');
    }

    #[test]
    fn modifiers_follow_pressed_set() {
        let mut keys = KeyState::new();
        let shared = keys.shared_modifiers();

        keys.press(VK_SHIFT, '\0');
        keys.press(VK_META, '\0');
        assert_eq!(keys.modifiers(), Modifiers::SHIFT | Modifiers::META);
        assert_eq!(shared.load(), Modifiers::SHIFT | Modifiers::META);

        keys.release(VK_SHIFT);
        assert_eq!(keys.modifiers(), Modifiers::META);
        assert_eq!(shared.load(), Modifiers::META);
    }

    #[test]
    fn out_of_range_codes_are_ignored() {
        let mut keys = KeyState::new();
        keys.press(-1, 'x');
        keys.press(0x1_0000, 'x');
        assert_eq!(keys.pressed_count(), 0);
        assert_eq!(keys.release(0x1_0000), '\0');
        assert!(!KeyState::in_range(0x1_0000));
        assert!(KeyState::in_range(0xFFFF));
    }

    #[test]
    fn clear_resets_everything() {
        let mut keys = KeyState::new();
        let shared = keys.shared_modifiers();
        keys.press(VK_CONTROL, '\0');
        keys.press(VK_A, 'a');

        keys.clear();
        assert_eq!(keys.pressed_count(), 0);
        assert_eq!(keys.typed_char(VK_A), '\0');
        assert_eq!(shared.load(), Modifiers::empty());
    }
}
