//! Events accepted by the embedded scene sink.
//!
//! The numeric values of every kind, button, and modifier are part of the
//! embedding protocol and must not change.

use bitflags::bitflags;

bitflags! {
    /// Modifier key flags carried by key events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key is pressed.
        const SHIFT = 0b0000_0001;
        /// Control key is pressed.
        const CTRL  = 0b0000_0010;
        /// Alt key is pressed.
        const ALT   = 0b0000_0100;
        /// Meta/Command/Windows key is pressed.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if the Shift key is pressed.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if the Control key is pressed.
    #[inline]
    #[must_use]
    pub const fn ctrl(self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Returns `true` if the Alt key is pressed.
    #[inline]
    #[must_use]
    pub const fn alt(self) -> bool {
        self.contains(Self::ALT)
    }

    /// Returns `true` if the Meta key is pressed.
    #[inline]
    #[must_use]
    pub const fn meta(self) -> bool {
        self.contains(Self::META)
    }
}

/// Kind of a scene key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum KeyEventKind {
    Pressed = 0,
    Released = 1,
    Typed = 2,
}

impl KeyEventKind {
    /// Protocol value of this kind.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Kind of a scene mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MouseEventKind {
    Pressed = 0,
    Released = 1,
    Moved = 5,
    Dragged = 6,
    Wheel = 7,
}

impl MouseEventKind {
    /// Protocol value of this kind.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Mouse button identifier in the scene protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum SceneButton {
    /// No button; used for moves and wheel events.
    #[default]
    None = 0,
    Primary = 1,
    Secondary = 2,
    Middle = 4,
}

impl SceneButton {
    /// Protocol value of this button.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A translated key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneKeyEvent {
    pub kind: KeyEventKind,
    /// Target key code.
    pub code: i32,
    /// The character associated with the key, as a one-element array.
    pub chars: [char; 1],
    pub modifiers: Modifiers,
}

impl SceneKeyEvent {
    #[must_use]
    pub const fn new(kind: KeyEventKind, code: i32, ch: char, modifiers: Modifiers) -> Self {
        Self {
            kind,
            code,
            chars: [ch],
            modifiers,
        }
    }

    /// The single character carried by this event.
    #[must_use]
    pub const fn ch(&self) -> char {
        self.chars[0]
    }
}

/// A translated mouse event.
///
/// `x`/`y` are local to the embedded surface (top-down); `screen_x`/`screen_y`
/// add the container's window offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SceneMouseEvent {
    pub kind: MouseEventKind,
    pub button: SceneButton,
    pub primary_down: bool,
    pub middle_down: bool,
    pub secondary_down: bool,
    pub x: i32,
    pub y: i32,
    pub screen_x: i32,
    pub screen_y: i32,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Wheel notches; positive values scroll up.
    pub wheel_rotation: i32,
    pub popup_trigger: bool,
}

impl SceneMouseEvent {
    /// Modifier flags of this event.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, self.shift);
        modifiers.set(Modifiers::CTRL, self.ctrl);
        modifiers.set(Modifiers::ALT, self.alt);
        modifiers.set(Modifiers::META, self.meta);
        modifiers
    }
}
