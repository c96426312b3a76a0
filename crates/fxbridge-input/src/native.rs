//! Engine-native input events and the listener interface that receives them.
//!
//! Every event carries a consumed flag. A listener marks an event consumed to
//! tell the engine not to act on it as well.

use std::sync::Arc;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Device wheel units per line of scroll.
const WHEEL_UNITS_PER_LINE: f64 = 120.0;

/// Approximate pixels per line for pixel-precise scroll devices.
const PIXELS_PER_LINE: f64 = 100.0;

macro_rules! consumable {
    ($ty:ty) => {
        impl $ty {
            /// Mark the event as handled so the engine ignores it.
            pub fn set_consumed(&mut self) {
                self.consumed = true;
            }

            /// Returns `true` if a listener has consumed this event.
            #[must_use]
            pub const fn is_consumed(&self) -> bool {
                self.consumed
            }
        }
    };
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInputEvent {
    key: Option<KeyCode>,
    key_char: char,
    pressed: bool,
    repeating: bool,
    consumed: bool,
}

impl KeyInputEvent {
    /// Create a key event. `None` stands for a key the engine could not identify.
    #[must_use]
    pub const fn new(key: Option<KeyCode>, key_char: char, pressed: bool, repeating: bool) -> Self {
        Self {
            key,
            key_char,
            pressed,
            repeating,
            consumed: false,
        }
    }

    /// Initial press of a key.
    #[must_use]
    pub const fn press(key: KeyCode, key_char: char) -> Self {
        Self::new(Some(key), key_char, true, false)
    }

    /// Auto-repeat of a held key.
    #[must_use]
    pub const fn repeat(key: KeyCode, key_char: char) -> Self {
        Self::new(Some(key), key_char, true, true)
    }

    #[must_use]
    pub const fn release(key: KeyCode, key_char: char) -> Self {
        Self::new(Some(key), key_char, false, false)
    }

    /// Build from a winit keyboard event.
    #[must_use]
    pub fn from_winit(event: &winit::event::KeyEvent) -> Self {
        let key = match event.physical_key {
            PhysicalKey::Code(code) => Some(code),
            PhysicalKey::Unidentified(_) => None,
        };
        let key_char = event
            .text
            .as_ref()
            .and_then(|text| text.chars().next())
            .unwrap_or('\0');
        Self::new(key, key_char, event.state.is_pressed(), event.repeat)
    }

    #[must_use]
    pub const fn key(&self) -> Option<KeyCode> {
        self.key
    }

    /// Character the device reported with this event, `'\0'` if none.
    #[must_use]
    pub const fn key_char(&self) -> char {
        self.key_char
    }

    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        self.repeating
    }

    #[must_use]
    pub const fn is_released(&self) -> bool {
        !self.pressed
    }
}

consumable!(KeyInputEvent);

/// A mouse button press or release.
///
/// Coordinates are in engine space (bottom-up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseButtonEvent {
    button_index: u32,
    state: ElementState,
    x: i32,
    y: i32,
    consumed: bool,
}

impl MouseButtonEvent {
    #[must_use]
    pub const fn new(button_index: u32, state: ElementState, x: i32, y: i32) -> Self {
        Self {
            button_index,
            state,
            x,
            y,
            consumed: false,
        }
    }

    /// Engine button index for a winit mouse button.
    #[must_use]
    pub const fn button_index_of(button: MouseButton) -> u32 {
        match button {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Back => 3,
            MouseButton::Forward => 4,
            MouseButton::Other(n) => 5 + n as u32,
        }
    }

    #[must_use]
    pub const fn button_index(&self) -> u32 {
        self.button_index
    }

    #[must_use]
    pub const fn state(&self) -> ElementState {
        self.state
    }

    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        matches!(self.state, ElementState::Pressed)
    }

    #[must_use]
    pub const fn is_released(&self) -> bool {
        matches!(self.state, ElementState::Released)
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

consumable!(MouseButtonEvent);

/// Pointer motion, optionally with accumulated wheel movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseMotionEvent {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    wheel: i32,
    delta_wheel: i32,
    consumed: bool,
}

impl MouseMotionEvent {
    #[must_use]
    pub const fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            wheel: 0,
            delta_wheel: 0,
            consumed: false,
        }
    }

    /// Attach wheel movement: the absolute wheel position and its change.
    #[must_use]
    pub const fn with_wheel(mut self, wheel: i32, delta_wheel: i32) -> Self {
        self.wheel = wheel;
        self.delta_wheel = delta_wheel;
        self
    }

    /// Wheel units for a winit scroll delta (positive scrolls up).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn wheel_delta_of(delta: MouseScrollDelta) -> i32 {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
        };
        (lines * WHEEL_UNITS_PER_LINE).round() as i32
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn dx(&self) -> i32 {
        self.dx
    }

    #[must_use]
    pub const fn dy(&self) -> i32 {
        self.dy
    }

    #[must_use]
    pub const fn wheel(&self) -> i32 {
        self.wheel
    }

    #[must_use]
    pub const fn delta_wheel(&self) -> i32 {
        self.delta_wheel
    }
}

consumable!(MouseMotionEvent);

/// Movement of a joystick axis.
#[derive(Debug, Clone, PartialEq)]
pub struct JoyAxisEvent {
    pub joystick: u32,
    pub axis: u32,
    pub value: f32,
    consumed: bool,
}

impl JoyAxisEvent {
    #[must_use]
    pub const fn new(joystick: u32, axis: u32, value: f32) -> Self {
        Self {
            joystick,
            axis,
            value,
            consumed: false,
        }
    }
}

consumable!(JoyAxisEvent);

/// Press or release of a joystick button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoyButtonEvent {
    pub joystick: u32,
    pub button: u32,
    pub pressed: bool,
    consumed: bool,
}

impl JoyButtonEvent {
    #[must_use]
    pub const fn new(joystick: u32, button: u32, pressed: bool) -> Self {
        Self {
            joystick,
            button,
            pressed,
            consumed: false,
        }
    }
}

consumable!(JoyButtonEvent);

/// A touch contact update.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pointer: u64,
    pub x: f32,
    pub y: f32,
    pub delta_x: f32,
    pub delta_y: f32,
    pub pressure: f32,
    consumed: bool,
}

impl TouchEvent {
    #[must_use]
    pub const fn new(phase: TouchPhase, pointer: u64, x: f32, y: f32) -> Self {
        Self {
            phase,
            pointer,
            x,
            y,
            delta_x: 0.0,
            delta_y: 0.0,
            pressure: 1.0,
            consumed: false,
        }
    }
}

consumable!(TouchEvent);

/// Receiver of raw engine input, called on the engine thread in event order.
///
/// All callbacks default to doing nothing.
pub trait RawInputListener: Send + Sync {
    /// Start of a batch of input events for one frame.
    fn begin_input(&self) {}

    /// End of the current batch.
    fn end_input(&self) {}

    fn on_joy_axis_event(&self, _event: &mut JoyAxisEvent) {}

    fn on_joy_button_event(&self, _event: &mut JoyButtonEvent) {}

    fn on_mouse_motion_event(&self, _event: &mut MouseMotionEvent) {}

    fn on_mouse_button_event(&self, _event: &mut MouseButtonEvent) {}

    fn on_key_event(&self, _event: &mut KeyInputEvent) {}

    fn on_touch_event(&self, _event: &mut TouchEvent) {}
}

impl<T: RawInputListener + ?Sized> RawInputListener for Arc<T> {
    fn begin_input(&self) {
        (**self).begin_input();
    }

    fn end_input(&self) {
        (**self).end_input();
    }

    fn on_joy_axis_event(&self, event: &mut JoyAxisEvent) {
        (**self).on_joy_axis_event(event);
    }

    fn on_joy_button_event(&self, event: &mut JoyButtonEvent) {
        (**self).on_joy_button_event(event);
    }

    fn on_mouse_motion_event(&self, event: &mut MouseMotionEvent) {
        (**self).on_mouse_motion_event(event);
    }

    fn on_mouse_button_event(&self, event: &mut MouseButtonEvent) {
        (**self).on_mouse_button_event(event);
    }

    fn on_key_event(&self, event: &mut KeyInputEvent) {
        (**self).on_key_event(event);
    }

    fn on_touch_event(&self, event: &mut TouchEvent) {
        (**self).on_touch_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn key_event_kinds() {
        let press = KeyInputEvent::press(KeyCode::KeyA, 'a');
        assert!(press.is_pressed());
        assert!(!press.is_repeating());

        let repeat = KeyInputEvent::repeat(KeyCode::KeyA, '\0');
        assert!(repeat.is_pressed());
        assert!(repeat.is_repeating());

        let release = KeyInputEvent::release(KeyCode::KeyA, 'a');
        assert!(release.is_released());
    }

    #[test]
    fn consumed_flag() {
        let mut event = MouseMotionEvent::new(1, 2, 0, 0);
        assert!(!event.is_consumed());
        event.set_consumed();
        assert!(event.is_consumed());
    }

    #[test]
    fn winit_button_indices() {
        assert_eq!(MouseButtonEvent::button_index_of(MouseButton::Left), 0);
        assert_eq!(MouseButtonEvent::button_index_of(MouseButton::Right), 1);
        assert_eq!(MouseButtonEvent::button_index_of(MouseButton::Middle), 2);
        assert_eq!(MouseButtonEvent::button_index_of(MouseButton::Other(2)), 7);
    }

    #[test]
    fn winit_wheel_delta() {
        assert_eq!(MouseMotionEvent::wheel_delta_of(MouseScrollDelta::LineDelta(0.0, 1.0)), 120);
        assert_eq!(MouseMotionEvent::wheel_delta_of(MouseScrollDelta::LineDelta(0.0, -2.0)), -240);
        assert_eq!(
            MouseMotionEvent::wheel_delta_of(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 50.0))),
            60
        );
    }
}
