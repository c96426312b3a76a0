//! Input translation between a rendering engine and an embedded GUI scene.
//!
//! The engine delivers raw key, mouse, joystick, and touch events on its
//! simulation thread. [`InputBridge`] tracks just enough state to rebuild
//! the events the embedded scene expects, decides whether the overlay owns the
//! pointer, and forwards the results to the scene.
//!
//! # Core Types
//!
//! - [`InputBridge`]: The engine listener; entry point for all native events
//! - [`KeyState`]: Pressed keys and the character typed for each
//! - [`MouseButtonState`]: Button flags shared with the GUI context
//! - [`GuiThread`]: Dedicated thread running deferred mouse events in order
//!
//! # Threading
//!
//! Key events are translated and emitted inline on the engine thread. Mouse
//! events are captured on the engine thread and emitted on the GUI thread;
//! button flags, modifiers, and the scene handle are read again when the
//! deferred event runs.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use fxbridge_input::{GuiThread, GuiThreadConfig, InputBridge, RawInputListener};
//!
//! let gui = Arc::new(GuiThread::spawn(GuiThreadConfig::default())?);
//! let bridge = InputBridge::new(container, gui.clone());
//!
//! // Keep existing engine input working
//! bridge.set_passthrough_listener(camera_controller);
//!
//! // While a drag session is active
//! bridge.set_dnd_handler(Some(Box::new(drag_session)))?;
//! // ...
//! bridge.set_dnd_handler(None)?;
//! ```

mod arbiter;
mod bridge;
mod deferred;
mod dispatcher;
mod key_state;
mod key_table;
mod mapping;
mod mouse_state;
mod native;

pub use arbiter::{decide_button, decide_motion, ButtonDecision, FocusChange, MotionDecision};
pub use bridge::InputBridge;
pub use dispatcher::{GuiThread, GuiThreadConfig};
pub use key_state::{KeyState, SharedModifiers};
pub use key_table::{AwtKeyTable, KeyCodeTable};
pub use mapping::{button_event_kind, classify_motion, target_key_code, wheel_rotation, WHEEL_NOTCH_DELTA};
pub use mouse_state::{ButtonSlot, ButtonSnapshot, MouseButtonState};
pub use native::{
    JoyAxisEvent, JoyButtonEvent, KeyInputEvent, MouseButtonEvent, MouseMotionEvent,
    RawInputListener, TouchEvent,
};

// Re-export winit types commonly used with native events
pub use winit::event::{ElementState, TouchPhase};
pub use winit::keyboard::KeyCode;
