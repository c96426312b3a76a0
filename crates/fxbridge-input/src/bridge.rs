//! The input bridge: engine listener that feeds the embedded scene.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use fxbridge_core::{
    flip_y, Container, DndHandler, Error, GuiExecutor, KeyEventKind, Modifiers, Result,
    SceneButton, SceneKeyEvent,
};
use glam::IVec2;
use parking_lot::Mutex;

use crate::arbiter::{self, FocusChange};
use crate::deferred::{Captured, LiveState};
use crate::key_state::KeyState;
use crate::key_table::{AwtKeyTable, KeyCodeTable};
use crate::mapping;
use crate::mouse_state::{ButtonSlot, ButtonSnapshot, MouseButtonState};
use crate::native::{
    JoyAxisEvent, JoyButtonEvent, KeyInputEvent, MouseButtonEvent, MouseMotionEvent,
    RawInputListener, TouchEvent,
};

/// Translates engine input into embedded scene events.
///
/// Install it as the engine's raw input listener. Every callback first goes to
/// the passthrough listener, if one is set, so other engine subsystems see all
/// input unchanged.
///
/// Key events are emitted synchronously on the calling (engine) thread. Mouse
/// events are handed to the GUI executor and emitted there in order.
///
/// # Usage
///
/// ```ignore
/// let gui = Arc::new(GuiThread::spawn(GuiThreadConfig::default())?);
/// let bridge = Arc::new(InputBridge::new(container, gui.clone()));
/// bridge.set_passthrough_listener(engine_listener);
///
/// // On the engine thread
/// bridge.on_key_event(&mut event);
/// ```
pub struct InputBridge {
    /// Engine key code to target key code table.
    key_table: Box<dyn KeyCodeTable>,
    /// Pressed keys and typed characters. Only the engine thread locks this.
    keys: Mutex<KeyState>,
    /// Listener receiving every event before translation.
    passthrough: ArcSwapOption<Box<dyn RawInputListener>>,
    /// GUI execution context for mouse events.
    executor: Arc<dyn GuiExecutor>,
    /// State shared with deferred mouse events.
    live: LiveState,
}

impl InputBridge {
    /// Create a bridge using the default key table.
    #[must_use]
    pub fn new(container: Arc<dyn Container>, executor: Arc<dyn GuiExecutor>) -> Self {
        Self::with_key_table(container, executor, AwtKeyTable)
    }

    /// Create a bridge with a custom key table.
    #[must_use]
    pub fn with_key_table(
        container: Arc<dyn Container>,
        executor: Arc<dyn GuiExecutor>,
        key_table: impl KeyCodeTable + 'static,
    ) -> Self {
        let keys = KeyState::new();
        let modifiers = keys.shared_modifiers();
        Self {
            key_table: Box::new(key_table),
            keys: Mutex::new(keys),
            passthrough: ArcSwapOption::empty(),
            executor,
            live: LiveState {
                container,
                buttons: Arc::new(MouseButtonState::new()),
                modifiers,
                dnd: Arc::new(ArcSwapOption::empty()),
            },
        }
    }

    /// Set the listener that receives every event before translation.
    pub fn set_passthrough_listener(&self, listener: impl RawInputListener + 'static) {
        self.passthrough.store(Some(Arc::new(Box::new(listener))));
    }

    /// Remove the passthrough listener.
    pub fn clear_passthrough_listener(&self) {
        self.passthrough.store(None);
    }

    /// Attach (`Some`) or detach (`None`) the drag-and-drop handler.
    ///
    /// Attaching while another handler is attached fails with
    /// [`Error::DuplicateDndHandler`] and leaves the existing handler in place.
    pub fn set_dnd_handler(&self, handler: Option<Box<dyn DndHandler>>) -> Result<()> {
        let Some(handler) = handler else {
            self.live.dnd.store(None);
            tracing::debug!("drag-and-drop handler detached");
            return Ok(());
        };

        let current = self.live.dnd.load();
        if current.is_none() {
            let previous = self.live.dnd.compare_and_swap(&current, Some(Arc::new(handler)));
            if previous.is_none() {
                tracing::debug!("drag-and-drop handler attached");
                return Ok(());
            }
        }

        tracing::error!("duplicate drag-and-drop handler registration");
        Err(Error::DuplicateDndHandler)
    }

    /// Returns `true` if a drag-and-drop handler is attached.
    #[must_use]
    pub fn has_dnd_handler(&self) -> bool {
        self.live.dnd.load().is_some()
    }

    /// Returns `true` if the target key code is currently held.
    #[must_use]
    pub fn is_key_pressed(&self, code: i32) -> bool {
        self.keys.lock().is_pressed(code)
    }

    /// Current modifier flags.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.live.modifiers.load()
    }

    /// Current mouse button flags.
    #[must_use]
    pub fn mouse_buttons(&self) -> ButtonSnapshot {
        self.live.buttons.snapshot()
    }

    /// Forget all held keys and buttons, e.g. when the host window loses focus.
    pub fn reset(&self) {
        self.keys.lock().clear();
        self.live.buttons.clear();
    }

    /// Translate a key event and emit it to the scene if the overlay is focused.
    pub fn process_key(&self, event: &mut KeyInputEvent) {
        self.forward(|listener| listener.on_key_event(event));

        let container = &self.live.container;
        let Some(scene) = container.scene() else {
            return;
        };

        let Some(code) =
            mapping::target_key_code(self.key_table.as_ref(), event.key(), event.key_char())
        else {
            tracing::trace!("unsupported key {:?}, dropping", event.key());
            return;
        };

        let focused = container.is_focused();
        if focused {
            event.set_consumed();
        }

        let mut keys = self.keys.lock();
        let (kinds, ch): (&[KeyEventKind], char) = if event.is_repeating() {
            // Repeats reuse the character typed at the press
            (&[KeyEventKind::Typed], keys.typed_char(code))
        } else if event.is_pressed() {
            keys.press(code, event.key_char());
            (&[KeyEventKind::Pressed, KeyEventKind::Typed], event.key_char())
        } else {
            (&[KeyEventKind::Released], keys.release(code))
        };
        let modifiers = keys.modifiers();
        drop(keys);

        if focused {
            for &kind in kinds {
                scene.key_event(SceneKeyEvent::new(kind, code, ch, modifiers));
            }
        }
    }

    /// Translate a button event, update focus, and defer it to the GUI context.
    ///
    /// Fails only if the engine's cursor state is unavailable.
    pub fn process_mouse_button(&self, event: &mut MouseButtonEvent) -> Result<()> {
        self.forward(|listener| listener.on_mouse_button_event(event));

        let container = &self.live.container;
        let cursor = container
            .cursor_state()
            .ok_or(Error::MissingCollaborator("cursor state"))?;
        if container.scene().is_none() {
            return Ok(());
        }
        let Some(height) = container.scene_height() else {
            return Ok(());
        };

        let Some(slot) = ButtonSlot::from_native_index(event.button_index()) else {
            tracing::trace!("unsupported mouse button {}, dropping", event.button_index());
            return Ok(());
        };

        let local = IVec2::new(event.x(), flip_y(height, event.y()));
        self.live.buttons.set(slot, event.is_pressed());

        let covered = container.is_covered(local.x, local.y);
        let decision = arbiter::decide_button(covered, cursor.is_cursor_visible(), event.state());

        if decision.consume {
            event.set_consumed();
        }
        match decision.focus {
            FocusChange::Grab => container.grab_focus(),
            FocusChange::Lose => container.lose_focus(),
            FocusChange::Keep => {}
        }

        if decision.dispatch {
            let button = slot.scene_button();
            self.defer(Captured {
                local,
                kind: mapping::button_event_kind(event.state()),
                button,
                wheel_rotation: 0,
                popup_trigger: button == SceneButton::Secondary,
                requires_visible_cursor: false,
            });
        }
        Ok(())
    }

    /// Classify pointer motion and defer it to the GUI context.
    ///
    /// Fails only if the engine's cursor state is unavailable.
    pub fn process_mouse_motion(&self, event: &mut MouseMotionEvent) -> Result<()> {
        self.forward(|listener| listener.on_mouse_motion_event(event));

        let container = &self.live.container;
        let cursor = container
            .cursor_state()
            .ok_or(Error::MissingCollaborator("cursor state"))?;
        if container.scene().is_none() {
            return Ok(());
        }
        let Some(height) = container.scene_height() else {
            return Ok(());
        };

        let local = IVec2::new(event.x(), flip_y(height, event.y()));
        let covered = container.is_covered(local.x, local.y);
        let decision = arbiter::decide_motion(covered, cursor.is_cursor_visible());

        if decision.consume {
            event.set_consumed();
        }

        if decision.dispatch {
            let wheel_rotation = mapping::wheel_rotation(event.delta_wheel());
            let (kind, button) = mapping::classify_motion(wheel_rotation, self.live.buttons.snapshot());
            self.defer(Captured {
                local,
                kind,
                button,
                wheel_rotation,
                popup_trigger: false,
                requires_visible_cursor: true,
            });
        }
        Ok(())
    }

    /// Hand a captured event to the GUI context. Never blocks.
    fn defer(&self, captured: Captured) {
        let live = self.live.clone();
        if let Err(err) = self.executor.submit(Box::new(move || live.emit(captured))) {
            tracing::warn!("dropping {:?} mouse event: {}", captured.kind, err);
        }
    }

    /// Run `f` with the passthrough listener, if one is set.
    fn forward(&self, f: impl FnOnce(&dyn RawInputListener)) {
        if let Some(listener) = self.passthrough.load_full() {
            f(&**listener);
        }
    }
}

impl RawInputListener for InputBridge {
    fn begin_input(&self) {
        self.forward(|listener| listener.begin_input());
    }

    fn end_input(&self) {
        self.forward(|listener| listener.end_input());
    }

    fn on_joy_axis_event(&self, event: &mut JoyAxisEvent) {
        self.forward(|listener| listener.on_joy_axis_event(event));
    }

    fn on_joy_button_event(&self, event: &mut JoyButtonEvent) {
        self.forward(|listener| listener.on_joy_button_event(event));
    }

    fn on_mouse_motion_event(&self, event: &mut MouseMotionEvent) {
        if let Err(err) = self.process_mouse_motion(event) {
            precondition_failed(&err);
        }
    }

    fn on_mouse_button_event(&self, event: &mut MouseButtonEvent) {
        if let Err(err) = self.process_mouse_button(event) {
            precondition_failed(&err);
        }
    }

    fn on_key_event(&self, event: &mut KeyInputEvent) {
        self.process_key(event);
    }

    fn on_touch_event(&self, event: &mut TouchEvent) {
        self.forward(|listener| listener.on_touch_event(event));
    }
}

/// The listener was installed before the engine was ready.
fn precondition_failed(err: &Error) -> ! {
    tracing::error!("input bridge precondition failed: {}", err);
    panic!("input bridge precondition failed: {err}");
}
