//! Mouse events deferred to the GUI execution context.
//!
//! A deferred event takes two inputs. [`Captured`] holds what was fixed at
//! intake on the engine thread: position, button, kind, and wheel rotation.
//! [`LiveState`] holds shared handles that are read only when the task runs:
//! button flags, modifiers, the drag-and-drop handler, the scene, cursor
//! visibility, and the window offset. Tasks run in submission order, so the
//! live reads see the latest state rather than the state at intake.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use fxbridge_core::{to_screen, Container, DndHandler, MouseEventKind, SceneButton, SceneMouseEvent};
use glam::IVec2;

use crate::key_state::SharedModifiers;
use crate::mouse_state::MouseButtonState;

/// Slot holding the optional drag-and-drop handler.
pub(crate) type DndSlot = ArcSwapOption<Box<dyn DndHandler>>;

/// Event parameters fixed at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Captured {
    /// Surface-local position, top-down.
    pub local: IVec2,
    pub kind: MouseEventKind,
    pub button: SceneButton,
    pub wheel_rotation: i32,
    pub popup_trigger: bool,
    /// Drop the event if the cursor has been hidden since intake.
    pub requires_visible_cursor: bool,
}

/// Shared state read at emission time.
#[derive(Clone)]
pub(crate) struct LiveState {
    pub(crate) container: Arc<dyn Container>,
    pub(crate) buttons: Arc<MouseButtonState>,
    pub(crate) modifiers: SharedModifiers,
    pub(crate) dnd: Arc<DndSlot>,
}

impl LiveState {
    /// Emit a captured event to the scene. Runs on the GUI context.
    pub(crate) fn emit(&self, captured: Captured) {
        let container = &self.container;

        if captured.requires_visible_cursor {
            let visible = container
                .cursor_state()
                .is_some_and(|cursor| cursor.is_cursor_visible());
            if !visible {
                tracing::trace!("cursor hidden before dispatch, dropping {:?}", captured.kind);
                return;
            }
        }

        let buttons = self.buttons.snapshot();

        // Drag sessions observe every position, even if the scene is gone
        if let Some(dnd) = self.dnd.load_full() {
            dnd.mouse_update(captured.local.x, captured.local.y, buttons.primary);
        }

        let Some(scene) = container.scene() else {
            tracing::trace!("scene gone before dispatch, dropping {:?}", captured.kind);
            return;
        };

        let screen = to_screen(captured.local, container.window_offset());
        let modifiers = self.modifiers.load();

        scene.mouse_event(SceneMouseEvent {
            kind: captured.kind,
            button: captured.button,
            primary_down: buttons.primary,
            middle_down: buttons.middle,
            secondary_down: buttons.secondary,
            x: captured.local.x,
            y: captured.local.y,
            screen_x: screen.x,
            screen_y: screen.y,
            shift: modifiers.shift(),
            ctrl: modifiers.ctrl(),
            alt: modifiers.alt(),
            meta: modifiers.meta(),
            wheel_rotation: captured.wheel_rotation,
            popup_trigger: captured.popup_trigger,
        });
    }
}
