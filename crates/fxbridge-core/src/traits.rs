//! Collaborators owned outside the adapter.
//!
//! The adapter only observes these: it never controls their lifecycle, and
//! every query may answer differently from one call to the next.

use std::sync::Arc;

use glam::IVec2;

use crate::error::Result;
use crate::events::{SceneKeyEvent, SceneMouseEvent};

/// The window/surface hosting the embedded scene.
///
/// Queried from both the engine thread and the GUI thread.
pub trait Container: Send + Sync {
    /// Returns `true` while the overlay holds logical keyboard focus.
    fn is_focused(&self) -> bool;

    /// Returns `true` if the GUI-space position lies on the visible overlay.
    fn is_covered(&self, x: i32, y: i32) -> bool;

    /// Give the overlay logical focus.
    fn grab_focus(&self);

    /// Take logical focus away from the overlay.
    fn lose_focus(&self);

    /// Screen position of the overlay's window.
    fn window_offset(&self) -> IVec2;

    /// The scene's event sink, if the scene currently exists.
    fn scene(&self) -> Option<Arc<dyn EmbeddedScene>>;

    /// Height of the scene surface in pixels, if the scene currently exists.
    fn scene_height(&self) -> Option<f64>;

    /// The engine's cursor state, available once the application is running.
    fn cursor_state(&self) -> Option<&dyn CursorState>;
}

/// Cursor visibility as tracked by the engine's input manager.
pub trait CursorState: Send + Sync {
    /// Returns `false` while the engine captures the pointer (free-look).
    fn is_cursor_visible(&self) -> bool;
}

/// Low-level event entry point of the embedded scene.
pub trait EmbeddedScene: Send + Sync {
    fn key_event(&self, event: SceneKeyEvent);
    fn mouse_event(&self, event: SceneMouseEvent);
}

/// Observer of pointer updates during a drag-and-drop session.
pub trait DndHandler: Send + Sync {
    fn mouse_update(&self, x: i32, y: i32, primary_down: bool);
}

/// A unit of work for the GUI execution context.
pub type GuiTask = Box<dyn FnOnce() + Send + 'static>;

/// The GUI toolkit's single-threaded execution context.
///
/// Implementations must run tasks in submission order and must not block the
/// submitter.
pub trait GuiExecutor: Send + Sync {
    fn submit(&self, task: GuiTask) -> Result<()>;
}

impl<T: DndHandler + ?Sized> DndHandler for Arc<T> {
    fn mouse_update(&self, x: i32, y: i32, primary_down: bool) {
        (**self).mouse_update(x, y, primary_down);
    }
}
