//! Recording fakes for the bridge's collaborators.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use fxbridge_core::{
    Container, CursorState, DndHandler, EmbeddedScene, SceneKeyEvent, SceneMouseEvent,
};
use glam::IVec2;
use parking_lot::Mutex;

/// An event received by [`RecordingScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Key(SceneKeyEvent),
    Mouse(SceneMouseEvent),
}

/// Scene sink that records every event it receives.
#[derive(Debug, Default)]
pub struct RecordingScene {
    events: Mutex<Vec<SceneEvent>>,
}

impl RecordingScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<SceneEvent> {
        self.events.lock().clone()
    }

    #[must_use]
    pub fn key_events(&self) -> Vec<SceneKeyEvent> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SceneEvent::Key(key) => Some(*key),
                SceneEvent::Mouse(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn mouse_events(&self) -> Vec<SceneMouseEvent> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SceneEvent::Mouse(mouse) => Some(*mouse),
                SceneEvent::Key(_) => None,
            })
            .collect()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EmbeddedScene for RecordingScene {
    fn key_event(&self, event: SceneKeyEvent) {
        self.events.lock().push(SceneEvent::Key(event));
    }

    fn mouse_event(&self, event: SceneMouseEvent) {
        self.events.lock().push(SceneEvent::Mouse(event));
    }
}

/// Engine cursor state with a settable visibility flag.
#[derive(Debug)]
pub struct FakeCursor {
    visible: AtomicBool,
}

impl FakeCursor {
    #[must_use]
    pub const fn new(visible: bool) -> Self {
        Self {
            visible: AtomicBool::new(visible),
        }
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}

impl CursorState for FakeCursor {
    fn is_cursor_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// Which positions the overlay covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coverage {
    Everywhere,
    Nowhere,
    /// Half-open rectangle `[min, max)`.
    Rect(IVec2, IVec2),
}

/// Container with scriptable focus, coverage, cursor, and scene lifecycle.
///
/// Starts unfocused, fully covering, with a visible cursor and a live scene.
#[derive(Debug)]
pub struct FakeContainer {
    focused: AtomicBool,
    cursor: FakeCursor,
    cursor_present: AtomicBool,
    coverage: Mutex<Coverage>,
    offset: Mutex<IVec2>,
    scene: Arc<RecordingScene>,
    scene_present: AtomicBool,
    scene_height: Mutex<f64>,
    grabs: AtomicUsize,
    losses: AtomicUsize,
}

impl FakeContainer {
    /// Create a container whose scene is `scene_height` pixels tall.
    #[must_use]
    pub fn new(scene_height: f64) -> Self {
        Self {
            focused: AtomicBool::new(false),
            cursor: FakeCursor::new(true),
            cursor_present: AtomicBool::new(true),
            coverage: Mutex::new(Coverage::Everywhere),
            offset: Mutex::new(IVec2::ZERO),
            scene: Arc::new(RecordingScene::new()),
            scene_present: AtomicBool::new(true),
            scene_height: Mutex::new(scene_height),
            grabs: AtomicUsize::new(0),
            losses: AtomicUsize::new(0),
        }
    }

    /// The scene recorder; stays readable after the scene is removed.
    #[must_use]
    pub fn recorder(&self) -> Arc<RecordingScene> {
        Arc::clone(&self.scene)
    }

    pub fn set_focused(&self, focused: bool) {
        self.focused.store(focused, Ordering::SeqCst);
    }

    pub fn set_cursor_visible(&self, visible: bool) {
        self.cursor.set_visible(visible);
    }

    /// Make the engine cursor state unavailable (or available again).
    pub fn set_cursor_present(&self, present: bool) {
        self.cursor_present.store(present, Ordering::SeqCst);
    }

    /// Cover every position (`true`) or none (`false`).
    pub fn set_covered(&self, covered: bool) {
        *self.coverage.lock() = if covered {
            Coverage::Everywhere
        } else {
            Coverage::Nowhere
        };
    }

    /// Cover only the half-open rectangle `[min, max)`.
    pub fn set_coverage_rect(&self, min: IVec2, max: IVec2) {
        *self.coverage.lock() = Coverage::Rect(min, max);
    }

    pub fn set_window_offset(&self, offset: IVec2) {
        *self.offset.lock() = offset;
    }

    pub fn set_scene_height(&self, height: f64) {
        *self.scene_height.lock() = height;
    }

    /// Tear down (`false`) or recreate (`true`) the scene.
    pub fn set_scene_present(&self, present: bool) {
        self.scene_present.store(present, Ordering::SeqCst);
    }

    /// Number of `grab_focus` calls.
    #[must_use]
    pub fn grab_count(&self) -> usize {
        self.grabs.load(Ordering::SeqCst)
    }

    /// Number of `lose_focus` calls.
    #[must_use]
    pub fn lose_count(&self) -> usize {
        self.losses.load(Ordering::SeqCst)
    }
}

impl Container for FakeContainer {
    fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    fn is_covered(&self, x: i32, y: i32) -> bool {
        match *self.coverage.lock() {
            Coverage::Everywhere => true,
            Coverage::Nowhere => false,
            Coverage::Rect(min, max) => x >= min.x && x < max.x && y >= min.y && y < max.y,
        }
    }

    fn grab_focus(&self) {
        self.grabs.fetch_add(1, Ordering::SeqCst);
        self.focused.store(true, Ordering::SeqCst);
    }

    fn lose_focus(&self) {
        self.losses.fetch_add(1, Ordering::SeqCst);
        self.focused.store(false, Ordering::SeqCst);
    }

    fn window_offset(&self) -> IVec2 {
        *self.offset.lock()
    }

    fn scene(&self) -> Option<Arc<dyn EmbeddedScene>> {
        if self.scene_present.load(Ordering::SeqCst) {
            Some(Arc::clone(&self.scene) as Arc<dyn EmbeddedScene>)
        } else {
            None
        }
    }

    fn scene_height(&self) -> Option<f64> {
        self.scene_present
            .load(Ordering::SeqCst)
            .then(|| *self.scene_height.lock())
    }

    fn cursor_state(&self) -> Option<&dyn CursorState> {
        if self.cursor_present.load(Ordering::SeqCst) {
            Some(&self.cursor)
        } else {
            None
        }
    }
}

/// Drag-and-drop handler recording every pointer update.
#[derive(Debug, Default)]
pub struct RecordingDndHandler {
    updates: Mutex<Vec<(i32, i32, bool)>>,
}

impl RecordingDndHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates as `(x, y, primary_down)` in arrival order.
    #[must_use]
    pub fn updates(&self) -> Vec<(i32, i32, bool)> {
        self.updates.lock().clone()
    }
}

impl DndHandler for RecordingDndHandler {
    fn mouse_update(&self, x: i32, y: i32, primary_down: bool) {
        self.updates.lock().push((x, y, primary_down));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_calls_are_counted() {
        let container = FakeContainer::new(100.0);
        container.grab_focus();
        assert!(container.is_focused());
        container.lose_focus();
        assert!(!container.is_focused());
        assert_eq!(container.grab_count(), 1);
        assert_eq!(container.lose_count(), 1);
    }

    #[test]
    fn coverage_rect_is_half_open() {
        let container = FakeContainer::new(100.0);
        container.set_coverage_rect(IVec2::new(0, 0), IVec2::new(10, 10));
        assert!(container.is_covered(0, 0));
        assert!(container.is_covered(9, 9));
        assert!(!container.is_covered(10, 5));
    }

    #[test]
    fn scene_lifecycle() {
        let container = FakeContainer::new(100.0);
        assert!(container.scene().is_some());
        container.set_scene_present(false);
        assert!(container.scene().is_none());
        assert!(container.scene_height().is_none());
    }
}
