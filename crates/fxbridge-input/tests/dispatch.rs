mod common;

use std::sync::Arc;

use common::fixture;
use fxbridge_core::{Error, Modifiers, MouseEventKind};
use fxbridge_input::{
    ElementState, GuiThread, GuiThreadConfig, KeyCode, KeyInputEvent, MouseButtonEvent,
    MouseMotionEvent, RawInputListener,
};
use fxbridge_test::{ClosedExecutor, QueuedExecutor, RecordingDndHandler};
use glam::IVec2;

#[test]
fn button_flags_are_read_when_the_task_runs() {
    let executor = Arc::new(QueuedExecutor::new());
    let f = fixture(executor.clone());

    f.bridge
        .on_mouse_button_event(&mut MouseButtonEvent::new(0, ElementState::Pressed, 10, 20));
    f.bridge
        .on_mouse_button_event(&mut MouseButtonEvent::new(0, ElementState::Released, 10, 20));
    assert_eq!(executor.pending(), 2);
    assert!(f.scene.mouse_events().is_empty());

    executor.run_all();
    let events = f.scene.mouse_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, MouseEventKind::Pressed);
    assert_eq!(events[1].kind, MouseEventKind::Released);
    // Both saw the latest flags, not the flags at intake
    assert!(!events[0].primary_down);
    assert!(!events[1].primary_down);
}

#[test]
fn modifiers_and_offset_are_read_when_the_task_runs() {
    let executor = Arc::new(QueuedExecutor::new());
    let f = fixture(executor.clone());

    f.bridge.on_mouse_motion_event(&mut MouseMotionEvent::new(10, 20, 0, 0));
    f.bridge.on_key_event(&mut KeyInputEvent::press(KeyCode::ShiftRight, '\0'));
    f.container.set_window_offset(IVec2::new(5, 7));

    executor.run_all();
    let emitted = f.scene.mouse_events()[0];
    assert!(emitted.shift);
    assert_eq!(emitted.modifiers(), Modifiers::SHIFT);
    assert_eq!((emitted.screen_x, emitted.screen_y), (15, 87));
}

#[test]
fn stale_scene_drops_event_but_notifies_drag() {
    let executor = Arc::new(QueuedExecutor::new());
    let f = fixture(executor.clone());
    let dnd = Arc::new(RecordingDndHandler::new());
    f.bridge.set_dnd_handler(Some(Box::new(Arc::clone(&dnd)))).unwrap();

    f.bridge
        .on_mouse_button_event(&mut MouseButtonEvent::new(0, ElementState::Pressed, 10, 20));
    f.bridge.on_mouse_motion_event(&mut MouseMotionEvent::new(15, 25, 5, 5));
    f.container.set_scene_present(false);

    assert_eq!(executor.run_all(), 2);
    assert!(f.scene.mouse_events().is_empty());
    assert_eq!(dnd.updates(), vec![(10, 80, true), (15, 75, true)]);
}

#[test]
fn motion_dropped_if_cursor_hidden_before_run() {
    let executor = Arc::new(QueuedExecutor::new());
    let f = fixture(executor.clone());

    f.bridge.on_mouse_motion_event(&mut MouseMotionEvent::new(10, 20, 0, 0));
    f.bridge
        .on_mouse_button_event(&mut MouseButtonEvent::new(0, ElementState::Released, 10, 20));
    f.container.set_cursor_visible(false);

    executor.run_all();
    let events = f.scene.mouse_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, MouseEventKind::Released);
}

#[test]
fn second_dnd_handler_is_rejected() {
    let f = fixture(Arc::new(QueuedExecutor::new()));
    let first = Arc::new(RecordingDndHandler::new());
    let second = Arc::new(RecordingDndHandler::new());

    f.bridge.set_dnd_handler(Some(Box::new(Arc::clone(&first)))).unwrap();
    let result = f.bridge.set_dnd_handler(Some(Box::new(Arc::clone(&second))));
    assert!(matches!(result, Err(Error::DuplicateDndHandler)));
    assert!(f.bridge.has_dnd_handler());

    f.bridge.set_dnd_handler(None).unwrap();
    assert!(!f.bridge.has_dnd_handler());
    f.bridge.set_dnd_handler(None).unwrap();
    f.bridge.set_dnd_handler(Some(Box::new(second))).unwrap();
    assert!(f.bridge.has_dnd_handler());
}

#[test]
fn detached_dnd_handler_sees_nothing() {
    let executor = Arc::new(QueuedExecutor::new());
    let f = fixture(executor.clone());
    let dnd = Arc::new(RecordingDndHandler::new());
    f.bridge.set_dnd_handler(Some(Box::new(Arc::clone(&dnd)))).unwrap();

    f.bridge.on_mouse_motion_event(&mut MouseMotionEvent::new(1, 1, 0, 0));
    f.bridge.set_dnd_handler(None).unwrap();
    executor.run_all();

    assert!(dnd.updates().is_empty());
    assert_eq!(f.scene.mouse_events().len(), 1);
}

#[test]
fn closed_executor_drops_mouse_events() {
    let f = fixture(Arc::new(ClosedExecutor));

    let mut event = MouseButtonEvent::new(0, ElementState::Pressed, 10, 20);
    f.bridge.on_mouse_button_event(&mut event);

    // Intake side effects still happen
    assert!(event.is_consumed());
    assert_eq!(f.container.grab_count(), 1);
    assert!(f.scene.mouse_events().is_empty());
}

#[test]
fn gui_thread_preserves_order() {
    let gui = Arc::new(GuiThread::spawn(GuiThreadConfig::new("dispatch-test")).unwrap());
    let f = fixture(gui.clone());

    for x in 0..50 {
        f.bridge.on_mouse_motion_event(&mut MouseMotionEvent::new(x, 20, 1, 0));
    }
    gui.wait_idle().unwrap();

    let xs: Vec<i32> = f.scene.mouse_events().iter().map(|event| event.x).collect();
    assert_eq!(xs, (0..50).collect::<Vec<_>>());
}
