#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fxbridge_core::GuiExecutor;
use fxbridge_input::{
    InputBridge, JoyAxisEvent, JoyButtonEvent, KeyInputEvent, MouseButtonEvent, MouseMotionEvent,
    RawInputListener, TouchEvent,
};
use fxbridge_test::{FakeContainer, RecordingScene};
use parking_lot::Mutex;

/// Passthrough listener recording callback names, optionally consuming input.
#[derive(Debug, Default)]
pub struct RecordingListener {
    calls: Mutex<Vec<&'static str>>,
    consume: AtomicBool,
}

impl RecordingListener {
    pub fn consuming() -> Self {
        let listener = Self::default();
        listener.consume.store(true, Ordering::SeqCst);
        listener
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    fn record(&self, name: &'static str) -> bool {
        self.calls.lock().push(name);
        self.consume.load(Ordering::SeqCst)
    }
}

impl RawInputListener for RecordingListener {
    fn begin_input(&self) {
        self.record("begin");
    }

    fn end_input(&self) {
        self.record("end");
    }

    fn on_joy_axis_event(&self, event: &mut JoyAxisEvent) {
        if self.record("joy_axis") {
            event.set_consumed();
        }
    }

    fn on_joy_button_event(&self, event: &mut JoyButtonEvent) {
        if self.record("joy_button") {
            event.set_consumed();
        }
    }

    fn on_mouse_motion_event(&self, event: &mut MouseMotionEvent) {
        if self.record("motion") {
            event.set_consumed();
        }
    }

    fn on_mouse_button_event(&self, event: &mut MouseButtonEvent) {
        if self.record("button") {
            event.set_consumed();
        }
    }

    fn on_key_event(&self, event: &mut KeyInputEvent) {
        if self.record("key") {
            event.set_consumed();
        }
    }

    fn on_touch_event(&self, event: &mut TouchEvent) {
        if self.record("touch") {
            event.set_consumed();
        }
    }
}

pub struct Fixture {
    pub container: Arc<FakeContainer>,
    pub scene: Arc<RecordingScene>,
    pub bridge: InputBridge,
}

/// Bridge over a 100 pixel tall scene.
pub fn fixture(executor: Arc<dyn GuiExecutor>) -> Fixture {
    fxbridge_test::init_tracing();
    let container = Arc::new(FakeContainer::new(100.0));
    let scene = container.recorder();
    let bridge = InputBridge::new(container.clone(), executor);
    Fixture {
        container,
        scene,
        bridge,
    }
}
