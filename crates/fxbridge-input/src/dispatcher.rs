//! Dedicated GUI thread executing tasks in submission order.

use std::thread::{self, JoinHandle, ThreadId};

use crossbeam::channel::{self, Receiver, Sender};
use fxbridge_core::{Error, GuiExecutor, GuiTask, Result};

/// Configuration for the GUI thread.
#[derive(Debug, Clone)]
pub struct GuiThreadConfig {
    /// Thread name.
    pub name: String,
    /// Stack size in bytes (None for the platform default).
    pub stack_size: Option<usize>,
}

impl Default for GuiThreadConfig {
    fn default() -> Self {
        Self {
            name: "fxbridge-gui".to_string(),
            stack_size: None,
        }
    }
}

impl GuiThreadConfig {
    /// Create a config with the given thread name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the stack size.
    #[must_use]
    pub const fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }
}

/// Message sent to the GUI thread.
enum GuiMessage {
    Run(GuiTask),
    Shutdown,
}

/// Handle to a single-threaded GUI execution context.
///
/// Submission never blocks: the queue is unbounded. Tasks run one at a time in
/// the order they were submitted.
pub struct GuiThread {
    /// Channel feeding the thread.
    sender: Sender<GuiMessage>,
    /// Thread handle for joining on shutdown.
    thread: Option<JoinHandle<()>>,
    thread_id: ThreadId,
}

impl GuiThread {
    /// Spawn the GUI thread.
    pub fn spawn(config: GuiThreadConfig) -> Result<Self> {
        let (sender, receiver) = channel::unbounded::<GuiMessage>();

        let mut builder = thread::Builder::new().name(config.name.clone());
        if let Some(stack_size) = config.stack_size {
            builder = builder.stack_size(stack_size);
        }
        let thread = builder.spawn(move || Self::run_loop(&receiver))?;
        let thread_id = thread.thread().id();

        tracing::info!("GUI thread '{}' started", config.name);

        Ok(Self {
            sender,
            thread: Some(thread),
            thread_id,
        })
    }

    /// Main loop - blocks waiting for tasks and runs them.
    fn run_loop(receiver: &Receiver<GuiMessage>) {
        loop {
            match receiver.recv() {
                Ok(GuiMessage::Run(task)) => task(),
                Ok(GuiMessage::Shutdown) | Err(_) => return,
            }
        }
    }

    /// Returns `true` when called from the GUI thread itself.
    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    /// Block until every task submitted so far has run.
    ///
    /// Must not be called from the GUI thread.
    pub fn wait_idle(&self) -> Result<()> {
        debug_assert!(!self.is_current(), "wait_idle called on the GUI thread");
        let (done_tx, done_rx) = channel::bounded::<()>(1);
        self.submit(Box::new(move || {
            let _ = done_tx.send(());
        }))?;
        done_rx.recv().map_err(|_| Error::ExecutorClosed)
    }

    /// Stop accepting work, finish queued tasks, and join the thread.
    pub fn shutdown(&mut self) {
        // Ignore errors - the thread may already be gone
        let _ = self.sender.send(GuiMessage::Shutdown);

        if let Some(thread) = self.thread.take() {
            // Joining from the GUI thread itself would deadlock
            if !self.is_current() {
                let _ = thread.join();
            }
            tracing::info!("GUI thread stopped");
        }
    }
}

impl GuiExecutor for GuiThread {
    fn submit(&self, task: GuiTask) -> Result<()> {
        self.sender
            .send(GuiMessage::Run(task))
            .map_err(|_| Error::ExecutorClosed)
    }
}

impl Drop for GuiThread {
    fn drop(&mut self) {
        self.shutdown();
    }
}
