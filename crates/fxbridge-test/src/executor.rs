//! Executors standing in for the GUI thread.

use std::collections::VecDeque;

use fxbridge_core::{Error, GuiExecutor, GuiTask, Result};
use parking_lot::Mutex;

/// Runs every task immediately on the submitting thread.
#[derive(Debug, Default)]
pub struct InlineExecutor;

impl GuiExecutor for InlineExecutor {
    fn submit(&self, task: GuiTask) -> Result<()> {
        task();
        Ok(())
    }
}

/// Holds tasks until the test runs them.
///
/// Lets a test change shared state between submission and execution.
#[derive(Default)]
pub struct QueuedExecutor {
    tasks: Mutex<VecDeque<GuiTask>>,
}

impl QueuedExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Run queued tasks in submission order, returning how many ran.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        // Pop one at a time so tasks may submit more work
        loop {
            let Some(task) = self.tasks.lock().pop_front() else {
                break;
            };
            task();
            ran += 1;
        }
        ran
    }
}

impl GuiExecutor for QueuedExecutor {
    fn submit(&self, task: GuiTask) -> Result<()> {
        self.tasks.lock().push_back(task);
        Ok(())
    }
}

/// An executor whose context has shut down.
#[derive(Debug, Default)]
pub struct ClosedExecutor;

impl GuiExecutor for ClosedExecutor {
    fn submit(&self, _task: GuiTask) -> Result<()> {
        Err(Error::ExecutorClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn queued_runs_in_order() {
        let executor = QueuedExecutor::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let seen = Arc::clone(&seen);
            executor.submit(Box::new(move || seen.lock().push(i))).unwrap();
        }
        assert_eq!(executor.pending(), 3);
        assert!(seen.lock().is_empty());

        assert_eq!(executor.run_all(), 3);
        assert_eq!(*seen.lock(), vec![0, 1, 2]);
        assert_eq!(executor.pending(), 0);
    }

    #[test]
    fn closed_rejects() {
        assert!(ClosedExecutor.submit(Box::new(|| {})).is_err());
    }
}
