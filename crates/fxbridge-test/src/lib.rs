//! Test harness for the fxbridge input adapter.
//!
//! Provides recording fakes for every collaborator of the bridge, and
//! executors that make deferred dispatch deterministic.

pub mod executor;
pub mod fakes;

pub use executor::{ClosedExecutor, InlineExecutor, QueuedExecutor};
pub use fakes::{FakeContainer, FakeCursor, RecordingDndHandler, RecordingScene, SceneEvent};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber for test output.
///
/// Honors `RUST_LOG`, defaulting to `warn`. Safe to call from every test.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
