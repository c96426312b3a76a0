//! Error types for the adapter.

use thiserror::Error;

/// Adapter-wide error type.
///
/// Unsupported input and stale scene handles are not represented here: both
/// are silent drops.
#[derive(Error, Debug)]
pub enum Error {
    /// A second drag-and-drop handler was attached while one is active.
    #[error("duplicate drag-and-drop handler registration")]
    DuplicateDndHandler,

    /// A collaborator that must exist once the listener is installed is absent.
    #[error("missing required collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The GUI execution context no longer accepts tasks.
    #[error("GUI executor is closed")]
    ExecutorClosed,

    /// The GUI thread could not be started.
    #[error("failed to spawn GUI thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
