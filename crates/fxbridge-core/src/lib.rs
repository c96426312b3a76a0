//! Core types and traits for the fxbridge input adapter.
//!
//! This crate provides the vocabulary shared by the translation core and its
//! collaborators:
//! - The embedded scene event protocol (key and mouse events, modifiers)
//! - Target key codes and the bounds of the dense key tables
//! - Coordinate conversion between engine and GUI space
//! - Traits for the externally owned container, scene, and executor
//! - Common error types

pub mod coords;
pub mod error;
pub mod events;
pub mod keycodes;
pub mod traits;

pub use coords::{flip_y, to_screen};
pub use error::{Error, Result};
pub use events::{KeyEventKind, Modifiers, MouseEventKind, SceneButton, SceneKeyEvent, SceneMouseEvent};
pub use traits::{Container, CursorState, DndHandler, EmbeddedScene, GuiExecutor, GuiTask};
