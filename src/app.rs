//! Application state machine for perch.
//!
//! - [state]: the [AppState] aggregate and the per-frame message dispatcher.
//! - [nav]: current directory, entry list and selection.
//! - [dialog]: the bounded input buffer behind the new-file dialog.
//! - [message]: the single-slot pending message queued by input handling.
//! - [keymap]: symbolic key to action mapping built from the config.
//! - [handlers]: key event handling for listing and dialog modes.

pub mod dialog;
pub mod handlers;
pub mod keymap;
pub mod message;
pub mod nav;
pub mod state;

pub use dialog::DialogState;
pub use message::Message;
pub use nav::{NavState, SelectionPolicy};
pub use state::{AppState, KeypressResult, UiMode};
