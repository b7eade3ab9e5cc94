//! UI modules for perch.
//!
//! - [render]: the top-level per-frame renderer and the flowing entry layout.
//! - [widgets]: the new-file dialog and the status message overlay.

pub mod render;
pub mod widgets;

pub use render::render;
