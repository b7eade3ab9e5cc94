//! The pending-message type for perch.
//!
//! Input handlers never touch the filesystem directly: they queue one of
//! these intents, and the dispatcher executes it at the top of the next
//! frame, before rendering. At most one message is outstanding, which the
//! application state enforces with an `Option<Message>` slot.

use std::path::PathBuf;

/// A queued intent, executed once at the start of the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Re-list the current directory with the current hidden flag.
    RefreshEntries,
    /// Resolve the path against the current directory and enter it.
    ChangeDirectory(PathBuf),
    /// Create an empty file with this name in the current directory.
    CreateFile(String),
    /// Delete the currently selected entry's file.
    DeleteFile,
}
