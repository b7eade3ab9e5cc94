//! Core runtime logic for perch.
//!
//! This module contains the non-UI “engine” pieces used by the application:
//! - [fs]: directory listing and file operations (see [list_dir], [DirEntry], [FsError]).
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.
//!
//! Most callers will import [list_dir], [DirEntry], and [EntryKind] from this module.

pub mod fs;
pub mod terminal;

pub use fs::{DirEntry, EntryKind, FsError, create_file, delete_file, list_dir, resolve_dir};
