//! Navigation state and entry list logic for perch.
//!
//! Manages the current directory, the entry list and the selection index.
//! The selection invariant holds at all times: whenever the list is
//! non-empty, `0 <= selected < entries.len()`.

use crate::core::DirEntry;
use std::path::{Path, PathBuf};

/// What happens to the selection when the entry list is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Back to the first entry (navigation, hidden toggle).
    Reset,
    /// Keep the index, clamped to the new length (refresh after a
    /// deletion: the selection lands on the following item, or the new
    /// last item if the deleted one was last).
    Clamp,
}

/// Holds the navigation, selection and entry list state.
pub struct NavState {
    current_dir: PathBuf,
    entries: Vec<DirEntry>,
    selected: usize,
}

impl NavState {
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_dir: path,
            entries: Vec::new(),
            selected: 0,
        }
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.selected
    }

    /// The selected entry, or `None` on an empty listing. Selection is
    /// never indexed unchecked anywhere in the crate.
    pub fn selected_entry(&self) -> Option<&DirEntry> {
        self.entries.get(self.selected)
    }

    /// Moves the selection to the previous entry. Clamped at the first
    /// entry, no wraparound. Returns `true` if the selection moved.
    pub fn move_prev(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Moves the selection to the next entry. Clamped at the last entry,
    /// no wraparound. Returns `true` if the selection moved.
    pub fn move_next(&mut self) -> bool {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Sets a new current directory. The entry list is replaced by the
    /// following refresh, never carried across directories.
    pub fn set_dir(&mut self, path: PathBuf) {
        self.current_dir = path;
    }

    /// Replaces the entry list wholesale, adjusting the selection
    /// according to `policy`.
    pub fn replace_entries(&mut self, entries: Vec<DirEntry>, policy: SelectionPolicy) {
        self.entries = entries;
        self.selected = match policy {
            SelectionPolicy::Reset => 0,
            SelectionPolicy::Clamp => self.selected.min(self.entries.len().saturating_sub(1)),
        };
    }
}
