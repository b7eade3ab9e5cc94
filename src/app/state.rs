//! Application State and main controller module for perch.
//!
//! This module defines the overall [AppState] struct, which holds all major
//! application information and passes it to relevant UI/Terminal functions:
//! - Configuration (loaded from the config file) and the keymap built from it
//! - Navigation state (current directory, entries, selection)
//! - The new-file dialog buffer and the active UI mode
//! - The single-slot pending message drained once per frame
//! - The status message shown after a failed operation
//!
//! Input handlers queue a [Message]; [AppState::apply_pending] executes it
//! at the top of the next frame, before rendering. That single seam keeps
//! key handling free of filesystem side effects.

use crate::app::dialog::DialogState;
use crate::app::keymap::Keymap;
use crate::app::message::Message;
use crate::app::nav::{NavState, SelectionPolicy};
use crate::config::Config;
use crate::core::{self, FsError};

use std::io;
use std::path::{Path, PathBuf};

/// Enumeration for each individual keypress result processed.
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
}

/// The active UI mode. Exactly one mode owns input at any time; the
/// open dialog suppresses all listing bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Listing,
    NewFileDialog,
}

/// Main struct which holds the central application state of perch.
///
/// Created once at startup and mutated exclusively by the single loop
/// thread; there is no shared state and no locking anywhere.
pub struct AppState<'a> {
    config: &'a Config,
    keymap: Keymap,

    nav: NavState,
    dialog: DialogState,
    mode: UiMode,

    pending: Option<Message>,
    show_hidden: bool,
    status: Option<String>,
    running: bool,
}

impl<'a> AppState<'a> {
    /// Starts in the process working directory at launch.
    pub fn new(config: &'a Config) -> io::Result<Self> {
        let current_dir = std::env::current_dir()?;
        Ok(Self::from_dir(config, current_dir))
    }

    pub fn from_dir(config: &'a Config, initial_dir: PathBuf) -> Self {
        Self {
            config,
            keymap: Keymap::from_config(config),
            nav: NavState::new(initial_dir),
            dialog: DialogState::default(),
            mode: UiMode::Listing,
            // first frame fills the listing
            pending: Some(Message::RefreshEntries),
            show_hidden: config.general().show_hidden(),
            status: None,
            running: true,
        }
    }

    // Getters / accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub(crate) fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub(crate) fn nav_mut(&mut self) -> &mut NavState {
        &mut self.nav
    }

    #[inline]
    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    #[inline]
    pub(crate) fn dialog_mut(&mut self) -> &mut DialogState {
        &mut self.dialog
    }

    #[inline]
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    #[inline]
    pub(crate) fn set_mode(&mut self, mode: UiMode) {
        self.mode = mode;
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub(crate) fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
    }

    #[inline]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[inline]
    pub fn pending(&self) -> Option<&Message> {
        self.pending.as_ref()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Queues a message for the next frame. At most one is outstanding;
    /// one input event per frame means nothing is ever displaced.
    pub fn queue(&mut self, message: Message) {
        self.pending = Some(message);
    }

    // Message dispatch

    /// Drains and executes the pending message. Called once per frame,
    /// before rendering. Errors become the status message; a successful
    /// operation clears it.
    pub fn apply_pending(&mut self) {
        let Some(message) = self.pending.take() else {
            return;
        };

        match message {
            Message::RefreshEntries => self.refresh(SelectionPolicy::Reset),
            Message::ChangeDirectory(target) => self.change_directory(&target),
            Message::CreateFile(name) => self.create_file(&name),
            Message::DeleteFile => self.delete_selected(),
        }
    }

    /// Re-lists the current directory with the current hidden flag,
    /// replacing the entry list wholesale.
    fn refresh(&mut self, policy: SelectionPolicy) {
        match core::list_dir(self.nav.current_dir(), self.show_hidden) {
            Ok(entries) => {
                self.nav.replace_entries(entries, policy);
                self.status = None;
            }
            Err(e) => self.report(e),
        }
    }

    /// Enters `target` (resolved against the current directory). When the
    /// target cannot be listed, the previous directory and listing stay
    /// in place and the error is reported.
    fn change_directory(&mut self, target: &Path) {
        let resolved = match core::resolve_dir(self.nav.current_dir(), target) {
            Ok(dir) => dir,
            Err(e) => return self.report(e),
        };

        match core::list_dir(&resolved, self.show_hidden) {
            Ok(entries) => {
                self.nav.set_dir(resolved);
                self.nav.replace_entries(entries, SelectionPolicy::Reset);
                self.status = None;
            }
            Err(e) => self.report(e),
        }
    }

    /// Creates an empty file in the current directory. An existing object
    /// with the same name is a reported, non-fatal condition.
    fn create_file(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }

        let path = self.nav.current_dir().join(name);
        match core::create_file(&path) {
            Ok(()) => {
                self.status = None;
                self.refresh(SelectionPolicy::Clamp);
            }
            Err(e) => self.report(e),
        }
    }

    /// Deletes the selected entry's file, then re-lists with the
    /// selection clamped. A failed delete leaves the listing untouched
    /// and never terminates the program.
    fn delete_selected(&mut self) {
        let Some(entry) = self.nav.selected_entry() else {
            return;
        };

        let path = self.nav.current_dir().join(entry.name());
        match core::delete_file(&path) {
            Ok(()) => {
                self.status = None;
                self.refresh(SelectionPolicy::Clamp);
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: FsError) {
        self.status = Some(err.to_string());
    }
}
