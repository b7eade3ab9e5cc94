//! Input handling for perch.
//!
//! This module implements the [AppState] methods that translate key events
//! into either direct state changes (selection movement, dialog editing)
//! or a queued [Message] for the next frame. Handlers never touch the
//! filesystem directly.

use crate::app::keymap::{Action, FileAction, NavAction, SystemAction};
use crate::app::message::Message;
use crate::app::state::{AppState, KeypressResult, UiMode};

use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;

impl<'a> AppState<'a> {
    /// Central key handler. The active UI mode owns the event; no input
    /// leaks between the listing and the open dialog.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        match self.mode() {
            UiMode::NewFileDialog => self.handle_dialog_key(key),
            UiMode::Listing => self.handle_listing_key(key),
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(action) = self.keymap().lookup(key) else {
            return KeypressResult::Continue;
        };

        match action {
            Action::Nav(nav_act) => self.handle_nav_action(nav_act),
            Action::File(file_act) => self.handle_file_action(file_act),
            Action::System(sys_act) => self.handle_sys_action(sys_act),
        }
    }

    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::SelectPrev => {
                self.nav_mut().move_prev();
            }
            NavAction::SelectNext => {
                self.nav_mut().move_next();
            }
            NavAction::GoParent => {
                self.queue(Message::ChangeDirectory(PathBuf::from("..")));
            }
            NavAction::GoIntoDir => {
                if let Some(entry) = self.nav().selected_entry()
                    && entry.is_dir()
                {
                    let target = PathBuf::from(entry.name());
                    self.queue(Message::ChangeDirectory(target));
                }
            }
        }
        KeypressResult::Consumed
    }

    fn handle_file_action(&mut self, action: FileAction) -> KeypressResult {
        match action {
            FileAction::Create => {
                self.dialog_mut().clear();
                self.set_mode(UiMode::NewFileDialog);
            }
            FileAction::Delete => {
                if self.nav().selected_entry().is_some() {
                    self.queue(Message::DeleteFile);
                }
            }
        }
        KeypressResult::Consumed
    }

    fn handle_sys_action(&mut self, action: SystemAction) -> KeypressResult {
        match action {
            SystemAction::Quit => KeypressResult::Quit,
            SystemAction::ToggleHidden => {
                self.toggle_hidden();
                self.queue(Message::RefreshEntries);
                KeypressResult::Consumed
            }
        }
    }

    /// Handles key events while the new-file dialog is open. The reserved
    /// keys are enter (submit), backspace (delete) and esc (cancel);
    /// everything printable is appended to the bounded buffer.
    fn handle_dialog_key(&mut self, key: KeyEvent) -> KeypressResult {
        match key.code {
            KeyCode::Enter => {
                let name = self.dialog_mut().take();
                self.set_mode(UiMode::Listing);
                if !name.is_empty() {
                    self.queue(Message::CreateFile(name));
                }
                KeypressResult::Consumed
            }
            KeyCode::Esc => {
                self.dialog_mut().clear();
                self.set_mode(UiMode::Listing);
                KeypressResult::Consumed
            }
            KeyCode::Backspace => {
                self.dialog_mut().pop();
                KeypressResult::Consumed
            }
            KeyCode::Char(c) => {
                self.dialog_mut().push(c);
                KeypressResult::Consumed
            }
            _ => KeypressResult::Consumed,
        }
    }
}
