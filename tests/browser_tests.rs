//! End-to-end state machine tests for perch.
//!
//! These tests drive [AppState] the way the event loop does: one key
//! event per frame, followed by `apply_pending` at the top of the next
//! frame. They create temporary directories to simulate real browsing;
//! the temporary resources are cleaned up after the tests complete.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use perch_tui::app::{AppState, UiMode};
use perch_tui::config::Config;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn press(app: &mut AppState, c: char) {
    app.handle_keypress(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    app.apply_pending();
}

fn press_code(app: &mut AppState, code: KeyCode) {
    app.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE));
    app.apply_pending();
}

fn type_name(app: &mut AppState, name: &str) {
    for ch in name.chars() {
        press(app, ch);
    }
}

/// Moves the selection onto the entry with the given name using the
/// `h`/`l` bindings only.
fn select_entry(app: &mut AppState, name: &str) {
    let target = app
        .nav()
        .entries()
        .iter()
        .position(|e| e.name_str() == name)
        .unwrap_or_else(|| panic!("entry '{name}' not in listing"));

    while app.nav().selected_idx() > target {
        press(app, 'h');
    }
    while app.nav().selected_idx() < target {
        press(app, 'l');
    }
}

fn app_in<'a>(config: &'a Config, dir: &Path) -> AppState<'a> {
    let mut app = AppState::from_dir(config, dir.to_path_buf());
    app.apply_pending();
    app
}

#[test]
fn enter_and_parent_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;
    let base = tmp.path().canonicalize()?;
    File::create(base.join("a.txt"))?;
    fs::create_dir(base.join("b"))?;
    File::create(base.join("b").join("inner.txt"))?;

    let mut app = app_in(&config, &base);
    assert_eq!(app.nav().entries().len(), 2);
    assert_eq!(app.nav().selected_idx(), 0);

    select_entry(&mut app, "b");
    press(&mut app, 'e');

    assert_eq!(app.nav().current_dir(), base.join("b"));
    assert_eq!(app.nav().selected_idx(), 0);
    assert!(app.nav().entries().iter().any(|e| e.name_str() == "inner.txt"));

    press(&mut app, 'b');

    assert_eq!(app.nav().current_dir(), base, "round trip must restore the path");
    assert_eq!(app.nav().selected_idx(), 0);
    assert_eq!(app.nav().entries().len(), 2);
    assert!(app.nav().entries().iter().any(|e| e.name_str() == "a.txt"));
    assert!(app.nav().entries().iter().any(|e| e.name_str() == "b"));
    Ok(())
}

#[test]
fn hidden_toggle_is_a_queued_refresh() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;
    File::create(tmp.path().join("shown.txt"))?;
    File::create(tmp.path().join(".dotfile"))?;

    let mut app = app_in(&config, tmp.path());
    assert_eq!(app.nav().entries().len(), 1);
    assert!(!app.show_hidden());

    // the flag flips immediately, the listing only after the message runs
    app.handle_keypress(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));
    assert!(app.show_hidden());
    assert_eq!(app.nav().entries().len(), 1);

    app.apply_pending();
    assert_eq!(app.nav().entries().len(), 2);
    assert!(app.nav().entries().iter().any(|e| e.name_str() == ".dotfile"));

    press(&mut app, 's');
    assert_eq!(app.nav().entries().len(), 1);
    Ok(())
}

#[test]
fn new_file_dialog_creates_the_file() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;

    let mut app = app_in(&config, tmp.path());

    press(&mut app, 'n');
    assert_eq!(app.mode(), UiMode::NewFileDialog);

    type_name(&mut app, "notes.md");
    press_code(&mut app, KeyCode::Enter);

    assert_eq!(app.mode(), UiMode::Listing);
    assert!(tmp.path().join("notes.md").is_file());
    assert!(app.nav().entries().iter().any(|e| e.name_str() == "notes.md"));
    assert!(app.status().is_none());
    Ok(())
}

#[test]
fn creating_an_existing_name_is_surfaced_inline() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;
    fs::write(tmp.path().join("dup.txt"), "keep me")?;

    let mut app = app_in(&config, tmp.path());

    press(&mut app, 'n');
    type_name(&mut app, "dup.txt");
    press_code(&mut app, KeyCode::Enter);

    let status = app.status().ok_or("expected an inline error")?;
    assert!(status.contains("already exists"));
    assert!(app.is_running());
    assert_eq!(fs::read_to_string(tmp.path().join("dup.txt"))?, "keep me");
    Ok(())
}

#[test]
fn deleting_the_selected_entry_updates_the_listing() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;
    File::create(tmp.path().join("one"))?;
    File::create(tmp.path().join("two"))?;
    File::create(tmp.path().join("three"))?;

    let mut app = app_in(&config, tmp.path());
    select_entry(&mut app, "two");

    press(&mut app, 'd');

    assert_eq!(app.nav().entries().len(), 2);
    assert!(!tmp.path().join("two").exists());
    assert!(!app.nav().entries().iter().any(|e| e.name_str() == "two"));
    // selection still valid on the shrunken list
    assert!(app.nav().selected_idx() < app.nav().entries().len());
    Ok(())
}

#[test]
fn deleting_the_last_entry_pins_selection() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;
    File::create(tmp.path().join("a"))?;
    File::create(tmp.path().join("b"))?;

    let mut app = app_in(&config, tmp.path());
    while app.nav().selected_idx() + 1 < app.nav().entries().len() {
        press(&mut app, 'l');
    }

    press(&mut app, 'd');
    assert_eq!(app.nav().entries().len(), 1);
    assert_eq!(app.nav().selected_idx(), 0);

    press(&mut app, 'd');
    assert!(app.nav().entries().is_empty());
    assert_eq!(app.nav().selected_idx(), 0);

    // delete on the now-empty listing is guarded
    press(&mut app, 'd');
    assert!(app.is_running());
    Ok(())
}

#[test]
fn failed_delete_keeps_the_browser_alive() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;
    // deleting a directory entry with the file delete always fails
    fs::create_dir(tmp.path().join("undeletable"))?;

    let mut app = app_in(&config, tmp.path());
    press(&mut app, 'd');

    assert!(app.status().is_some());
    assert!(app.is_running());
    assert!(tmp.path().join("undeletable").is_dir());
    assert_eq!(app.nav().entries().len(), 1);
    Ok(())
}

#[test]
fn walk_through_scenario() -> Result<(), Box<dyn std::error::Error>> {
    // start in a directory containing a.txt and b/, navigate in and out
    let config = Config::default();
    let tmp = tempdir()?;
    let base = tmp.path().canonicalize()?;
    File::create(base.join("a.txt"))?;
    fs::create_dir(base.join("b"))?;

    let mut app = app_in(&config, &base);
    assert_eq!(app.nav().entries().len(), 2);
    assert_eq!(app.nav().selected_idx(), 0);

    select_entry(&mut app, "b");
    let b_idx = app.nav().selected_idx();
    assert!(b_idx < 2);

    press(&mut app, 'e');
    assert_eq!(app.nav().current_dir(), base.join("b"));
    assert_eq!(app.nav().selected_idx(), 0);
    assert!(app.nav().entries().is_empty());

    press(&mut app, 'b');
    assert_eq!(app.nav().current_dir(), base);
    assert_eq!(app.nav().selected_idx(), 0);

    let names: Vec<String> = app
        .nav()
        .entries()
        .iter()
        .map(|e| e.name_str().into_owned())
        .collect();
    assert!(names.contains(&"a.txt".to_string()));
    assert!(names.contains(&"b".to_string()));
    Ok(())
}

#[test]
fn quit_key_stops_the_state_machine() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let tmp = tempdir()?;

    let mut app = app_in(&config, tmp.path());
    assert!(app.is_running());

    if let perch_tui::app::KeypressResult::Quit =
        app.handle_keypress(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
    {
        app.stop();
    }
    assert!(!app.is_running());
    Ok(())
}
