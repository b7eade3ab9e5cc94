//! Input configuration options for perch
//!
//! This module defines the key binding lists which are read from the
//! perch.toml configuration file.

use serde::Deserialize;

/// Key binding lists for every action. Each action may be bound to
/// several keys; the syntax is parsed by `app::keymap::parse_key`.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    go_parent: Vec<String>,
    go_into_dir: Vec<String>,
    select_prev: Vec<String>,
    select_next: Vec<String>,
    toggle_hidden: Vec<String>,
    new_file: Vec<String>,
    delete: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    quit,
    go_parent,
    go_into_dir,
    select_prev,
    select_next,
    toggle_hidden,
    new_file,
    delete,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["q".into()],
            go_parent: vec!["b".into()],
            go_into_dir: vec!["e".into()],
            select_prev: vec!["h".into(), "Left".into()],
            select_next: vec!["l".into(), "Right".into()],
            toggle_hidden: vec!["s".into()],
            new_file: vec!["n".into()],
            delete: vec!["d".into()],
        }
    }
}
