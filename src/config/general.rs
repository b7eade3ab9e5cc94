//! The general configuration settings for perch.
//!
//! This module defines the [General] struct for deserializing
//! general settings from the perch.toml configuration file.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
}

impl Default for General {
    fn default() -> Self {
        General { show_hidden: false }
    }
}

impl General {
    /// Initial value of the hidden-files flag; toggled at runtime.
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }
}
