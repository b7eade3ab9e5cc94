//! Configuration loading for perch.
//!
//! Settings are read from `<config_dir>/perch/perch.toml`. A missing or
//! invalid file falls back to full defaults, so the binary always starts.

pub mod general;
pub mod input;

use crate::config::general::General;
use crate::config::input::Keys;

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Top-level configuration, matching the `[general]` and `[keys]`
/// tables of perch.toml.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    general: General,
    keys: Keys,
}

impl Config {
    /// Loads the configuration from disk, falling back to defaults when
    /// the file is missing or does not parse.
    pub fn load() -> Self {
        match Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
        {
            Some(cfg) => cfg,
            None => Config::default(),
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("perch").join("perch.toml"))
    }

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }
}
