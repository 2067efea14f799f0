//! Configuration handling for the contact book
//!
//! Configuration is stored in `~/.config/contacts/config.toml` (or the
//! platform equivalent). Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DEFAULT_BIRTHDAY_WINDOW;

/// File name of the book when no path is configured
pub const DEFAULT_BOOK_FILE: &str = "addressbook.jsonl";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the contact book (defaults to the platform data directory)
    pub book: Option<PathBuf>,

    /// Days covered by the `birthdays` command
    pub birthday_window_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book: None,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "contacts", "contacts")
}

impl Config {
    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the directory holding the default book
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::from_path(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a file, defaulting when it does not exist
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).context("Failed to parse config")
    }

    /// Parses and validates a TOML document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.birthday_window_days == 0 {
            return Err(ConfigError::Invalid(
                "birthday_window_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the book path: explicit override, then config, then default
    pub fn book_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = &self.book {
            return path.clone();
        }
        Self::data_dir()
            .map(|dir| dir.join(DEFAULT_BOOK_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE))
    }
}
