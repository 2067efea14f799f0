//! # Storage Layer
//!
//! Persistence for the contact book.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Contacts | JSONL (one JSON per line) | `<data_dir>/addressbook.jsonl` |
//! | Config | TOML | `<config_dir>/config.toml` |
//!
//! The book is loaded once when a session starts and written once when it
//! ends. Writes are atomic (temp file + rename) under an `fs2` lock.
//!
//! ## Key Types
//!
//! - [`DirectoryStore`] - Load/save contract for a whole directory
//! - [`ContactStore`] - JSONL implementation of [`DirectoryStore`]
//! - [`Config`] - User configuration

mod jsonl;
mod config;

use anyhow::Result;

use crate::domain::Directory;

pub use jsonl::ContactStore;
pub use config::{Config, ConfigError, DEFAULT_BOOK_FILE};

/// Snapshot persistence for a [`Directory`]
pub trait DirectoryStore {
    /// Loads the stored directory, or an empty one if nothing is stored yet
    fn load(&self) -> Result<Directory>;

    /// Replaces the stored directory with `directory`
    fn save(&self, directory: &Directory) -> Result<()>;
}
