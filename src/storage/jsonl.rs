//! JSONL storage for contacts
//!
//! The book is stored with one JSON object per line, in directory order.
//! Uses file locking and an atomic rename for writes.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::DirectoryStore;
use crate::domain::{Directory, Record};

/// Store for the contact book in JSONL format
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Creates a new contact store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("jsonl.tmp")
    }

    /// Reads every record from the store
    ///
    /// A missing file yields an empty directory.
    pub fn read_all(&self) -> Result<Directory> {
        if !self.path.exists() {
            return Ok(Directory::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open contact book: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on contact book")?;

        let reader = BufReader::new(&file);
        let mut directory = Directory::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let record: Record = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse contact at line {}", line_num + 1))?;

            directory.add_record(record);
        }

        Ok(directory)
    }

    /// Writes every record to the store (full rewrite)
    pub fn write_all(&self, directory: &Directory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let temp_path = self.temp_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on contact book")?;

            let mut writer = BufWriter::new(&file);

            for record in directory {
                let line = serde_json::to_string(record).context("Failed to serialize contact")?;
                writeln!(writer, "{}", line).context("Failed to write contact")?;
            }

            writer.flush().context("Failed to flush contact book")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

impl DirectoryStore for ContactStore {
    fn load(&self) -> Result<Directory> {
        self.read_all()
    }

    fn save(&self, directory: &Directory) -> Result<()> {
        self.write_all(directory)
    }
}
