//! Interactive session
//!
//! A session loads the directory once, feeds each input line to the
//! dispatcher, and saves the directory once when the user exits or input
//! runs out.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::dispatch::{Command, Dispatcher};
use super::input::{parse_line, parse_words};
use super::output::Output;
use crate::domain::Directory;
use crate::storage::DirectoryStore;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// A loaded directory bound to the store it came from
pub struct Session<S: DirectoryStore> {
    store: S,
    directory: Directory,
    dispatcher: Dispatcher,
    output: Output,
    changed: bool,
}

impl<S: DirectoryStore> Session<S> {
    /// Loads the directory from `store`
    pub fn open(store: S, dispatcher: Dispatcher, output: Output) -> Result<Self> {
        let directory = store.load().context("Failed to load contact book")?;
        output.verbose_ctx("session", &format!("Loaded {} contact(s)", directory.len()));

        Ok(Self {
            store,
            directory,
            dispatcher,
            output,
            changed: false,
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Returns true once a command that can edit the directory has run
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_finished(&self) -> bool {
        self.dispatcher.is_terminated()
    }

    /// Runs one raw input line
    ///
    /// Returns `None` for blank lines and for input after an exit command.
    pub fn execute(&mut self, line: &str) -> Option<String> {
        let (command, args) = parse_line(line)?;
        self.dispatch(&command, &args)
    }

    /// Runs one command that is already split into words
    pub fn execute_words<I, T>(&mut self, words: I) -> Option<String>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let (command, args) = parse_words(words)?;
        self.dispatch(&command, &args)
    }

    fn dispatch(&mut self, command: &str, args: &[String]) -> Option<String> {
        self.output
            .verbose_ctx("dispatch", &format!("{} ({} arg(s))", command, args.len()));
        let reply = self.dispatcher.dispatch(command, args, &mut self.directory)?;
        if command.parse::<Command>().is_ok_and(|c| c.modifies()) {
            self.changed = true;
        }
        Some(reply)
    }

    /// Writes the directory back to the store
    pub fn save(&self) -> Result<()> {
        self.store
            .save(&self.directory)
            .context("Failed to save contact book")?;
        self.output
            .verbose_ctx("session", &format!("Saved {} contact(s)", self.directory.len()));
        Ok(())
    }

    /// Saves only if an editing command has run
    pub fn save_if_changed(&self) -> Result<()> {
        if !self.changed {
            self.output.verbose_ctx("session", "No changes to save");
            return Ok(());
        }
        self.save()
    }

    /// Reads commands until an exit command or end of input, then saves
    ///
    /// The save happens even when reading or writing fails part way; the
    /// I/O error is returned after it. Lines that are not valid UTF-8 are
    /// decoded lossily.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: W) -> Result<()> {
        let outcome = self.read_loop(input, out);
        let saved = self.save();
        outcome.and(saved)
    }

    fn read_loop<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", GREETING)?;

        let mut buf = Vec::new();
        while !self.is_finished() {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            buf.clear();
            if input
                .read_until(b'\n', &mut buf)
                .context("Failed to read input")?
                == 0
            {
                self.output.verbose_ctx("session", "End of input");
                writeln!(out)?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Some(reply) = self.execute(&line) {
                writeln!(out, "{}", reply)?;
            }
        }

        Ok(())
    }
}
