//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::dispatch::Dispatcher;
use super::output::Output;
use super::session::Session;
use crate::storage::{Config, ContactStore};

#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Personal contact book with birthday reminders")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Contact book file (JSONL)
    #[arg(long, short = 'b', global = true, env = "CONTACTS_BOOK")]
    pub book: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "CONTACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Days covered by the `birthdays` command
    #[arg(long, short = 'w', global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub window: Option<u32>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    Repl,

    /// Run a single command, saving the book if it was edited
    ///
    /// Examples:
    ///   contacts exec add Ann 0501234567
    ///   contacts exec add-birthday Ann 14.05.1991
    ///   contacts exec birthdays
    Exec {
        /// Command followed by its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print the resolved contact book path
    Path,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("Contacts starting");

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };
    let book = config.book_path(cli.book.as_deref());
    let window = cli.window.unwrap_or(config.birthday_window_days);
    output.verbose_ctx("config", &format!("Book: {}, window: {} day(s)", book.display(), window));

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut session = open_session(book, window, output)?;
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout())?;
        }

        Commands::Exec { words } => {
            let mut session = open_session(book, window, output)?;
            if let Some(reply) = session.execute_words(&words) {
                output.reply(&reply);
            }
            session.save_if_changed()?;
        }

        Commands::Path => output.reply(&book.display().to_string()),
    }

    output.verbose("Command completed successfully");
    Ok(())
}

fn open_session(book: PathBuf, window: u32, output: Output) -> Result<Session<ContactStore>> {
    let store = ContactStore::new(book);
    let dispatcher = Dispatcher::new().with_window(window);
    Session::open(store, dispatcher, output)
}
