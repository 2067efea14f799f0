//! # Command-Line Interface
//!
//! User-facing commands, dispatch and the interactive session.
//!
//! ## Session Commands
//!
//! | Command | Arguments | Reply |
//! |---------|-----------|-------|
//! | `hello` | | Greeting |
//! | `add` | `<name> <phone>` | `Contact added` / `Contact updated` |
//! | `change` | `<name> <old> <new>` | `Contact updated` |
//! | `phone` | `<name>` | Phones of the contact |
//! | `all` | | Every contact |
//! | `add-birthday` | `<name> <DD.MM.YYYY>` | `Birthday added.` |
//! | `show-birthday` | `<name>` | Birthday of the contact |
//! | `birthdays` | | Birthdays in the coming window |
//! | `close`, `exit` | | Saves and ends the session |
//!
//! Command names are case-insensitive. Failures are reported as one of three
//! fixed `Error: ...` replies; see [`CommandError`].
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! contacts --verbose exec birthdays
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod dispatch;
mod input;
mod session;

pub use app::{Cli, Commands, run};
pub use output::Output;
pub use dispatch::{
    Command, CommandContext, CommandError, DispatchState, Dispatcher, Handler, UnknownCommand,
    COMMANDS, INVALID_COMMAND,
};
pub use input::{parse_line, parse_words};
pub use session::{Session, GREETING, PROMPT};
