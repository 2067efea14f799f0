//! Command dispatch
//!
//! Maps a command name to a typed handler and turns every handler failure
//! into one of three fixed messages. Nothing below this layer deals in
//! user-facing error text.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::domain::{Directory, FieldError, Record, DEFAULT_BIRTHDAY_WINDOW};

/// Reply for command names that are not in the table
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Failures a command handler can report
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("Error: Contact not found.")]
    NotFound,

    #[error("Error: Please provide: <name> <phone>. Phone number must be exactly 10 digits.")]
    Validation,

    #[error("Error: No arguments provided. Please provide <name>.")]
    MissingArguments,
}

impl From<FieldError> for CommandError {
    fn from(_: FieldError) -> Self {
        CommandError::Validation
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command: '{0}'")]
pub struct UnknownCommand(pub String);

/// Every command the dispatcher understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

/// Command names and the command they select
pub const COMMANDS: &[(&str, Command)] = &[
    ("hello", Command::Hello),
    ("add", Command::Add),
    ("change", Command::Change),
    ("phone", Command::Phone),
    ("all", Command::All),
    ("add-birthday", Command::AddBirthday),
    ("show-birthday", Command::ShowBirthday),
    ("birthdays", Command::Birthdays),
    ("close", Command::Exit),
    ("exit", Command::Exit),
];

/// Values handlers read besides the directory
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub today: NaiveDate,
    pub window_days: u32,
}

/// Signature shared by all command handlers
pub type Handler = fn(&[String], &mut Directory, &CommandContext) -> Result<String, CommandError>;

impl Command {
    /// Returns the primary name of the command
    pub fn name(&self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, command)| command == self)
            .map(|(name, _)| *name)
            .unwrap_or("exit")
    }

    /// Returns true if the command can change the directory
    pub fn modifies(&self) -> bool {
        matches!(self, Command::Add | Command::Change | Command::AddBirthday)
    }

    /// Returns true if the command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    fn handler(&self) -> Handler {
        match self {
            Command::Hello => hello,
            Command::Add => add_contact,
            Command::Change => change_contact,
            Command::Phone => show_phone,
            Command::All => show_all,
            Command::AddBirthday => add_birthday,
            Command::ShowBirthday => show_birthday,
            Command::Birthdays => birthdays,
            Command::Exit => goodbye,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COMMANDS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, command)| *command)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Dispatcher lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Awaiting,
    Terminated,
}

/// Runs commands against a directory
#[derive(Debug, Clone)]
pub struct Dispatcher {
    state: DispatchState,
    window_days: u32,
    today: Option<NaiveDate>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            state: DispatchState::Awaiting,
            window_days: DEFAULT_BIRTHDAY_WINDOW,
            today: None,
        }
    }

    /// Sets the span of the `birthdays` command
    pub fn with_window(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Pins "today" instead of reading the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == DispatchState::Terminated
    }

    fn context(&self) -> CommandContext {
        CommandContext {
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
            window_days: self.window_days,
        }
    }

    /// Runs one command and returns the text to show the user
    ///
    /// Unknown commands reply [`INVALID_COMMAND`] without touching the
    /// directory. Returns `None` once an exit command has been dispatched.
    pub fn dispatch(
        &mut self,
        command: &str,
        args: &[String],
        directory: &mut Directory,
    ) -> Option<String> {
        if self.is_terminated() {
            return None;
        }

        let command: Command = match command.parse() {
            Ok(command) => command,
            Err(_) => return Some(INVALID_COMMAND.to_string()),
        };

        let context = self.context();
        let reply = match (command.handler())(args, directory, &context) {
            Ok(message) => message,
            Err(err) => err.to_string(),
        };

        if command.is_exit() {
            self.state = DispatchState::Terminated;
        }

        Some(reply)
    }
}

fn required_name(args: &[String]) -> Result<&str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArguments)
}

fn hello(_: &[String], _: &mut Directory, _: &CommandContext) -> Result<String, CommandError> {
    Ok("How can I help you?".to_string())
}

fn goodbye(_: &[String], _: &mut Directory, _: &CommandContext) -> Result<String, CommandError> {
    Ok("Good bye!".to_string())
}

/// `add <name> <phone>`: creates the contact if needed, then adds the phone
///
/// The reply reflects whether the contact was new, not the phone.
fn add_contact(
    args: &[String],
    directory: &mut Directory,
    _: &CommandContext,
) -> Result<String, CommandError> {
    let [name, phone, ..] = args else {
        return Err(CommandError::Validation);
    };

    if let Some(record) = directory.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated".to_string());
    }

    let mut record = Record::new(name.as_str());
    record.add_phone(phone)?;
    directory.add_record(record);
    Ok("Contact added".to_string())
}

/// `change <name> <old> <new>`
fn change_contact(
    args: &[String],
    directory: &mut Directory,
    _: &CommandContext,
) -> Result<String, CommandError> {
    let [name, old, new] = args else {
        return Err(CommandError::Validation);
    };

    let record = directory.find_mut(name).ok_or(CommandError::NotFound)?;
    if record.edit_phone(old, new)? {
        Ok("Contact updated".to_string())
    } else {
        Ok("Phone number not found.".to_string())
    }
}

/// `phone <name>`
fn show_phone(
    args: &[String],
    directory: &mut Directory,
    _: &CommandContext,
) -> Result<String, CommandError> {
    let name = required_name(args)?;
    let record = directory.find(name).ok_or(CommandError::NotFound)?;
    Ok(format!("{}: {}", name, record.phones_joined(", ")))
}

/// `all`
fn show_all(
    _: &[String],
    directory: &mut Directory,
    _: &CommandContext,
) -> Result<String, CommandError> {
    if directory.is_empty() {
        return Ok("No contacts found.".to_string());
    }
    Ok(directory
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
fn add_birthday(
    args: &[String],
    directory: &mut Directory,
    _: &CommandContext,
) -> Result<String, CommandError> {
    let [name, date] = args else {
        return Err(CommandError::Validation);
    };

    let record = directory.find_mut(name).ok_or(CommandError::NotFound)?;
    record.set_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
fn show_birthday(
    args: &[String],
    directory: &mut Directory,
    _: &CommandContext,
) -> Result<String, CommandError> {
    let name = required_name(args)?;
    match directory.find(name).and_then(Record::birthday) {
        Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
        None => Ok("Error: Birthday not found for this contact.".to_string()),
    }
}

/// `birthdays`: one `name: DD.MM` line per contact, day first
fn birthdays(
    _: &[String],
    directory: &mut Directory,
    context: &CommandContext,
) -> Result<String, CommandError> {
    let upcoming = directory.upcoming_birthdays(context.today, context.window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    Ok(upcoming
        .iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|b| format!("{}: {}", record.name(), b.day_month()))
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
