//! Contact book - a personal contact directory with birthday reminders
//!
//! Contacts have a name, any number of 10-digit phone numbers and an
//! optional birthday. The book answers "whose birthday is in the next N
//! days" and is driven by a small command language, either interactively
//! or one command at a time.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Birthday, Directory, FieldError, Name, Phone, Record};
