//! Domain models for the contact book
//!
//! Contains the core business logic without any I/O concerns.

mod field;
mod record;
mod directory;

pub use field::{Birthday, FieldError, Name, Phone, BIRTHDAY_FORMAT, PHONE_DIGITS};
pub use record::Record;
pub use directory::{Directory, DEFAULT_BIRTHDAY_WINDOW};
