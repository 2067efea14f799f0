//! Validated contact fields
//!
//! Each field checks its format when it is constructed, so a value that
//! exists is always valid:
//! - [`Name`]: free text
//! - [`Phone`]: exactly 10 ASCII digits (e.g., `0501234567`)
//! - [`Birthday`]: a calendar date written as `DD.MM.YYYY` (e.g., `29.02.2024`)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// Display and parse format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Phone number must be exactly 10 digits, got '{0}'")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY, got '{0}'")]
    InvalidDate(String),
}

/// Contact name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number of exactly 10 digits, no prefix or separators
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Replaces the number, keeping the old one if the new value is invalid
    pub fn set(&mut self, value: &str) -> Result<(), FieldError> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// Birth date, parsed from `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a zero-padded `DD.MM.YYYY` date
    ///
    /// Anything else is rejected: other separators, missing padding,
    /// two-digit years, extra fields, and dates that do not exist
    /// (e.g., `29.02.2023`).
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidDate(value.to_string());

        let parts: Vec<&str> = value.split('.').collect();
        let [day, month, year] = *parts.as_slice() else {
            return Err(invalid());
        };

        let numeric = |part: &str, width: usize| {
            part.len() == width && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !numeric(day, 2) || !numeric(month, 2) || !numeric(year, 4) {
            return Err(invalid());
        }

        let day: u32 = day.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Moves the month and day onto another year
    ///
    /// Returns `None` for 29 February when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year)
    }

    /// Day and month only, as `DD.MM`
    pub fn day_month(&self) -> String {
        self.0.format("%d.%m").to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
