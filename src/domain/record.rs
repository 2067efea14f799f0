//! Contact record domain model
//!
//! A record holds one contact's name, phone numbers and optional birthday.
//! Phone numbers keep insertion order and may repeat.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::{Birthday, FieldError, Name, Phone};

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates and appends a phone number
    pub fn add_phone(&mut self, number: &str) -> Result<(), FieldError> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `number`
    ///
    /// Returns false when nothing matched.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`
    ///
    /// An invalid `new` is always an error, even when `old` is missing. A
    /// missing `old` on its own is not: it returns `Ok(false)`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, FieldError> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                phone.set(new)?;
                Ok(true)
            }
            None => {
                Phone::new(new)?;
                Ok(false)
            }
        }
    }

    /// Returns the first phone equal to `number`
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validates and stores the birthday, replacing any previous one
    pub fn set_birthday(&mut self, date: &str) -> Result<(), FieldError> {
        self.birthday = Some(Birthday::parse(date)?);
        Ok(())
    }

    /// Phones joined with `separator`
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
