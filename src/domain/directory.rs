//! Directory of contacts keyed by name
//!
//! Records are kept in insertion order. Re-adding a name replaces the
//! existing record in place.

use chrono::{Datelike, Days, NaiveDate};
use indexmap::map::Values;
use indexmap::IndexMap;

use super::record::Record;

/// Default span of the upcoming-birthdays query, in days
pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Name-indexed collection of contact records
///
/// Each record is stored under its own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Looks up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Looks up a record by exact name for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record with this name, returning it if it existed
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Iterates over all records in insertion order
    pub fn iter(&self) -> Values<'_, String, Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns records whose birthday falls in `[today, today + window_days)`
    ///
    /// Each birthday is moved onto `today`'s year before comparing. There is
    /// no rollover: a birthday that already passed this year is not matched
    /// against next year's date, so early-January birthdays are never
    /// reported in late December. A 29 February birthday has no date in a
    /// common year and is skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<&Record> {
        let end = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);

        self.iter()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|b| b.in_year(today.year()))
                    .is_some_and(|date| today <= date && date < end)
            })
            .collect()
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
