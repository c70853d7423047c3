//! AddressBook model: an ordered collection of contact records.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One entry of the upcoming-birthdays query: who to congratulate and on
/// which (weekend-adjusted) date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name.
    pub name: String,

    /// Congratulation date, already shifted off weekends.
    pub date: NaiveDate,
}

/// The address book: records keyed by contact name, unique keys,
/// iteration order = insertion order.
///
/// Backed by a `Vec` with linear name lookup; serializes transparently
/// as a plain record list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insert a record, replacing any existing record with the same name.
    ///
    /// A replacement keeps the original position, so display order is
    /// stable across overwrites.
    pub fn add_record(&mut self, record: Record) -> String {
        let message = format!("Contact {} added to address book", record.name());
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
        message
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Exact-match mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |i| &mut self.records[i])
    }

    /// Remove a record by name; reports the outcome either way.
    pub fn delete(&mut self, name: &str) -> String {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                format!("Contact {} deleted", name)
            }
            None => format!("Contact {} not found", name),
        }
    }

    /// Contacts whose next birthday falls within `window_days` of `today`,
    /// inclusive on both ends, in book insertion order.
    ///
    /// The congratulation date is the birthday's next occurrence on or
    /// after `today`, shifted to Monday when it lands on a weekend
    /// (Saturday +2, Sunday +1). The weekend shift is applied after the
    /// window check, so a Saturday birthday 7 days out still qualifies.
    /// Always returns a (possibly empty) list; "book has no contacts" vs
    /// "no birthdays soon" is the caller's distinction to make.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let occurrence = next_occurrence(birthday.month(), birthday.day(), today);
            let days_until = (occurrence - today).num_days();
            if !(0..=window_days).contains(&days_until) {
                continue;
            }

            let date = match occurrence.weekday() {
                Weekday::Sat => occurrence + Duration::days(2),
                Weekday::Sun => occurrence + Duration::days(1),
                _ => occurrence,
            };

            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                date,
            });
        }

        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// Next calendar occurrence of `month`/`day` on or after `today`.
///
/// Feb 29 in a year without one resolves to Mar 1 of that year.
fn next_occurrence(month: u32, day: u32, today: NaiveDate) -> NaiveDate {
    let in_year = |year: i32| {
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).filter(|_| month == 2 && day == 29))
            .unwrap_or(today)
    };

    let this_year = in_year(today.year());
    if this_year >= today {
        this_year
    } else {
        in_year(today.year() + 1)
    }
}
