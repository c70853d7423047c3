//! Record model representing a single contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at creation and doubles as the record's key inside an
/// [`AddressBook`](crate::models::AddressBook). Phones keep insertion order
/// and duplicates are permitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, immutable after creation.
    name: ContactName,

    /// Phone numbers in insertion order. No dedup is enforced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, if one has been set.
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone unconditionally. Duplicate numbers accumulate.
    pub fn add_phone(&mut self, phone: PhoneNumber) -> String {
        let message = format!("Phone {} added to contact {}", phone, self.name);
        self.phones.push(phone);
        message
    }

    /// Replace the first phone equal to `old` with a freshly validated `new`.
    ///
    /// A missing `old` is a silent no-op: the returned message says so, but
    /// it is not an error. Validation of `new` can still fail.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<String, ValidationError> {
        for slot in self.phones.iter_mut() {
            if slot.as_str() == old {
                *slot = PhoneNumber::new(new)?;
                return Ok(format!("Phone {} changed to {}", old, new));
            }
        }
        Ok(format!("Phone {} not found", old))
    }

    /// Look up a phone by value equality.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove every phone equal to `phone`; reports how the list changed.
    pub fn remove_phone(&mut self, phone: &str) -> String {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        if self.phones.len() < before {
            format!("Phone {} deleted", phone)
        } else {
            format!("Phone {} not found", phone)
        }
    }

    /// Set or silently overwrite the birthday.
    pub fn add_birthday(&mut self, birthday: Birthday) -> String {
        self.birthday = Some(birthday);
        format!("{}'s birthday on {} added", self.name, birthday)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
