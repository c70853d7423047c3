//! Data models: contact records and the address book.

pub mod book;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday};
pub use record::Record;
