//! Contact Book - an interactive command-line contact manager.
//!
//! Stores contact names, phone numbers, and birthdays, persists the book
//! between sessions, and answers a fixed set of textual commands,
//! including an upcoming-birthdays query with weekend-shift adjustment.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: contact records and the address book
//! - **commands**: input parsing, dispatch table, and handlers
//! - **storage**: JSON snapshot persistence
//! - **render**: category-based colored terminal output
//! - **repl**: the interactive loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod render;
pub mod repl;
pub mod storage;

pub use commands::{CommandOutput, OutputCategory};
pub use config::Config;
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use storage::{BookStore, JsonFileStore};
