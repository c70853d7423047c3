//! Contact Book - Main entry point
//!
//! Wires up logging, configuration, and the snapshot store, then hands
//! control to the interactive loop until the user exits.

use anyhow::Result;
use contact_book::{Config, JsonFileStore};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Logging goes to stderr so the interactive stdout stream stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        book_file = %config.book_file.display(),
        window_days = config.birthday_window_days,
        "starting contact book"
    );

    let store = JsonFileStore::new(&config.book_file);
    let stdin = io::stdin();
    contact_book::repl::run(stdin.lock(), io::stdout(), &store, &config)?;

    info!("contact book shutdown complete");
    Ok(())
}
