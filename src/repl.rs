//! The interactive command loop.
//!
//! Reads one line at a time, dispatches it against the command table,
//! and prints the rendered result. The loop only ends on `close`/`exit`
//! (or end of input), at which point the book is saved.

use crate::commands::{self, CommandOutput, Context};
use crate::config::Config;
use crate::models::AddressBook;
use crate::render::render;
use crate::storage::BookStore;
use std::io::{BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, warn};

const PROMPT: &str = "Enter a command: ";

/// Run the command loop until `close`/`exit` or end of input.
///
/// Input and output are injected so tests can drive the loop with
/// in-memory buffers. The book is loaded from `store` up front and saved
/// back exactly once, when the loop ends.
pub fn run<R, W, S>(mut input: R, mut output: W, store: &S, config: &Config) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    S: BookStore + ?Sized,
{
    let mut book = store.load()?;

    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like `exit`
            warn!("input stream closed, saving and exiting");
            break;
        }

        let Some((command, args)) = commands::parse_input(&line) else {
            continue;
        };

        if command == "close" || command == "exit" {
            break;
        }

        let result = dispatch_guarded(&command, &args, &mut book, config);
        writeln!(output, "{}", render(&result))?;
    }

    save_on_exit(store, &book, &mut output)?;
    writeln!(output, "{}", render(&CommandOutput::info("Good bye!")))?;
    Ok(())
}

/// Dispatch one command, turning even a handler panic into an
/// error-category output so the loop survives.
fn dispatch_guarded(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
    config: &Config,
) -> CommandOutput {
    let mut ctx = Context {
        book,
        window_days: config.birthday_window_days,
        today: chrono::Local::now().date_naive(),
    };

    panic::catch_unwind(AssertUnwindSafe(|| {
        commands::dispatch(command, args, &mut ctx)
    }))
    .unwrap_or_else(|_| {
        error!(command, "handler panicked");
        CommandOutput::error("An unexpected error occurred. Please try again.")
    })
}

/// Save the book; a failed save is reported but never aborts shutdown.
fn save_on_exit<S, W>(store: &S, book: &AddressBook, output: &mut W) -> anyhow::Result<()>
where
    S: BookStore + ?Sized,
    W: Write,
{
    if let Err(err) = store.save(book) {
        error!(%err, "failed to save address book");
        writeln!(
            output,
            "{}",
            render(&CommandOutput::error(format!(
                "Could not save the address book: {}",
                err
            )))
        )?;
    }
    Ok(())
}
