//! Terminal rendering of command output.
//!
//! The only place that knows about colors. Core logic hands over a
//! [`CommandOutput`] with a semantic category; this module maps the
//! category to a visual treatment (success green, error red, info yellow).

use crate::commands::{CommandOutput, OutputCategory};
use colored::Colorize;

/// Render a command output as a colored string.
pub fn render(output: &CommandOutput) -> String {
    match output.category {
        OutputCategory::Success => output.text.green().to_string(),
        OutputCategory::Error => output.text.red().to_string(),
        OutputCategory::Info => output.text.yellow().to_string(),
    }
}
