//! Formatting functions for console output.
//!
//! `format_*` functions build the text and are pure; `display_*` functions
//! print it.

use console::style;

use crate::identity::Identity;
use crate::runner::render_command;

/// Echo line for an external command, in the GitHub Actions `[command]` form.
pub fn format_command(program: &str, args: &[String]) -> String {
    format!("[command]{}", render_command(program, args))
}

/// Error line; `annotate` emits a GitHub Actions `::error::` annotation.
pub fn format_error(message: &str, annotate: bool) -> String {
    if annotate {
        // Annotations are single-line; %0A is the documented newline escape.
        format!("::error::{}", message.replace('\n', "%0A"))
    } else {
        format!("{} {}", style("ERROR:").red(), message)
    }
}

/// One-line summary of a livecheck batch.
pub fn format_batch_summary(bumped: usize, skipped: usize, failed: usize) -> String {
    format!(
        "Livecheck batch finished: {} bumped, {} skipped, {} failed",
        bumped, skipped, failed
    )
}

fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false)
}

pub fn display_command(program: &str, args: &[String]) {
    println!("{}", format_command(program, args));
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message, running_in_actions()));
}

/// Print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Show who the bump commits will be attributed to.
pub fn display_identity(identity: &Identity) {
    display_status(&format!(
        "Committing as {} <{}>",
        style(&identity.name).bold(),
        identity.email
    ));
}

pub fn display_batch_summary(bumped: usize, skipped: usize, failed: usize) {
    let line = format_batch_summary(bumped, skipped, failed);
    if failed == 0 {
        display_success(&line);
    } else {
        display_warning(&line);
    }
}
