//! User interface module - console output for CI logs and terminals.
//!
//! The action is non-interactive, so this is output only; see `formatter`.

pub mod formatter;

pub use formatter::{
    display_batch_summary, display_command, display_error, display_identity, display_status,
    display_success, display_warning,
};
