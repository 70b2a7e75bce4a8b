//! Domain logic - pure rules independent of brew, git and the network

pub mod formula;
pub mod message;

pub use formula::{normalize_tag, qualify, split_formula_list};
pub use message::{compose_message, MESSAGE_FOOTER};
