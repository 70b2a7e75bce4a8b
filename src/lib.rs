pub mod brew;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod github;
pub mod identity;
pub mod runner;
pub mod ui;

pub use error::{BumpError, Result};
