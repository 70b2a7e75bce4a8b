//! Source-control hosting API access
//!
//! The only call the action needs is "who is acting": the user profile the
//! commit identity is derived from. It sits behind the [ProfileSource] trait
//! so the workflow can be driven by a fixed profile in tests.
//!
//! - [client::GitHubClient]: blocking REST client built on `reqwest`
//! - [mock::StaticProfileSource]: returns a canned profile

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::StaticProfileSource;

use crate::error::Result;
use crate::identity::UserProfile;

/// Fetches the profile of the user the run acts as.
pub trait ProfileSource {
    /// Returns the profile of `actor`, or of the authenticated user when
    /// `actor` is `None`.
    fn fetch_profile(&self, actor: Option<&str>) -> Result<UserProfile>;
}
