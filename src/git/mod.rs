//! Git configuration abstraction layer
//!
//! The bump PR is committed by `brew`, which reads the author from the global
//! git configuration. This module writes that identity.
//!
//! - [global::GlobalGitConfig]: writes `~/.gitconfig` through the `git2` crate
//! - [mock::MockIdentityStore]: records identities for tests
//!
//! Code should depend on the [IdentityStore] trait rather than the concrete
//! implementations.

pub mod global;
pub mod mock;

pub use global::GlobalGitConfig;
pub use mock::MockIdentityStore;

use crate::error::Result;
use crate::identity::Identity;

/// Persists the commit identity used by later git operations.
pub trait IdentityStore {
    /// Sets `user.name` and `user.email`.
    ///
    /// # Returns
    /// * `Ok(())` - Both keys written
    /// * `Err` - If the configuration file cannot be opened or written
    fn set_identity(&self, identity: &Identity) -> Result<()>;
}
