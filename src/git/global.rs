use std::path::PathBuf;

use git2::Config;
use tracing::debug;

use crate::error::{BumpError, Result};
use crate::git::IdentityStore;
use crate::identity::Identity;

/// The user's global git configuration file.
pub struct GlobalGitConfig {
    path: PathBuf,
}

impl GlobalGitConfig {
    /// Locates the global config file, falling back to `~/.gitconfig` when
    /// none exists yet.
    pub fn discover() -> Result<Self> {
        let path = match Config::find_global() {
            Ok(path) => path,
            Err(_) => dirs::home_dir()
                .map(|home| home.join(".gitconfig"))
                .ok_or_else(|| BumpError::config("cannot determine home directory"))?,
        };
        Ok(GlobalGitConfig { path })
    }

    /// Uses an explicit config file instead of the global one.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        GlobalGitConfig { path: path.into() }
    }
}

impl IdentityStore for GlobalGitConfig {
    fn set_identity(&self, identity: &Identity) -> Result<()> {
        debug!(path = %self.path.display(), "writing git identity");
        let mut config = Config::open(&self.path)?;
        config.set_str("user.name", &identity.name)?;
        config.set_str("user.email", &identity.email)?;
        Ok(())
    }
}
