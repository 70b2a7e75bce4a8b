use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumpError, Result};

/// Settings file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "bump-formula.toml";

/// Settings file name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".bump-formula.toml";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_NOREPLY_DOMAIN: &str = "users.noreply.github.com";
pub const DEFAULT_BREW_PROGRAM: &str = "brew";

/// Settings that describe the environment the action runs in.
///
/// Per-run inputs (formula, version, tap, ...) live in [`Inputs`]; this struct
/// only holds things that rarely change between runs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub brew: BrewConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_noreply_domain() -> String {
    DEFAULT_NOREPLY_DOMAIN.to_string()
}

fn default_brew_program() -> String {
    DEFAULT_BREW_PROGRAM.to_string()
}

fn default_true() -> bool {
    true
}

/// Source-control hosting API settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitHubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Domain used when synthesizing a no-reply commit email.
    #[serde(default = "default_noreply_domain")]
    pub noreply_domain: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            api_url: default_api_url(),
            noreply_domain: default_noreply_domain(),
        }
    }
}

/// Package-manager CLI settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BrewConfig {
    #[serde(default = "default_brew_program")]
    pub program: String,

    /// Run `brew update-reset` before tapping and bumping.
    #[serde(default = "default_true")]
    pub update_reset: bool,
}

impl Default for BrewConfig {
    fn default() -> Self {
        BrewConfig {
            program: default_brew_program(),
            update_reset: true,
        }
    }
}

/// Controls runtime behavior without affecting what gets bumped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Write the resolved identity into the global git config.
    #[serde(default = "default_true")]
    pub configure_git: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            configure_git: true,
        }
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `bump-formula.toml` in current directory
/// 3. `.bump-formula.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| BumpError::config(e.to_string()))
}

/// Typed per-run inputs.
///
/// Raw strings coming from flags or `INPUT_*` variables are normalized once
/// here: blank text becomes `None` and boolean-like text becomes `bool`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inputs {
    pub token: Option<String>,
    pub message: Option<String>,
    pub tap: Option<String>,
    pub formula: Option<String>,
    pub version: Option<String>,
    pub url: Option<String>,
    pub tag: Option<String>,
    pub revision: Option<String>,
    pub force: bool,
    pub livecheck: bool,
    pub actor: Option<String>,
    pub dry_run: bool,
}

/// Treats empty or whitespace-only text as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parses a boolean-like input.
///
/// Missing, empty, `false`, `0`, `no` and `off` (any case) are false.
/// Everything else is true.
pub fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => !matches!(v.as_str(), "" | "false" | "0" | "no" | "off"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_false_like() {
        assert!(!parse_flag(None));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(Some("   ")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some(" FALSE ")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("no")));
        assert!(!parse_flag(Some("off")));
    }

    #[test]
    fn test_parse_flag_true_like() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("yes")));
        assert!(parse_flag(Some("anything")));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some(" \n".to_string())), None);
        assert_eq!(non_empty(Some(" foo ".to_string())), Some("foo".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, DEFAULT_API_URL);
        assert_eq!(config.github.noreply_domain, DEFAULT_NOREPLY_DOMAIN);
        assert_eq!(config.brew.program, "brew");
        assert!(config.brew.update_reset);
        assert!(config.behavior.configure_git);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[brew]\nupdate_reset = false\n").unwrap();
        assert!(!config.brew.update_reset);
        assert_eq!(config.brew.program, "brew");
        assert_eq!(config.github, GitHubConfig::default());
    }
}
