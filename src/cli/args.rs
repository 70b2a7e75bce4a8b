use crate::config::{non_empty, parse_flag, Inputs};

/// Command-line arguments.
///
/// Every input can also come from the `INPUT_*` variable GitHub Actions sets
/// for the action's `with:` block. Flags are taken as raw text and converted
/// by [`Args::into_inputs`].
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(
    name = "homebrew-bump-formula",
    about = "Open version-bump pull requests for Homebrew formulae",
    long_about = None,
    version
)]
pub struct Args {
    #[arg(short, long, help = "Custom settings file path")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true, help = "GitHub token")]
    pub token: Option<String>,

    #[arg(long, env = "INPUT_MESSAGE", help = "Extra text for the PR message")]
    pub message: Option<String>,

    #[arg(long, env = "INPUT_TAP", help = "Tap holding the formula, e.g. user/repo")]
    pub tap: Option<String>,

    #[arg(
        long,
        env = "INPUT_FORMULA",
        help = "Formula name, or a list of names in livecheck mode"
    )]
    pub formula: Option<String>,

    #[arg(long = "formula-version", env = "INPUT_VERSION", help = "New version")]
    pub formula_version: Option<String>,

    #[arg(long, env = "INPUT_URL", help = "New download URL")]
    pub url: Option<String>,

    #[arg(long, env = "INPUT_TAG", help = "New git tag (refs/tags/ prefix allowed)")]
    pub tag: Option<String>,

    #[arg(long, env = "INPUT_REVISION", help = "Revision the tag points to")]
    pub revision: Option<String>,

    #[arg(
        long,
        env = "INPUT_FORCE",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Pass --force to bump-formula-pr"
    )]
    pub force: Option<String>,

    #[arg(
        long,
        env = "INPUT_LIVECHECK",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Bump every formula livecheck reports as outdated"
    )]
    pub livecheck: Option<String>,

    #[arg(long, env = "GITHUB_ACTOR", help = "User the commits are attributed to")]
    pub actor: Option<String>,

    #[arg(
        long = "dry-run",
        env = "DEBUG",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Print mutating commands without running them"
    )]
    pub dry_run: Option<String>,
}

impl Args {
    /// Normalizes the raw arguments into typed inputs.
    pub fn into_inputs(self) -> Inputs {
        Inputs {
            token: non_empty(self.token),
            message: non_empty(self.message),
            tap: non_empty(self.tap),
            formula: non_empty(self.formula),
            version: non_empty(self.formula_version),
            url: non_empty(self.url),
            tag: non_empty(self.tag),
            revision: non_empty(self.revision),
            force: parse_flag(self.force.as_deref()),
            livecheck: parse_flag(self.livecheck.as_deref()),
            actor: non_empty(self.actor),
            dry_run: parse_flag(self.dry_run.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_into_inputs_normalizes_values() {
        let args = Args {
            formula: Some(" foo ".to_string()),
            url: Some(String::new()),
            force: Some("false".to_string()),
            livecheck: Some("true".to_string()),
            ..Default::default()
        };
        let inputs = args.into_inputs();
        assert_eq!(inputs.formula, Some("foo".to_string()));
        assert_eq!(inputs.url, None);
        assert!(!inputs.force);
        assert!(inputs.livecheck);
        assert!(!inputs.dry_run);
    }
}
