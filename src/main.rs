use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use homebrew_bump_formula::brew::Brew;
use homebrew_bump_formula::cli::{Args, BumpWorkflow};
use homebrew_bump_formula::config;
use homebrew_bump_formula::git::GlobalGitConfig;
use homebrew_bump_formula::github::GitHubClient;
use homebrew_bump_formula::runner::SystemRunner;
use homebrew_bump_formula::ui;
use homebrew_bump_formula::BumpError;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("homebrew_bump_formula={}", level).into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = args.config.clone();
    let inputs = args.into_inputs();

    // Load settings
    let config = match config::load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading settings: {}", e));
            std::process::exit(1);
        }
    };

    info!(
        livecheck = inputs.livecheck,
        dry_run = inputs.dry_run,
        "homebrew-bump-formula {}",
        env!("CARGO_PKG_VERSION")
    );

    // brew reads the token from its own environment variable
    let mut runner = SystemRunner::new();
    if let Some(token) = inputs.token.as_deref() {
        runner = runner.env("HOMEBREW_GITHUB_API_TOKEN", token);
    }
    let brew = Brew::new(runner, config.brew.program.clone(), inputs.dry_run);

    let profiles = GitHubClient::new(&config.github.api_url, inputs.token.as_deref())?;
    let git = GlobalGitConfig::discover()?;

    let workflow = BumpWorkflow {
        profiles: &profiles,
        git: &git,
        brew: &brew,
        config: &config,
    };

    match workflow.run(&inputs) {
        Ok(result) => {
            if result.bumped.is_empty() {
                ui::display_status("No formula needed a bump");
            } else {
                ui::display_success(&format!(
                    "Requested bump PRs for: {}",
                    result.bumped.join(", ")
                ));
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            if let BumpError::ExternalCommand { stderr, .. } = &e {
                if !stderr.trim().is_empty() {
                    eprintln!("{}", stderr.trim_end());
                }
            }
            std::process::exit(1);
        }
    }
}
