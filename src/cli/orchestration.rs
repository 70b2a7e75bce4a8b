//! Main workflow orchestration logic
//!
//! Runs a [Plan] end to end: identity setup, brew preparation, then the bump
//! itself. Collaborators are passed in as traits so the whole workflow can be
//! driven by mocks.

use tracing::{debug, info, warn};

use crate::brew::{Brew, BumpRequest, LivecheckEntry};
use crate::cli::plan::Plan;
use crate::config::{Config, Inputs};
use crate::error::{BumpError, Result};
use crate::git::IdentityStore;
use crate::github::ProfileSource;
use crate::identity::{resolve_identity, Identity};
use crate::runner::CommandRunner;
use crate::ui;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Author the bump commits were attributed to
    pub identity: Identity,

    /// Formulae a bump PR was requested for, in order
    pub bumped: Vec<String>,

    /// Livecheck results without a usable latest version
    pub skipped: Vec<String>,
}

/// Progress of a batch of bumps.
///
/// Every failure is counted but only the most recent one is kept; it becomes
/// the run's error once the batch is over.
#[derive(Debug, Default)]
pub struct RunOutcome {
    bumped: Vec<String>,
    skipped: Vec<String>,
    failed: usize,
    last_failure: Option<BumpError>,
}

impl RunOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, formula: impl Into<String>) {
        self.bumped.push(formula.into());
    }

    pub fn record_skip(&mut self, formula: impl Into<String>) {
        self.skipped.push(formula.into());
    }

    pub fn record_failure(&mut self, error: BumpError) {
        self.failed += 1;
        self.last_failure = Some(error);
    }

    pub fn bumped(&self) -> &[String] {
        &self.bumped
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn last_failure(&self) -> Option<&BumpError> {
        self.last_failure.as_ref()
    }

    /// Turns a batch with any failure into the last captured error.
    pub fn finish(mut self) -> Result<Self> {
        match self.last_failure.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// Bumps every entry that has a latest version, in order.
///
/// A failed bump does not stop the batch; see [RunOutcome].
pub fn bump_all<R: CommandRunner>(
    brew: &Brew<R>,
    entries: &[LivecheckEntry],
    force: bool,
    message: &str,
) -> RunOutcome {
    let mut outcome = RunOutcome::new();

    for entry in entries {
        let Some(version) = entry.latest_version.as_deref() else {
            debug!(formula = %entry.formula, "no latest version reported, skipping");
            outcome.record_skip(&entry.formula);
            continue;
        };

        let request = BumpRequest::version_only(&entry.formula, version, force, message);
        match brew.bump_formula_pr(&request) {
            Ok(()) => {
                info!(formula = %entry.formula, version, "bump requested");
                outcome.record_success(&entry.formula);
            }
            Err(err) => {
                warn!(formula = %entry.formula, error = %err, "bump failed, continuing");
                ui::display_error(&format!("{}: {}", entry.formula, err));
                outcome.record_failure(err);
            }
        }
    }

    outcome
}

/// Executes the bump part of a plan against brew.
pub fn execute_plan<R: CommandRunner>(brew: &Brew<R>, plan: &Plan) -> Result<RunOutcome> {
    match plan {
        Plan::Explicit(request) => {
            brew.bump_formula_pr(request)?;
            let mut outcome = RunOutcome::new();
            outcome.record_success(&request.formula);
            Ok(outcome)
        }
        Plan::Livecheck {
            query,
            force,
            message,
        } => {
            let entries = brew.livecheck(query)?;
            let outcome = bump_all(brew, &entries, *force, message);
            ui::display_batch_summary(
                outcome.bumped().len(),
                outcome.skipped().len(),
                outcome.failed(),
            );
            outcome.finish()
        }
    }
}

/// Collaborators of a full run
pub struct BumpWorkflow<'a, R: CommandRunner> {
    pub profiles: &'a dyn ProfileSource,
    pub git: &'a dyn IdentityStore,
    pub brew: &'a Brew<R>,
    pub config: &'a Config,
}

impl<'a, R: CommandRunner> BumpWorkflow<'a, R> {
    /// Main bump workflow
    ///
    /// 1. Validate inputs and build the plan
    /// 2. Resolve the commit identity and write it to git
    /// 3. Reset brew and tap the tap, when configured
    /// 4. Bump the formula, or every outdated formula in livecheck mode
    pub fn run(&self, inputs: &Inputs) -> Result<WorkflowResult> {
        let plan = Plan::from_inputs(inputs)?;
        debug!(?plan, "plan built");

        let identity = self.configure_identity(inputs.actor.as_deref())?;

        if self.config.brew.update_reset {
            self.brew.update_reset()?;
        }

        if let Some(tap) = inputs.tap.as_deref() {
            self.brew.tap(tap)?;
        }

        let outcome = execute_plan(self.brew, &plan)?;

        Ok(WorkflowResult {
            identity,
            bumped: outcome.bumped().to_vec(),
            skipped: outcome.skipped().to_vec(),
        })
    }

    fn configure_identity(&self, actor: Option<&str>) -> Result<Identity> {
        let profile = self.profiles.fetch_profile(actor)?;
        let identity = resolve_identity(&profile, &self.config.github.noreply_domain);
        ui::display_identity(&identity);

        if !self.config.behavior.configure_git {
            return Ok(identity);
        }

        for (key, value) in [("user.name", &identity.name), ("user.email", &identity.email)] {
            let args = ["config", "--global", key, value.as_str()].map(String::from);
            ui::display_command("git", &args);
        }
        if !self.brew.is_dry_run() {
            self.git.set_identity(&identity)?;
        }
        Ok(identity)
    }
}
