//! Package-manager CLI wrapper
//!
//! Knows the `brew` subcommands the action uses and how to build their
//! arguments. Mutating subcommands are echoed as `[command]brew ...` before
//! they run and are only echoed in dry-run mode; `livecheck` always runs
//! because the plan depends on its output.

pub mod livecheck;
pub mod request;

pub use livecheck::{parse_livecheck_output, LivecheckEntry, LivecheckQuery};
pub use request::BumpRequest;

use tracing::info;

use crate::error::Result;
use crate::runner::CommandRunner;
use crate::ui;

/// `brew` driven through a [CommandRunner].
pub struct Brew<R: CommandRunner> {
    runner: R,
    program: String,
    dry_run: bool,
}

impl<R: CommandRunner> Brew<R> {
    pub fn new(runner: R, program: impl Into<String>, dry_run: bool) -> Self {
        Brew {
            runner,
            program: program.into(),
            dry_run,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn run(&self, args: Vec<String>) -> Result<()> {
        ui::display_command(&self.program, &args);
        if self.dry_run {
            return Ok(());
        }
        self.runner.run(&self.program, &args)
    }

    /// `brew update-reset`
    pub fn update_reset(&self) -> Result<()> {
        self.run(vec!["update-reset".to_string()])
    }

    /// `brew tap <tap>`
    pub fn tap(&self, tap: &str) -> Result<()> {
        self.run(vec!["tap".to_string(), tap.to_string()])
    }

    /// `brew livecheck ...`, parsed into entries in reported order.
    pub fn livecheck(&self, query: &LivecheckQuery) -> Result<Vec<LivecheckEntry>> {
        let stdout = self.runner.read(&self.program, &query.to_args())?;
        let entries = parse_livecheck_output(&stdout)?;
        info!(count = entries.len(), "livecheck reported newer versions");
        Ok(entries)
    }

    /// `brew bump-formula-pr ...`
    pub fn bump_formula_pr(&self, request: &BumpRequest) -> Result<()> {
        self.run(request.to_args())
    }
}
