use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{BumpError, Result};
use crate::runner::{render_command, CommandRunner};

/// One recorded call to the mock runner
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// The first argument, i.e. the subcommand for `brew`.
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// The last argument, i.e. the formula for `bump-formula-pr`.
    pub fn target(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

/// Mock runner for testing without spawning processes
///
/// Records every call. `read` answers with the output registered for the
/// subcommand; calls whose last argument was registered with `fail_on` fail.
#[derive(Default)]
pub struct MockRunner {
    invocations: RefCell<Vec<Invocation>>,
    outputs: HashMap<String, String>,
    failing_targets: Vec<String>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers stdout returned by `read` for a subcommand
    pub fn with_output(mut self, subcommand: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.outputs.insert(subcommand.into(), stdout.into());
        self
    }

    /// Makes any call whose last argument equals `target` exit with status 1
    pub fn fail_on(mut self, target: impl Into<String>) -> Self {
        self.failing_targets.push(target.into());
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Recorded calls for one subcommand, in call order
    pub fn calls_to(&self, subcommand: &str) -> Vec<Invocation> {
        self.invocations
            .borrow()
            .iter()
            .filter(|i| i.subcommand() == Some(subcommand))
            .cloned()
            .collect()
    }

    fn record(&self, program: &str, args: &[String]) -> Result<()> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        };
        let failing = invocation
            .target()
            .map(|t| self.failing_targets.iter().any(|f| f == t))
            .unwrap_or(false);
        self.invocations.borrow_mut().push(invocation);

        if failing {
            return Err(BumpError::external(
                render_command(program, args),
                Some(1),
                "mock failure",
            ));
        }
        Ok(())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        self.record(program, args)
    }

    fn read(&self, program: &str, args: &[String]) -> Result<String> {
        self.record(program, args)?;
        let subcommand = args.first().map(String::as_str).unwrap_or_default();
        Ok(self.outputs.get(subcommand).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_records_calls() {
        let runner = MockRunner::new();
        runner
            .run("brew", &["tap".to_string(), "foo/bar".to_string()])
            .unwrap();

        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "brew");
        assert_eq!(calls[0].subcommand(), Some("tap"));
        assert_eq!(calls[0].target(), Some("foo/bar"));
    }

    #[test]
    fn test_mock_runner_outputs_and_failures() {
        let runner = MockRunner::new()
            .with_output("livecheck", "[]")
            .fail_on("broken");

        assert_eq!(runner.read("brew", &["livecheck".to_string()]).unwrap(), "[]");
        assert_eq!(runner.read("brew", &["info".to_string()]).unwrap(), "");
        assert!(runner
            .run("brew", &["bump-formula-pr".to_string(), "broken".to_string()])
            .is_err());
        assert_eq!(runner.calls_to("bump-formula-pr").len(), 1);
    }
}
