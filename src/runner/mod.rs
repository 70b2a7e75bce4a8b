//! External process execution
//!
//! Every external program (`brew` in practice) is started through the
//! [CommandRunner] trait. Calls block until the child exits; a non-zero exit
//! becomes [BumpError::ExternalCommand].

pub mod mock;

pub use mock::MockRunner;

use std::process::Command;

use tracing::debug;

use crate::error::{BumpError, Result};

/// Runs external programs to completion.
pub trait CommandRunner {
    /// Runs `program` with `args`, letting it write straight to the console.
    fn run(&self, program: &str, args: &[String]) -> Result<()>;

    /// Runs `program` with `args` and returns its captured stdout.
    fn read(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Renders a command line for logs and error messages.
pub fn render_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    env: Vec<(String, String)>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an environment variable passed to every spawned process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let rendered = render_command(program, args);
        debug!(command = %rendered, "running");

        let status = self.command(program, args).status().map_err(|e| {
            BumpError::external(&rendered, None, format!("failed to start: {}", e))
        })?;

        if !status.success() {
            return Err(BumpError::external(rendered, status.code(), String::new()));
        }
        Ok(())
    }

    fn read(&self, program: &str, args: &[String]) -> Result<String> {
        let rendered = render_command(program, args);
        debug!(command = %rendered, "reading output");

        let output = self.command(program, args).output().map_err(|e| {
            BumpError::external(&rendered, None, format!("failed to start: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(BumpError::external(rendered, output.status.code(), stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_command() {
        assert_eq!(render_command("brew", &[]), "brew");
        assert_eq!(
            render_command("brew", &args(&["tap", "foo/bar"])),
            "brew tap foo/bar"
        );
    }

    #[test]
    fn test_missing_program_fails() {
        let runner = SystemRunner::new();
        let err = runner
            .run("/nonexistent/path/to/brew", &args(&["--version"]))
            .unwrap_err();
        assert!(matches!(err, BumpError::ExternalCommand { code: None, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_captures_stdout_and_env() {
        let runner = SystemRunner::new().env("BUMP_TEST_VALUE", "hello");
        let out = runner
            .read("sh", &args(&["-c", "printf %s \"$BUMP_TEST_VALUE\""]))
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_error() {
        let runner = SystemRunner::new();
        let err = runner
            .read("sh", &args(&["-c", "echo oops >&2; exit 3"]))
            .unwrap_err();
        match err {
            BumpError::ExternalCommand { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert!(stderr.contains("oops"));
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(runner.run("sh", &args(&["-c", "exit 1"])).is_err());
    }
}
