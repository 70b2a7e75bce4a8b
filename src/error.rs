use thiserror::Error;

/// Unified error type for bump-formula operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External command failed: `{command}` ({})", exit_label(.code))]
    ExternalCommand {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("GitHub API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in homebrew-bump-formula
pub type Result<T> = std::result::Result<T, BumpError>;

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl From<serde_json::Error> for BumpError {
    fn from(err: serde_json::Error) -> Self {
        BumpError::Parse(err.to_string())
    }
}

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumpError::Parse(msg.into())
    }

    /// Create an external command error from a rendered command line
    pub fn external(command: impl Into<String>, code: Option<i32>, stderr: impl Into<String>) -> Self {
        BumpError::ExternalCommand {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, BumpError::Config(_))
    }
}
