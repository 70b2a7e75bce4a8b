/// Flags passed to every `bump-formula-pr` call.
const FIXED_FLAGS: [&str; 2] = ["--no-audit", "--no-browse"];

/// A single `brew bump-formula-pr` invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpRequest {
    pub formula: String,
    pub version: Option<String>,
    pub url: Option<String>,
    pub tag: Option<String>,
    pub revision: Option<String>,
    pub force: bool,
    pub message: String,
}

impl BumpRequest {
    /// Version-only bump, as produced for each livecheck result.
    pub fn version_only(
        formula: impl Into<String>,
        version: impl Into<String>,
        force: bool,
        message: impl Into<String>,
    ) -> Self {
        BumpRequest {
            formula: formula.into(),
            version: Some(version.into()),
            force,
            message: message.into(),
            ..Default::default()
        }
    }

    /// Argument vector for `brew`, subcommand first and formula last.
    ///
    /// Optional fields that are unset or empty produce no flag at all.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["bump-formula-pr".to_string()];
        args.extend(FIXED_FLAGS.iter().map(|f| f.to_string()));
        args.push(format!("--message={}", self.message));

        let valued = [
            ("--version", &self.version),
            ("--url", &self.url),
            ("--tag", &self.tag),
            ("--revision", &self.revision),
        ];
        for (flag, value) in valued {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                args.push(format!("{}={}", flag, value));
            }
        }

        if self.force {
            args.push("--force".to_string());
        }
        args.push(self.formula.clone());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_only_args() {
        let request = BumpRequest::version_only("foo/bar/baz", "1.2.3", false, "msg");
        assert_eq!(
            request.to_args(),
            vec![
                "bump-formula-pr",
                "--no-audit",
                "--no-browse",
                "--message=msg",
                "--version=1.2.3",
                "foo/bar/baz",
            ]
        );
    }

    #[test]
    fn test_all_fields_in_order() {
        let request = BumpRequest {
            formula: "baz".to_string(),
            version: Some("2.0".to_string()),
            url: Some("https://example.com/baz-2.0.tar.gz".to_string()),
            tag: Some("v2.0".to_string()),
            revision: Some("abc123".to_string()),
            force: true,
            message: "m".to_string(),
        };
        let args = request.to_args();
        assert_eq!(
            &args[4..],
            &[
                "--version=2.0",
                "--url=https://example.com/baz-2.0.tar.gz",
                "--tag=v2.0",
                "--revision=abc123",
                "--force",
                "baz",
            ]
        );
    }

    #[test]
    fn test_empty_fields_emit_no_flag() {
        let request = BumpRequest {
            formula: "baz".to_string(),
            url: Some(String::new()),
            tag: Some("v1".to_string()),
            revision: Some("deadbeef".to_string()),
            ..Default::default()
        };
        let args = request.to_args();
        assert!(args.iter().all(|a| !a.starts_with("--url")));
        assert!(args.iter().all(|a| !a.starts_with("--version")));
        assert!(!args.contains(&"--force".to_string()));
        assert!(args.contains(&"--tag=v1".to_string()));
    }

    #[test]
    fn test_multiline_message_is_single_argument() {
        let request = BumpRequest::version_only("baz", "1", false, "hello\n\nfooter");
        assert!(request.to_args().contains(&"--message=hello\n\nfooter".to_string()));
    }
}
