use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{BumpError, Result};

/// Filter passed to `brew livecheck`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LivecheckQuery {
    /// Fully qualified formula names; empty means "everything in scope".
    pub formulae: Vec<String>,
    pub tap: Option<String>,
}

impl LivecheckQuery {
    /// Argument vector for `brew`.
    ///
    /// `--tap` narrows the scan only when no explicit formula list is given.
    pub fn to_args(&self) -> Vec<String> {
        let mut args: Vec<String> = ["livecheck", "--quiet", "--newer-only", "--full-name", "--json"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        if self.formulae.is_empty() {
            if let Some(tap) = &self.tap {
                args.push(format!("--tap={}", tap));
            }
        } else {
            args.extend(self.formulae.iter().cloned());
        }
        args
    }
}

/// One formula reported by livecheck.
#[derive(Debug, Clone, PartialEq)]
pub struct LivecheckEntry {
    pub formula: String,
    pub latest_version: Option<String>,
}

#[derive(Deserialize)]
struct RawEntry {
    formula: Option<String>,
    version: Option<RawVersion>,
}

#[derive(Deserialize)]
struct RawVersion {
    latest: Option<String>,
}

/// Parses `brew livecheck --json` output, keeping the reported order.
///
/// Records without a `formula` key (casks, for instance) are dropped. Records
/// without `version.latest` are kept with `latest_version: None`.
pub fn parse_livecheck_output(stdout: &str) -> Result<Vec<LivecheckEntry>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(trimmed)?;
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(BumpError::parse(format!(
                "livecheck output must be a JSON array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let raw: RawEntry = serde_json::from_value(record)?;
        let Some(formula) = raw.formula else {
            debug!("ignoring livecheck record without a formula");
            continue;
        };
        entries.push(LivecheckEntry {
            formula,
            latest_version: raw
                .version
                .and_then(|v| v.latest)
                .filter(|v| !v.is_empty()),
        });
    }
    Ok(entries)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_whole_installation() {
        let query = LivecheckQuery::default();
        assert_eq!(
            query.to_args(),
            vec!["livecheck", "--quiet", "--newer-only", "--full-name", "--json"]
        );
    }

    #[test]
    fn test_query_tap_only_without_formulae() {
        let query = LivecheckQuery {
            formulae: Vec::new(),
            tap: Some("me/tap".to_string()),
        };
        assert_eq!(query.to_args().last().unwrap(), "--tap=me/tap");

        let query = LivecheckQuery {
            formulae: vec!["me/tap/a".to_string(), "me/tap/b".to_string()],
            tap: Some("me/tap".to_string()),
        };
        let args = query.to_args();
        assert!(args.iter().all(|a| !a.starts_with("--tap")));
        assert_eq!(&args[5..], &["me/tap/a", "me/tap/b"]);
    }

    #[test]
    fn test_parse_keeps_order_and_missing_versions() {
        let json = r#"[
            {"formula": "me/tap/a", "version": {"current": "1.0", "latest": "1.1", "outdated": true}},
            {"formula": "me/tap/b", "status": "error", "messages": ["unable to get versions"]},
            {"formula": "me/tap/c", "version": {"current": "2.0", "latest": "3.0"}}
        ]"#;
        let entries = parse_livecheck_output(json).unwrap();
        assert_eq!(
            entries,
            vec![
                LivecheckEntry {
                    formula: "me/tap/a".to_string(),
                    latest_version: Some("1.1".to_string()),
                },
                LivecheckEntry {
                    formula: "me/tap/b".to_string(),
                    latest_version: None,
                },
                LivecheckEntry {
                    formula: "me/tap/c".to_string(),
                    latest_version: Some("3.0".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_parse_ignores_casks() {
        let json = r#"[{"cask": "some-app", "version": {"latest": "2"}}]"#;
        assert!(parse_livecheck_output(json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_livecheck_output("").unwrap().is_empty());
        assert!(parse_livecheck_output("[]\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_output() {
        assert!(matches!(
            parse_livecheck_output("Error: no such tap"),
            Err(BumpError::Parse(_))
        ));
        assert!(matches!(
            parse_livecheck_output(r#"{"formula": "a"}"#),
            Err(BumpError::Parse(_))
        ));
        assert!(matches!(
            parse_livecheck_output(r#"[{"formula": 5}]"#),
            Err(BumpError::Parse(_))
        ));
    }
}
