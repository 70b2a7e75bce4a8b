use std::sync::OnceLock;

use regex::Regex;

const TAG_REF_PREFIX: &str = "refs/tags/";

fn delimiters() -> &'static Regex {
    static DELIMITERS: OnceLock<Regex> = OnceLock::new();
    DELIMITERS.get_or_init(|| Regex::new(r"[\s,]+").expect("delimiter pattern is valid"))
}

/// Qualifies a formula name with its tap.
/// Example: tap="foo", formula="bar" -> "foo/bar"
pub fn qualify(tap: Option<&str>, formula: &str) -> String {
    match tap {
        Some(tap) => format!("{}/{}", tap, formula),
        None => formula.to_string(),
    }
}

/// Splits a formula list on whitespace, commas and newlines, dropping empty
/// tokens and qualifying each one with `tap`.
pub fn split_formula_list(list: &str, tap: Option<&str>) -> Vec<String> {
    delimiters()
        .split(list)
        .filter(|token| !token.is_empty())
        .map(|token| qualify(tap, token))
        .collect()
}

/// Strips a leading `refs/tags/` so a pushed ref can be used as a tag.
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix(TAG_REF_PREFIX).unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_with_tap() {
        assert_eq!(qualify(Some("foo"), "bar"), "foo/bar");
        assert_eq!(qualify(Some("user/tap"), "bar"), "user/tap/bar");
    }

    #[test]
    fn test_qualify_without_tap() {
        assert_eq!(qualify(None, "bar"), "bar");
    }

    #[test]
    fn test_split_mixed_delimiters() {
        let list = "foo, bar\nbaz  qux,,\n";
        assert_eq!(split_formula_list(list, None), vec!["foo", "bar", "baz", "qux"]);
    }

    #[test]
    fn test_split_qualifies_every_token() {
        assert_eq!(
            split_formula_list(" a,b ", Some("me/tap")),
            vec!["me/tap/a", "me/tap/b"]
        );
    }

    #[test]
    fn test_split_blank_list() {
        assert!(split_formula_list(" ,\n ", Some("me/tap")).is_empty());
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("refs/tags/v1.2.3"), "v1.2.3");
        assert_eq!(normalize_tag("v1.2.3"), "v1.2.3");
        assert_eq!(normalize_tag("refs/heads/main"), "refs/heads/main");
    }
}
