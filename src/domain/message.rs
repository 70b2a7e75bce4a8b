/// Attribution appended to every bump PR message.
pub const MESSAGE_FOOTER: &str =
    "[`action-homebrew-bump-formula`](https://github.com/dawidd6/action-homebrew-bump-formula)";

/// Builds the PR message: the custom text (if any), a blank line, then the footer.
pub fn compose_message(custom: Option<&str>) -> String {
    match custom.filter(|m| !m.is_empty()) {
        Some(custom) => format!("{}\n\n{}", custom, MESSAGE_FOOTER),
        None => MESSAGE_FOOTER.to_string(),
    }
}
