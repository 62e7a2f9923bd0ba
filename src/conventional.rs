use std::sync::OnceLock;

use regex::Regex;

/// Conventional commit types with their one-line descriptions, in display
/// order. Single source of truth: both the subject pattern and the help
/// text are derived from this table, so the rule and its documentation
/// cannot drift apart.
pub const COMMIT_TYPES: [(&str, &str); 8] = [
    ("feat", "A new feature"),
    ("fix", "A bug fix"),
    ("docs", "Documentation only changes"),
    ("style", "Formatting changes that do not affect meaning"),
    ("refactor", "A code change that neither fixes a bug nor adds a feature"),
    ("test", "Adding missing tests or correcting existing tests"),
    ("chore", "Changes to the build process or auxiliary tools"),
    ("revert", "Reverts a previous commit"),
];

/// Maximum length of the subject after `type(scope): `.
const SUBJECT_LIMIT: usize = 100;

/// Pattern over the first line: optional `revert: ` prefix, a type token,
/// an optional parenthesized scope, a literal `: `, then 1-100 characters.
fn subject_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let types: Vec<&str> = COMMIT_TYPES.iter().map(|(token, _)| *token).collect();
        let pattern = format!(
            r"^(revert: )?({})(\(.+\))?: .{{1,{}}}$",
            types.join("|"),
            SUBJECT_LIMIT
        );
        Regex::new(&pattern).expect("commit subject pattern is valid")
    })
}

/// Extract the semantically significant part of a commit message: the text
/// up to the first newline.
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

/// Validate a commit message's first line against the conventional-commit
/// grammar.
///
/// Lines beginning with `Merge` or `#` are accepted without pattern
/// checking (merge commits and comment-only lines are exempt). An empty or
/// whitespace-only line is invalid regardless of the exemption list.
///
/// # Returns
/// * `Ok(())` - The line is acceptable
/// * `Err(help)` - The full explanation block to show the user
pub fn validate_subject(line: &str) -> std::result::Result<(), String> {
    if line.trim().is_empty() {
        return Err(help_text());
    }
    if line.starts_with("Merge") || line.starts_with('#') {
        return Ok(());
    }
    if subject_regex().is_match(line) {
        Ok(())
    } else {
        Err(help_text())
    }
}

/// Render the rule explanation shown on validation failure.
///
/// The type list is generated from [COMMIT_TYPES], the same table the
/// matcher is built from.
pub fn help_text() -> String {
    let mut text = String::new();
    text.push_str("Commit message does not follow the conventional format.\n");
    text.push_str("\n");
    text.push_str("Expected first line:\n");
    text.push_str(&format!(
        "  <type>(<scope>): <subject>    (scope optional, subject 1-{} characters)\n",
        SUBJECT_LIMIT
    ));
    text.push_str("\n");
    text.push_str("Valid types:\n");
    for (token, description) in COMMIT_TYPES {
        text.push_str(&format!("  {:<10} {}\n", token, description));
    }
    text.push_str("\n");
    text.push_str("Examples:\n");
    text.push_str("  feat: add login\n");
    text.push_str("  fix(api): handle timeout\n");
    text.push_str("  docs(readme): update guide\n");
    text.push_str("  revert: fix(api): handle timeout\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_type() {
        assert!(validate_subject("feat: add login").is_ok());
        assert!(validate_subject("chore: update dependencies").is_ok());
    }

    #[test]
    fn test_accepts_scoped_type() {
        assert!(validate_subject("fix(api): handle timeout").is_ok());
        assert!(validate_subject("docs(readme): update guide").is_ok());
    }

    #[test]
    fn test_accepts_revert_prefix() {
        assert!(validate_subject("revert: fix(api): handle timeout").is_ok());
        assert!(validate_subject("revert: feat: add login").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(validate_subject("").is_err());
        assert!(validate_subject("   ").is_err());
    }

    #[test]
    fn test_rejects_missing_type() {
        assert!(validate_subject("added stuff").is_err());
    }

    #[test]
    fn test_rejects_uppercase_type() {
        assert!(validate_subject("FEAT: x").is_err());
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(validate_subject("wip: still going").is_err());
    }

    #[test]
    fn test_rejects_missing_space_after_colon() {
        assert!(validate_subject("feat:no space").is_err());
    }

    #[test]
    fn test_subject_length_limit() {
        let ok = format!("feat: {}", "a".repeat(SUBJECT_LIMIT));
        let too_long = format!("feat: {}", "a".repeat(SUBJECT_LIMIT + 1));
        assert!(validate_subject(&ok).is_ok());
        assert!(validate_subject(&too_long).is_err());
    }

    #[test]
    fn test_merge_lines_exempt() {
        assert!(validate_subject("Merge branch 'feature/x' into main").is_ok());
        assert!(validate_subject("Merge pull request #42 from fork/main").is_ok());
    }

    #[test]
    fn test_comment_lines_exempt() {
        assert!(validate_subject("# this is a comment").is_ok());
    }

    #[test]
    fn test_help_text_lists_every_type() {
        let help = help_text();
        for (token, _) in COMMIT_TYPES {
            assert!(
                help.contains(token),
                "help text should mention type '{}'",
                token
            );
        }
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("feat: add login\n\nbody text"), "feat: add login");
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("single"), "single");
    }
}
