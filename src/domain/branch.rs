/// Branch-name prefixes recognized by the naming convention, in display order.
pub const RECOGNIZED_PREFIXES: [&str; 6] =
    ["feature", "fix", "hotfix", "refactor", "docs", "chore"];

/// True for the repository's protected integration branch names.
///
/// A merged-branch cleanup must never delete these, independent of what the
/// detected main branch turns out to be.
pub fn is_protected(name: &str) -> bool {
    matches!(name, "main" | "master")
}

/// Result of checking a branch name against the prefix convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixCheck {
    /// The name contains no `/`, so no convention applies
    NoPrefix,
    /// The part before the first `/` is a recognized prefix
    Recognized(String),
    /// The part before the first `/` is not in the recognized set
    Unrecognized(String),
}

/// Check the part of `name` before the first `/` against the recognized
/// prefix set. Advisory only: an unrecognized prefix warrants a warning,
/// never a refusal.
pub fn check_prefix(name: &str) -> PrefixCheck {
    match name.split_once('/') {
        None => PrefixCheck::NoPrefix,
        Some((prefix, _)) => {
            if RECOGNIZED_PREFIXES.contains(&prefix) {
                PrefixCheck::Recognized(prefix.to_string())
            } else {
                PrefixCheck::Unrecognized(prefix.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_names() {
        assert!(is_protected("main"));
        assert!(is_protected("master"));
        assert!(!is_protected("develop"));
        assert!(!is_protected("feature/main"));
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(check_prefix("my-feature"), PrefixCheck::NoPrefix);
    }

    #[test]
    fn test_recognized_prefix() {
        assert_eq!(
            check_prefix("feature/login"),
            PrefixCheck::Recognized("feature".to_string())
        );
        assert_eq!(
            check_prefix("hotfix/urgent-patch"),
            PrefixCheck::Recognized("hotfix".to_string())
        );
    }

    #[test]
    fn test_unrecognized_prefix() {
        assert_eq!(
            check_prefix("wip/experiment"),
            PrefixCheck::Unrecognized("wip".to_string())
        );
    }

    #[test]
    fn test_splits_on_first_slash_only() {
        assert_eq!(
            check_prefix("feature/a/b"),
            PrefixCheck::Recognized("feature".to_string())
        );
        assert_eq!(
            check_prefix("a/feature/b"),
            PrefixCheck::Unrecognized("a".to_string())
        );
    }
}
