use thiserror::Error;

/// Unified error type for git-chores operations
#[derive(Error, Debug)]
pub enum GitChoresError {
    #[error("Not a git repository: {0}")]
    Repository(String),

    #[error("Git command failed: {0}")]
    Command(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-chores
pub type Result<T> = std::result::Result<T, GitChoresError>;

impl GitChoresError {
    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        GitChoresError::Repository(msg.into())
    }

    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        GitChoresError::Command(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        GitChoresError::Branch(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitChoresError::repository("no .git directory found");
        assert_eq!(
            err.to_string(),
            "Not a git repository: no .git directory found"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitChoresError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(GitChoresError::command("test")
            .to_string()
            .contains("command failed"));
        assert!(GitChoresError::branch("test").to_string().contains("Branch"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GitChoresError::repository("x"), "Not a git repository"),
            (GitChoresError::command("x"), "Git command failed"),
            (GitChoresError::branch("x"), "Branch error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_preserves_stderr_text() {
        let stderr = "error: The branch 'wip' is not fully merged.";
        let err = GitChoresError::command(stderr);
        assert!(err.to_string().contains(stderr));
    }
}
