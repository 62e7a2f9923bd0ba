//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git command-line
//! tool, allowing for multiple implementations including the real subprocess
//! backend and a mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait, which defines the git
//! operations the git-chores tools need. The concrete implementations include:
//!
//! - [cli::CliRepository]: the real implementation shelling out to `git`
//! - [mock::MockRepository]: a mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations, so that the text-parsing fragility of the git CLI stays
//! contained in one place.

pub mod cli;
pub mod mock;

pub use cli::CliRepository;
pub use mock::MockRepository;

use crate::error::Result;

/// Outcome of a best-effort network refresh (fetch or pull).
///
/// Fetch and pull failures must never abort a run: local branch state stays
/// usable when offline. Returning this enum instead of a `Result` encodes
/// that policy in the type, so call sites can only downgrade a failure to a
/// status line, never propagate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// The refresh completed.
    Completed,
    /// The refresh did not complete; carries the reason for reporting.
    Skipped(String),
}

impl Refresh {
    /// True if the refresh did not complete.
    pub fn was_skipped(&self) -> bool {
        matches!(self, Refresh::Skipped(_))
    }
}

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads. Fallible methods return [crate::error::Result]; implementations
/// should map underlying failures (a non-zero git exit status, unreadable
/// output) to the appropriate [crate::error::GitChoresError] variant,
/// carrying git's stderr text where available.
pub trait Repository: Send + Sync {
    /// List local branch names.
    ///
    /// Listing markers (`* ` for the current branch, `+ ` for branches
    /// checked out in linked worktrees) are already stripped.
    fn list_local_branches(&self) -> Result<Vec<String>>;

    /// List remote-tracking branch names in `origin/<name>` form.
    ///
    /// The `origin/HEAD -> origin/main` alias line is excluded.
    fn list_remote_branches(&self) -> Result<Vec<String>>;

    /// Name of the currently checked-out branch.
    fn current_branch(&self) -> Result<String>;

    /// List local branches whose history is fully contained in `branch`.
    ///
    /// The result is unfiltered: it may include `branch` itself and the
    /// current branch. Callers apply their own exclusion rules.
    fn merged_into(&self, branch: &str) -> Result<Vec<String>>;

    /// True if `rev` resolves to a valid revision.
    fn rev_exists(&self, rev: &str) -> Result<bool>;

    /// Check out an existing branch.
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Create `name` from `base` and check it out.
    fn create_branch(&self, name: &str, base: &str) -> Result<()>;

    /// Safely delete a local branch (refuses unmerged branches).
    fn delete_branch(&self, name: &str) -> Result<()>;

    /// Refresh remote-tracking state, best-effort.
    ///
    /// With a branch name, fetches that branch from origin; without one,
    /// fetches and prunes all remote-tracking refs.
    fn fetch(&self, branch: Option<&str>) -> Refresh;

    /// Pull the latest changes for the current branch, best-effort.
    fn pull(&self) -> Refresh;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_completed() {
        assert!(!Refresh::Completed.was_skipped());
    }

    #[test]
    fn test_refresh_skipped_carries_reason() {
        let refresh = Refresh::Skipped("could not resolve host".to_string());
        assert!(refresh.was_skipped());
    }
}
