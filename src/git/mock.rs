use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{GitChoresError, Result};
use crate::git::{Refresh, Repository};

/// Branch state for [MockRepository], behind a lock to satisfy the
/// trait's `Send + Sync` bound.
#[derive(Default)]
struct MockState {
    local_branches: Vec<String>,
    remote_branches: Vec<String>,
    current: String,
    merged: HashMap<String, Vec<String>>,
    deleted: Vec<String>,
    created: Vec<(String, String)>,
    checkouts: Vec<String>,
    fetches: usize,
    pulls: usize,
}

/// Mock repository for testing without actual git invocations.
///
/// Records every mutating call so tests can assert on what happened (or,
/// for dry-run paths, that nothing did).
pub struct MockRepository {
    state: Mutex<MockState>,
    fail_checkout: bool,
    fail_create: bool,
    fail_delete: HashSet<String>,
    fail_fetch: bool,
    fail_pull: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            state: Mutex::new(MockState::default()),
            fail_checkout: false,
            fail_create: false,
            fail_delete: HashSet::new(),
            fail_fetch: false,
            fail_pull: false,
        }
    }

    /// Add a local branch to the listing
    pub fn add_local_branch(&mut self, name: impl Into<String>) {
        self.state.lock().unwrap().local_branches.push(name.into());
    }

    /// Add a remote-tracking branch (full `origin/<name>` form)
    pub fn add_remote_branch(&mut self, name: impl Into<String>) {
        self.state.lock().unwrap().remote_branches.push(name.into());
    }

    /// Set the currently checked-out branch
    pub fn set_current_branch(&mut self, name: impl Into<String>) {
        self.state.lock().unwrap().current = name.into();
    }

    /// Record `branch` as fully merged into `target`
    pub fn add_merged(&mut self, target: impl Into<String>, branch: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .merged
            .entry(target.into())
            .or_default()
            .push(branch.into());
    }

    /// Make deletion of a specific branch fail
    pub fn fail_delete_of(&mut self, name: impl Into<String>) {
        self.fail_delete.insert(name.into());
    }

    /// Make checkout fail
    pub fn fail_checkout(&mut self) {
        self.fail_checkout = true;
    }

    /// Make branch creation fail
    pub fn fail_create(&mut self) {
        self.fail_create = true;
    }

    /// Make fetch report a skipped refresh
    pub fn fail_fetch(&mut self) {
        self.fail_fetch = true;
    }

    /// Make pull report a skipped refresh
    pub fn fail_pull(&mut self) {
        self.fail_pull = true;
    }

    /// Branches deleted so far, in deletion order
    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }

    /// Branches created so far, as (name, base) pairs
    pub fn created(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().created.clone()
    }

    /// Branches checked out so far, in call order
    pub fn checkouts(&self) -> Vec<String> {
        self.state.lock().unwrap().checkouts.clone()
    }

    /// Number of fetch calls observed
    pub fn fetch_count(&self) -> usize {
        self.state.lock().unwrap().fetches
    }

    /// Number of pull calls observed
    pub fn pull_count(&self) -> usize {
        self.state.lock().unwrap().pulls
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        Ok(self.state.lock().unwrap().local_branches.clone())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        Ok(self.state.lock().unwrap().remote_branches.clone())
    }

    fn current_branch(&self) -> Result<String> {
        let state = self.state.lock().unwrap();
        if state.current.is_empty() {
            Err(GitChoresError::branch("no current branch configured"))
        } else {
            Ok(state.current.clone())
        }
    }

    fn merged_into(&self, branch: &str) -> Result<Vec<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.merged.get(branch).cloned().unwrap_or_default())
    }

    fn rev_exists(&self, rev: &str) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.local_branches.iter().any(|b| b == rev)
            || state
                .remote_branches
                .iter()
                .any(|b| b == &format!("origin/{}", rev)))
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        if self.fail_checkout {
            return Err(GitChoresError::command(format!(
                "pathspec '{}' did not match any file(s) known to git",
                branch
            )));
        }
        let mut state = self.state.lock().unwrap();
        state.checkouts.push(branch.to_string());
        state.current = branch.to_string();
        // Checking out a remote-only branch creates the local tracking branch.
        if !state.local_branches.iter().any(|b| b == branch) {
            state.local_branches.push(branch.to_string());
        }
        Ok(())
    }

    fn create_branch(&self, name: &str, base: &str) -> Result<()> {
        if self.fail_create {
            return Err(GitChoresError::command(format!(
                "a branch named '{}' already exists",
                name
            )));
        }
        let mut state = self.state.lock().unwrap();
        state.created.push((name.to_string(), base.to_string()));
        state.local_branches.push(name.to_string());
        state.current = name.to_string();
        Ok(())
    }

    fn delete_branch(&self, name: &str) -> Result<()> {
        if self.fail_delete.contains(name) {
            return Err(GitChoresError::command(format!(
                "The branch '{}' is not fully merged.",
                name
            )));
        }
        let mut state = self.state.lock().unwrap();
        state.local_branches.retain(|b| b != name);
        state.deleted.push(name.to_string());
        Ok(())
    }

    fn fetch(&self, _branch: Option<&str>) -> Refresh {
        self.state.lock().unwrap().fetches += 1;
        if self.fail_fetch {
            Refresh::Skipped("could not resolve host: github.com".to_string())
        } else {
            Refresh::Completed
        }
    }

    fn pull(&self) -> Refresh {
        self.state.lock().unwrap().pulls += 1;
        if self.fail_pull {
            Refresh::Skipped("no tracking information for the current branch".to_string())
        } else {
            Refresh::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_basic() {
        let mut repo = MockRepository::new();
        repo.add_local_branch("main");
        repo.add_local_branch("feature/login");
        repo.set_current_branch("main");

        assert_eq!(
            repo.list_local_branches().unwrap(),
            vec!["main", "feature/login"]
        );
        assert_eq!(repo.current_branch().unwrap(), "main");
    }

    #[test]
    fn test_mock_repository_merged_listing() {
        let mut repo = MockRepository::new();
        repo.add_merged("main", "feature/done");
        repo.add_merged("main", "fix/typo");

        assert_eq!(
            repo.merged_into("main").unwrap(),
            vec!["feature/done", "fix/typo"]
        );
        assert!(repo.merged_into("develop").unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_delete_records() {
        let mut repo = MockRepository::new();
        repo.add_local_branch("main");
        repo.add_local_branch("feature/done");

        repo.delete_branch("feature/done").unwrap();
        assert_eq!(repo.deleted(), vec!["feature/done"]);
        assert_eq!(repo.list_local_branches().unwrap(), vec!["main"]);
    }

    #[test]
    fn test_mock_repository_delete_failure_injection() {
        let mut repo = MockRepository::new();
        repo.add_local_branch("wip");
        repo.fail_delete_of("wip");

        let err = repo.delete_branch("wip").unwrap_err();
        assert!(err.to_string().contains("not fully merged"));
        assert!(repo.deleted().is_empty());
    }

    #[test]
    fn test_mock_repository_checkout_remote_creates_local() {
        let mut repo = MockRepository::new();
        repo.add_local_branch("main");
        repo.add_remote_branch("origin/feature/x");
        repo.set_current_branch("main");

        repo.checkout("feature/x").unwrap();
        assert_eq!(repo.current_branch().unwrap(), "feature/x");
        assert!(repo
            .list_local_branches()
            .unwrap()
            .contains(&"feature/x".to_string()));
    }

    #[test]
    fn test_mock_repository_rev_exists() {
        let mut repo = MockRepository::new();
        repo.add_local_branch("main");
        repo.add_remote_branch("origin/develop");

        assert!(repo.rev_exists("main").unwrap());
        assert!(repo.rev_exists("develop").unwrap());
        assert!(!repo.rev_exists("release").unwrap());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_local_branches().unwrap().is_empty());
    }
}
