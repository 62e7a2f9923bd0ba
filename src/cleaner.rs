//! Branch Cleaner operations - find and remove local branches already
//! merged into the main line, never touching the main line itself or the
//! branch currently checked out.

use crate::domain;
use crate::error::Result;
use crate::git::Repository;
use crate::ui;

/// Counts from a delete pass, feeding the final summary line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    /// Branches deleted, or that would be deleted under dry-run
    pub deleted: usize,
    /// Branches that failed to delete (per-item, non-fatal)
    pub failed: usize,
}

/// Detect the repository's main integration branch.
///
/// Prefers the remote-tracking listing: `origin/main`, then
/// `origin/master`. Falls back to the local listing, preferring `main`,
/// defaulting to `master`. Uses only already-known refs; no network call.
pub fn detect_main_branch(repo: &dyn Repository) -> Result<String> {
    let remotes = repo.list_remote_branches()?;
    if remotes.iter().any(|b| b == "origin/main") {
        return Ok("main".to_string());
    }
    if remotes.iter().any(|b| b == "origin/master") {
        return Ok("master".to_string());
    }

    let locals = repo.list_local_branches()?;
    if locals.iter().any(|b| b == "main") {
        Ok("main".to_string())
    } else {
        Ok("master".to_string())
    }
}

/// List local branches fully merged into `main` that are safe to delete.
///
/// Excludes `main` itself, the protected literals `main`/`master`, and the
/// currently checked-out branch. Order follows the underlying listing
/// order, so output is stable.
pub fn list_merged_branches(repo: &dyn Repository, main: &str) -> Result<Vec<String>> {
    let current = repo.current_branch()?;
    let merged = repo.merged_into(main)?;

    Ok(merged
        .into_iter()
        .filter(|name| name != main && !domain::is_protected(name) && name != &current)
        .collect())
}

/// Delete (or, under dry-run, only report) each candidate branch.
///
/// A failed deletion is a recoverable per-branch condition: it is reported
/// with a `[FAIL]` marker and processing continues with the rest.
pub fn delete_branches(repo: &dyn Repository, branches: &[String], dry_run: bool) -> CleanSummary {
    let mut summary = CleanSummary::default();

    for branch in branches {
        if dry_run {
            ui::display_delete_dry_run(branch);
            summary.deleted += 1;
            continue;
        }
        match repo.delete_branch(branch) {
            Ok(()) => {
                ui::display_delete_ok(branch);
                summary.deleted += 1;
            }
            Err(e) => {
                ui::display_delete_failed(branch, &e.to_string());
                summary.failed += 1;
            }
        }
    }

    summary
}
