//! Branch Switcher operations - idempotently put the user on a target
//! branch, creating it from a base branch when absent.

use crate::error::{GitChoresError, Result};
use crate::git::{Refresh, Repository};
use crate::ui;

/// True if `name` exists as a local branch or as `origin/<name>` in the
/// remote-tracking listing.
pub fn branch_exists(repo: &dyn Repository, name: &str) -> Result<bool> {
    if repo.list_local_branches()?.iter().any(|b| b == name) {
        return Ok(true);
    }
    let remote_name = format!("origin/{}", name);
    Ok(repo
        .list_remote_branches()?
        .iter()
        .any(|b| b == &remote_name))
}

/// Resolve the base branch for a new branch.
///
/// Uses the explicitly supplied base when given; otherwise probes `main`
/// then `master` for existence as a valid revision, taking the first that
/// resolves.
///
/// # Returns
/// * `Ok(base)` - The base branch to create from
/// * `Err` - Neither probe resolved and no base was supplied (fatal)
pub fn resolve_base(repo: &dyn Repository, explicit: Option<&str>) -> Result<String> {
    if let Some(base) = explicit {
        return Ok(base.to_string());
    }
    for candidate in ["main", "master"] {
        if repo.rev_exists(candidate)? {
            return Ok(candidate.to_string());
        }
    }
    Err(GitChoresError::branch("cannot determine base branch"))
}

/// Switch to `target`, creating it from a base branch if it exists neither
/// locally nor on the remote.
///
/// Idempotent: if `target` is already checked out this is a reported no-op.
/// After a successful checkout of an existing branch, pulling the latest
/// changes is best-effort - the switch has already succeeded.
pub fn switch_or_create(repo: &dyn Repository, target: &str, base: Option<&str>) -> Result<()> {
    if repo.current_branch()? == target {
        ui::display_success(&format!("Already on branch '{}'", target));
        return Ok(());
    }

    if branch_exists(repo, target)? {
        ui::display_status(&format!("Switching to existing branch '{}'", target));
        repo.checkout(target)?;
        if let Refresh::Skipped(reason) = repo.pull() {
            ui::display_status(&format!(
                "Could not pull latest changes: {}. Continuing with local state.",
                reason
            ));
        }
        return Ok(());
    }

    let base = resolve_base(repo, base)?;
    ui::display_status(&format!(
        "Branch '{}' not found, creating from '{}'",
        target, base
    ));
    if let Refresh::Skipped(reason) = repo.fetch(Some(&base)) {
        ui::display_status(&format!(
            "Could not fetch '{}' from origin: {}. Using local state.",
            base, reason
        ));
    }
    repo.create_branch(target, &base)?;
    Ok(())
}
