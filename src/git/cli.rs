use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GitChoresError, Result};
use crate::git::{Refresh, Repository};

/// Captured result of one git invocation: used immediately, never stored.
struct RunOutput {
    stdout: String,
    stderr: String,
    success: bool,
}

/// Real [Repository] implementation shelling out to the `git` executable.
///
/// Every operation is a blocking subprocess invocation followed by
/// line-oriented text parsing. All parsing of git's output format lives in
/// this file; the rest of the crate only sees branch names.
#[derive(Debug)]
pub struct CliRepository {
    workdir: Option<PathBuf>,
}

impl CliRepository {
    /// Open the repository containing the current working directory.
    ///
    /// # Returns
    /// * `Ok(CliRepository)` - The current directory is inside a work tree
    /// * `Err` - Not inside a git repository, or `git` is not runnable
    pub fn discover() -> Result<Self> {
        let repo = CliRepository { workdir: None };
        repo.verify_work_tree()?;
        Ok(repo)
    }

    /// Open the repository at an explicit path.
    ///
    /// Commands run with `git -C <path>`, leaving the process working
    /// directory untouched. Used by tests against throwaway repositories.
    pub fn at(path: impl AsRef<Path>) -> Result<Self> {
        let repo = CliRepository {
            workdir: Some(path.as_ref().to_path_buf()),
        };
        repo.verify_work_tree()?;
        Ok(repo)
    }

    fn verify_work_tree(&self) -> Result<()> {
        let out = self.run(&["rev-parse", "--is-inside-work-tree"])?;
        if out.success && out.stdout.trim() == "true" {
            Ok(())
        } else {
            Err(GitChoresError::repository(
                "current directory is not inside a git work tree",
            ))
        }
    }

    /// Base git command, scoped via `-C` when a workdir is set.
    fn command(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.workdir {
            cmd.arg("-C").arg(dir);
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<RunOutput> {
        let output = self.command().args(args).output()?;
        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }

    /// Run a command whose failure is fatal, mapping it to a command error
    /// that carries git's stderr text.
    fn run_checked(&self, args: &[&str]) -> Result<String> {
        let out = self.run(args)?;
        if out.success {
            Ok(out.stdout)
        } else {
            let detail = out.stderr.trim();
            let msg = if detail.is_empty() {
                format!("git {} exited with a failure status", args.join(" "))
            } else {
                detail.to_string()
            };
            Err(GitChoresError::command(msg))
        }
    }

    /// Run a best-effort command, collapsing any failure into [Refresh].
    fn run_best_effort(&self, args: &[&str]) -> Refresh {
        match self.run(args) {
            Ok(out) if out.success => Refresh::Completed,
            Ok(out) => {
                let detail = out.stderr.trim();
                if detail.is_empty() {
                    Refresh::Skipped(format!("git {} failed", args.join(" ")))
                } else {
                    Refresh::Skipped(detail.to_string())
                }
            }
            Err(e) => Refresh::Skipped(e.to_string()),
        }
    }
}

/// Parse `git branch` style output into branch names.
///
/// Strips the `* ` current-branch marker and the `+ ` linked-worktree
/// marker, skips blank lines, and skips the `origin/HEAD -> origin/main`
/// alias line from remote listings.
fn parse_branch_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches("* ")
                .trim_start_matches("+ ")
                .trim()
        })
        .filter(|name| !name.is_empty() && !name.contains(" -> "))
        .map(|name| name.to_string())
        .collect()
}

impl Repository for CliRepository {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        let stdout = self.run_checked(&["branch"])?;
        Ok(parse_branch_lines(&stdout))
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        let stdout = self.run_checked(&["branch", "-r"])?;
        Ok(parse_branch_lines(&stdout))
    }

    fn current_branch(&self) -> Result<String> {
        let stdout = self.run_checked(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        let name = stdout.trim();
        if name.is_empty() {
            Err(GitChoresError::branch("could not determine current branch"))
        } else {
            Ok(name.to_string())
        }
    }

    fn merged_into(&self, branch: &str) -> Result<Vec<String>> {
        let stdout = self.run_checked(&["branch", "--merged", branch])?;
        Ok(parse_branch_lines(&stdout))
    }

    fn rev_exists(&self, rev: &str) -> Result<bool> {
        // --verify --quiet exits non-zero for unknown revisions without
        // printing an error, so a failure status is a plain "no".
        let out = self.run(&["rev-parse", "--verify", "--quiet", rev])?;
        Ok(out.success)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run_checked(&["checkout", branch])?;
        Ok(())
    }

    fn create_branch(&self, name: &str, base: &str) -> Result<()> {
        self.run_checked(&["checkout", "-b", name, base])?;
        Ok(())
    }

    fn delete_branch(&self, name: &str) -> Result<()> {
        self.run_checked(&["branch", "-d", name])?;
        Ok(())
    }

    fn fetch(&self, branch: Option<&str>) -> Refresh {
        match branch {
            Some(branch) => self.run_best_effort(&["fetch", "origin", branch]),
            None => self.run_best_effort(&["fetch", "--prune", "origin"]),
        }
    }

    fn pull(&self) -> Refresh {
        self.run_best_effort(&["pull"])
    }
}
