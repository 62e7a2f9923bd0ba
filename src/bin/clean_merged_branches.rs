use anyhow::Result;
use clap::Parser;

use git_chores::cleaner;
use git_chores::git::{CliRepository, Refresh, Repository};
use git_chores::ui;

#[derive(clap::Parser)]
#[command(
    name = "clean-merged-branches",
    about = "Delete local branches already merged into the main branch"
)]
struct Args {
    #[arg(long, help = "Report what would be deleted without deleting anything")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let repo = match CliRepository::discover() {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Offline cleanup of local state should still work, so a failed
    // refresh only downgrades to a status line.
    ui::display_status("Refreshing remote-tracking branches...");
    if let Refresh::Skipped(reason) = repo.fetch(None) {
        ui::display_status(&format!(
            "Could not refresh from origin: {}. Using local state.",
            reason
        ));
    }

    let main_branch = match cleaner::detect_main_branch(&repo) {
        Ok(branch) => branch,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let merged = match cleaner::list_merged_branches(&repo, &main_branch) {
        Ok(merged) => merged,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if merged.is_empty() {
        ui::display_success(&format!(
            "No local branches merged into '{}' to clean up",
            main_branch
        ));
        return Ok(());
    }

    ui::display_branch_list(
        &format!("Branches merged into '{}':", main_branch),
        &merged,
    );

    let summary = cleaner::delete_branches(&repo, &merged, args.dry_run);

    if args.dry_run {
        ui::display_success(&format!("{} branch(es) would be deleted", summary.deleted));
    } else if summary.failed > 0 {
        ui::display_success(&format!(
            "{} branch(es) deleted, {} failed",
            summary.deleted, summary.failed
        ));
    } else {
        ui::display_success(&format!("{} branch(es) deleted", summary.deleted));
    }

    Ok(())
}
