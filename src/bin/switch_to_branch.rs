use anyhow::Result;
use clap::Parser;

use git_chores::domain::{self, PrefixCheck};
use git_chores::git::CliRepository;
use git_chores::switcher;
use git_chores::ui;

#[derive(clap::Parser)]
#[command(
    name = "switch-to-branch",
    about = "Switch to a branch, creating it from a base branch when absent"
)]
struct Args {
    #[arg(help = "Branch to switch to or create")]
    branch: String,

    #[arg(
        long,
        value_name = "BASE",
        help = "Base branch to create from when the target does not exist"
    )]
    from: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Advisory naming check, before touching git. Never blocks execution.
    if let PrefixCheck::Unrecognized(prefix) = domain::check_prefix(&args.branch) {
        ui::display_warning(&format!(
            "Branch prefix '{}' is not recognized. Recognized prefixes: {}",
            prefix,
            domain::RECOGNIZED_PREFIXES.join(", ")
        ));
    }

    let repo = match CliRepository::discover() {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match switcher::switch_or_create(&repo, &args.branch, args.from.as_deref()) {
        Ok(()) => {
            ui::display_switched(&args.branch);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
