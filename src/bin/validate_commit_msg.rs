use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use git_chores::conventional;
use git_chores::ui;

#[derive(clap::Parser)]
#[command(
    name = "validate-commit-msg",
    about = "Validate a commit message against the conventional-commit format"
)]
struct Args {
    #[arg(help = "File containing the commit message; reads standard input when omitted")]
    file: Option<PathBuf>,
}

fn read_message(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let message = match read_message(args.file.as_deref()) {
        Ok(message) => message,
        Err(e) => {
            ui::display_error(&format!("Could not read commit message: {}", e));
            std::process::exit(1);
        }
    };

    let line = conventional::first_line(&message);
    match conventional::validate_subject(line) {
        Ok(()) => {
            ui::display_check_result(line, true);
            Ok(())
        }
        Err(help) => {
            ui::display_check_result(line, false);
            println!();
            print!("{}", help);
            std::process::exit(1);
        }
    }
}
