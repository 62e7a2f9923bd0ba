//! Terminal output helpers - status lines and per-item markers.
//!
//! Errors go to stderr, everything else to stdout. Functions here only
//! format and print; decisions stay with the callers.

use console::style;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning in yellow to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Print a titled list of branch names.
pub fn display_branch_list(title: &str, branches: &[String]) {
    println!("{}", style(title).bold());
    for branch in branches {
        println!("  - {}", branch);
    }
}

/// Per-branch marker: deletion succeeded.
pub fn display_delete_ok(branch: &str) {
    println!("{} deleted {}", style("[OK]").green(), branch);
}

/// Per-branch marker: deletion failed, run continues.
pub fn display_delete_failed(branch: &str, reason: &str) {
    println!("{} {}: {}", style("[FAIL]").red(), branch, reason);
}

/// Per-branch marker: dry-run, nothing deleted.
pub fn display_delete_dry_run(branch: &str) {
    println!("{} would delete {}", style("[DRY-RUN]").cyan(), branch);
}

/// Final confirmation marker for a completed switch.
pub fn display_switched(branch: &str) {
    println!("{} Now on branch '{}'", style("[OK]").green(), branch);
}

/// One-line validation verdict with a truncated preview of the subject.
pub fn display_check_result(line: &str, ok: bool) {
    let preview: String = line.chars().take(50).collect();
    if ok {
        println!("{} {}", style("[OK]").green(), preview);
    } else {
        println!("{} {}", style("[FAIL]").red(), preview);
    }
}
