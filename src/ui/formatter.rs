//! Pure formatting functions for UI output.
//!
//! Everything the user reads on the terminal goes through here; diagnostics
//! go through `tracing` instead.

use console::style;

use crate::cli::{CycleOutcome, Release};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the version of vtes itself.
pub fn display_tool_version(version: &str) {
    println!("v{}", version);
}

/// Print the version recorded in the project's base metadata.
pub fn display_project_version(version: Option<&str>) {
    println!("Project version: {}", version.unwrap_or("none"));
}

/// Print the numbered template menu.
pub fn display_templates(templates: &[&str]) {
    println!(
        "\n{}",
        style("Choose the .gitignore template to use:").bold()
    );
    for (i, template) in templates.iter().enumerate() {
        println!("  {}. {}", i + 1, template);
    }
}

/// One-line summary of a release.
pub fn release_summary(release: &Release) -> String {
    format!(
        "{} bump of {}: {} -> {} ({})",
        release.bump, release.mode, release.previous, release.next, release.message
    )
}

/// Report the outcome of a cycle.
pub fn display_outcome(outcome: &CycleOutcome) {
    match outcome {
        CycleOutcome::Skipped => display_status("Commit message is empty, nothing to do."),
        CycleOutcome::Released(release) => display_success(&release_summary(release)),
    }
}
