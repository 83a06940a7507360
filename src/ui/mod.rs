//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_outcome, display_project_version, display_status, display_success,
    display_templates, display_tool_version,
};

/// Prompts user to pick a `.gitignore` template from a numbered list.
///
/// Accepts a 1-based index. Anything else yields `Ok(None)` so the caller
/// can abort the flow without treating it as an error.
///
/// # Arguments
/// * `templates` - Template names, in menu order
///
/// # Returns
/// * `Ok(Some(name))` - The selected template
/// * `Ok(None)` - If the selection is not a valid index
/// * `Err` - If reading stdin fails
pub fn select_template<'a>(templates: &[&'a str]) -> Result<Option<&'a str>> {
    display_templates(templates);

    print!("\nEnter template number: ");
    io::stdout().flush()?;

    read_selection(io::stdin().lock(), templates)
}

fn read_selection<'a, R: BufRead>(mut input: R, templates: &[&'a str]) -> Result<Option<&'a str>> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_selection(&line, templates))
}

fn parse_selection<'a>(input: &str, templates: &[&'a str]) -> Option<&'a str> {
    let index = input.trim().parse::<usize>().ok()?;
    if index == 0 {
        return None;
    }
    templates.get(index - 1).copied()
}
