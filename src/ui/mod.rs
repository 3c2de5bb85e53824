//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use anyhow::Result;
use console::style;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_indices, display_module_sets, display_set_tags, display_status,
    display_success, display_walk_warning,
};

/// Prompts user to select a module set from the configured ones.
///
/// If only one set is configured, returns it directly without prompting.
/// Otherwise displays a numbered list and accepts a 1-based index.
/// Pressing Enter selects the first set.
///
/// # Arguments
/// * `available_sets` - Module set names in declaration order
///
/// # Returns
/// * `Ok(String)` - The selected set name
/// * `Err` - If the selection is invalid or no sets are configured
pub fn select_module_set(available_sets: &[String]) -> Result<String> {
    match available_sets {
        [] => return Err(anyhow::anyhow!("No module sets configured")),
        [only] => return Ok(only.clone()),
        _ => {}
    }

    println!("\n{}", style("Configured module sets:").bold());
    for (i, name) in available_sets.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    print!(
        "\nSelect a module set (1-{}) [default: 1]: ",
        available_sets.len()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    parse_selection(&input, available_sets.len())
        .map(|index| available_sets[index].clone())
        .ok_or_else(|| anyhow::anyhow!("Invalid selection"))
}

/// Converts 1-based user input into a 0-based index; empty input selects the first entry.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let selection = input.trim();
    let index = if selection.is_empty() {
        1
    } else {
        selection.parse::<usize>().ok()?
    };

    (index > 0 && index <= count).then(|| index - 1)
}
