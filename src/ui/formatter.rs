//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! `format_*` functions build the text; `display_*` functions print it.

use console::style;

use crate::domain::ModuleSet;
use crate::index::ModuleSetIndex;
use crate::versioning::ModuleVersioning;
use crate::warning::WalkWarning;

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

/// Display a walk warning to the user.
pub fn display_walk_warning(warning: &WalkWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One line describing a module set: name, version, stability and size.
pub fn format_module_set(name: &str, module_set: &ModuleSet) -> String {
    let stability = if module_set.is_stable() {
        "stable"
    } else {
        "unstable"
    };
    format!(
        "{} {} ({}, {} modules)",
        name,
        module_set.version,
        stability,
        module_set.modules.len()
    )
}

/// Display configured module sets in declaration order.
pub fn display_module_sets(module_sets: &ModuleSetIndex) {
    println!("{}", style("Module sets:").bold());
    for (name, module_set) in module_sets {
        println!("  - {}", format_module_set(name, module_set));
    }
}

/// Display the full tags computed for a module set.
///
/// # Arguments
/// * `set_name` - Name of the module set
/// * `module_set` - The set, for its version
/// * `tags` - Full tags in module order
pub fn display_set_tags(set_name: &str, module_set: &ModuleSet, tags: &[String]) {
    println!(
        "\n{}",
        style(format!(
            "Tags for module set '{}' at {}:",
            set_name, module_set.version
        ))
        .bold()
    );
    for tag in tags {
        println!("  {}", style(tag).green());
    }
}

/// Display the module info and module path indices for diagnostics.
pub fn display_indices(versioning: &ModuleVersioning) {
    println!("\n{}", style("Module info:").bold());
    for (module, info) in versioning.module_info() {
        println!("  {} -> {} {}", module, info.set_name, info.version);
    }

    println!("\n{}", style("Module paths:").bold());
    for (module, path) in versioning.module_paths() {
        let relative = path.strip_prefix(versioning.repo_root()).unwrap_or(path.as_path());
        println!("  {} -> {}", module, relative.display());
    }
}
