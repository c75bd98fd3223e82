//! Terminal UI helpers for the interactive menu.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;

/// Print the numbered main menu
pub fn print_menu() {
    println!();
    println!("{}", "--- Task Manager ---".bold());
    println!("1. Add Task");
    println!("2. View Tasks");
    println!("3. View Delayed Tasks");
    println!("4. Filter Tasks by Priority");
    println!("5. View Tasks Nearing Deadlines");
    println!("6. Delete Task by ID");
    println!("7. Update Task Status by ID");
    println!("8. Save and Exit");
}

/// Print a section heading above a task listing
pub fn print_heading(title: &str) {
    println!();
    println!("{}", format!("--- {title} ---").bold());
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
