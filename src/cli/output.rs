use colored::Colorize;
use std::fmt;

/// Print an informational message.
pub fn info(message: impl fmt::Display) {
    println!("{} {}", "i".blue().bold(), message);
}

/// Print a success message.
pub fn success(message: impl fmt::Display) {
    println!("{} {}", "+".green().bold(), message);
}

/// Print a warning message.
pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "!".yellow().bold(), message);
}

/// Print an error message.
pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "x".red().bold(), message);
}

/// Print a step header, e.g. `Step 2 / 5 - Kuni`.
pub fn step_header(index: u8, total: u8, label: impl fmt::Display) {
    println!();
    println!("{}", format!("Step {index} / {total} — {label}").bold());
}
