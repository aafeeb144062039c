//! Console presentation layer
//!
//! This module provides:
//! - The `Console` trait used by the orchestrator and the interactive selector
//! - A terminal implementation with colored messages and a dependency table
//! - Table rendering shared by colored and plain output

mod console;
mod table;

pub use console::TerminalConsole;
pub use table::{render_dependency_table, truncate};

use crate::domain::Dependency;
use std::io;

/// Synchronous user interaction surface
///
/// Every call blocks until the output is written or a line of input is read.
pub trait Console {
    /// Display the application header
    fn header(&self);

    /// Display an informational message
    fn info(&self, message: &str);

    /// Display a success message
    fn success(&self, message: &str);

    /// Display a warning message
    fn warning(&self, message: &str);

    /// Display an error message
    fn error(&self, message: &str);

    /// Display a debug message (only when verbose output is enabled)
    fn debug(&self, message: &str);

    /// Display a progress message
    fn progress(&self, message: &str);

    /// Read one line of input after showing a prompt
    fn read_input(&self, prompt: &str) -> io::Result<String>;

    /// Ask a yes/no question; anything but "y"/"yes" is a no
    fn confirm(&self, message: &str) -> io::Result<bool>;

    /// Display a numbered table of dependencies with an optional title
    fn print_dependencies(&self, deps: &[Dependency], title: &str);

    /// Display the selection syntax help
    fn print_selection_help(&self);

    /// Display the final result of an update batch
    fn print_update_result(&self, updated: usize, total: usize, has_errors: bool);
}

/// Interpret a yes/no answer
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
