//! Terminal console with colored, labelled messages

use super::{is_affirmative, render_dependency_table, Console};
use crate::domain::Dependency;
use colored::{Color, Colorize};
use std::io::{self, BufRead, Write};

const TITLE: &str = "goup - Go Dependency Updater";

/// Console writing to stdout and reading from stdin
pub struct TerminalConsole {
    /// Whether to use colors
    color: bool,
    /// Whether debug messages are shown
    verbose: bool,
}

impl TerminalConsole {
    /// Create a new terminal console
    pub fn new(color: bool, verbose: bool) -> Self {
        Self { color, verbose }
    }

    fn message(&self, symbol: &str, label: &str, color: Color, message: &str) {
        println!("{}", self.format_message(symbol, label, color, message));
    }

    fn format_message(&self, symbol: &str, label: &str, color: Color, message: &str) -> String {
        if self.color {
            format!(
                " {} {} {}",
                symbol,
                format!("[{}]", label).color(color).bold(),
                message.bold()
            )
        } else {
            format!("[{}] {}", label, message)
        }
    }

    fn boxed(&self, message: &str, color: Color) {
        for line in self.format_boxed(message, color) {
            println!("{}", line);
        }
    }

    fn format_boxed(&self, message: &str, color: Color) -> Vec<String> {
        if !self.color {
            return vec![format!("=== {} ===", message)];
        }

        let width = message.chars().count() + 4;
        vec![
            format!("╭{}╮", "─".repeat(width)).cyan().to_string(),
            format!(
                "{}  {}  {}",
                "│".cyan(),
                message.color(color).bold(),
                "│".cyan()
            ),
            format!("╰{}╯", "─".repeat(width)).cyan().to_string(),
        ]
    }

    fn prompt(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.color {
            write!(out, "\n{} {}: ", "❯".cyan().bold(), text.bold())?;
        } else {
            write!(out, "\n{}: ", text)?;
        }
        out.flush()
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl Console for TerminalConsole {
    fn header(&self) {
        println!();
        self.boxed(TITLE, Color::Cyan);
        println!();
    }

    fn info(&self, message: &str) {
        self.message("💡", "INFO", Color::Blue, message);
    }

    fn success(&self, message: &str) {
        self.message("✨", "SUCCESS", Color::Green, message);
    }

    fn warning(&self, message: &str) {
        self.message("⚡", "WARNING", Color::Yellow, message);
    }

    fn error(&self, message: &str) {
        self.message("💥", "ERROR", Color::Red, message);
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            self.message("🔍", "DEBUG", Color::Magenta, message);
        }
    }

    fn progress(&self, message: &str) {
        self.message("🚀", "PROGRESS", Color::Blue, message);
    }

    fn read_input(&self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )),
        }
    }

    fn confirm(&self, message: &str) -> io::Result<bool> {
        self.prompt(&format!("{} (y/N)", message))?;
        Ok(self
            .read_line()?
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false))
    }

    fn print_dependencies(&self, deps: &[Dependency], title: &str) {
        if !title.is_empty() {
            self.info(title);
        }
        println!();
        let mut table = Vec::new();
        if render_dependency_table(deps, self.color, &mut table).is_ok() {
            print!("{}", String::from_utf8_lossy(&table));
        }
    }

    fn print_selection_help(&self) {
        self.info("Selection options:");
        println!("  • Enter numbers (e.g., 1,3,5 or 1-3 or 1,3-5)");
        println!("  • Enter 'all' to select all dependencies");
        println!("  • Enter package names or patterns (e.g., 'github.com/gin*')");
        println!("  • Press Enter without input to cancel");
        println!();
    }

    fn print_update_result(&self, updated: usize, total: usize, has_errors: bool) {
        println!();
        if has_errors {
            self.boxed(
                &format!("Partial Success: {}/{} updated", updated, total),
                Color::Yellow,
            );
        } else {
            self.boxed(
                &format!("Complete Success: All {} dependencies updated!", total),
                Color::Green,
            );
        }
        println!();
    }
}
