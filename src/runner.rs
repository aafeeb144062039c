//! External command execution
//!
//! This module provides:
//! - A trait for running programs in the project directory
//! - A system implementation backed by `std::process::Command`

use crate::error::CommandError;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Trait for running external programs
pub trait CommandRunner {
    /// Run a program for its side effects
    ///
    /// In verbose mode the program's output goes straight to the terminal,
    /// otherwise it is captured and attached to the error on failure.
    fn run(&self, program: &str, args: &[&str], verbose: bool) -> Result<(), CommandError>;

    /// Run a program and return its standard output
    fn output(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// Runner that executes real commands in a fixed working directory
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    working_dir: PathBuf,
}

impl SystemCommandRunner {
    /// Create a runner for the given directory
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    fn command(&self, program: &str, args: &[&str]) -> Command {
        let mut command = Command::new(program);
        command.args(args).current_dir(&self.working_dir);
        command
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], verbose: bool) -> Result<(), CommandError> {
        let display = command_line(program, args);

        if verbose {
            let status = self
                .command(program, args)
                .stdin(Stdio::null())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| CommandError::spawn(&display, e))?;
            if !status.success() {
                return Err(CommandError::failed(display, status.to_string(), ""));
            }
            return Ok(());
        }

        let output = self
            .command(program, args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CommandError::spawn(&display, e))?;
        check_output(display, output).map(|_| ())
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let display = command_line(program, args);
        let output = self
            .command(program, args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CommandError::spawn(&display, e))?;
        check_output(display, output)
    }
}

/// Convert a finished process into its stdout or a `Failed` error
fn check_output(display: String, output: Output) -> Result<String, CommandError> {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if output.status.success() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{}{}", stdout, stderr);
    Err(CommandError::failed(
        display,
        output.status.to_string(),
        combined,
    ))
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        assert_eq!(command_line("go", &["mod", "tidy"]), "go mod tidy");
        assert_eq!(command_line("go", &[]), "go");
    }

    #[test]
    fn test_spawn_error_for_missing_program() {
        let runner = SystemCommandRunner::new(".");
        let err = runner
            .output("goup-definitely-missing-program", &["--flag"])
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
        assert!(err
            .to_string()
            .contains("goup-definitely-missing-program --flag"));
    }

    #[test]
    fn test_run_spawn_error_for_missing_program() {
        let runner = SystemCommandRunner::new(".");
        let err = runner
            .run("goup-definitely-missing-program", &[], false)
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_captures_stdout() {
        let runner = SystemCommandRunner::new(".");
        let out = runner.output("echo", &["hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_status() {
        let runner = SystemCommandRunner::new(".");
        let err = runner.run("false", &[], false).unwrap_err();
        assert!(matches!(err, CommandError::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_output_attached() {
        let runner = SystemCommandRunner::new(".");
        let err = runner
            .run("sh", &["-c", "echo broken >&2; exit 3"], false)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sh -c"));
        assert!(msg.contains("broken"));
    }
}
