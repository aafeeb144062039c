//! Dependency update execution
//!
//! This module provides:
//! - Filtering and canonical ordering of dependency lists
//! - An updater trait for single-dependency updates and the tidy step
//! - A Go toolchain implementation (`go get -u`, `go mod tidy`)

mod filter;

pub use filter::{canonical_order, count_indirect, filter_dependencies};

use crate::error::CommandError;
use crate::runner::CommandRunner;

/// Trait for applying updates to the project
pub trait Updater {
    /// Move one dependency to its newest version
    fn update(&self, path: &str) -> Result<(), CommandError>;

    /// Clean up the module graph after updates
    fn tidy(&self) -> Result<(), CommandError>;
}

/// Updater driving the `go` command
pub struct GoUpdater<'a> {
    runner: &'a dyn CommandRunner,
    /// Stream `go` output to the terminal
    verbose: bool,
}

impl<'a> GoUpdater<'a> {
    pub fn new(runner: &'a dyn CommandRunner, verbose: bool) -> Self {
        Self { runner, verbose }
    }
}

impl Updater for GoUpdater<'_> {
    fn update(&self, path: &str) -> Result<(), CommandError> {
        self.runner.run("go", &["get", "-u", path], self.verbose)
    }

    fn tidy(&self) -> Result<(), CommandError> {
        self.runner.run("go", &["mod", "tidy"], self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock runner recording invocations
    #[derive(Default)]
    struct MockRunner {
        calls: RefCell<Vec<(String, bool)>>,
        fail: bool,
    }

    impl CommandRunner for MockRunner {
        fn run(&self, program: &str, args: &[&str], verbose: bool) -> Result<(), CommandError> {
            let line = format!("{} {}", program, args.join(" "));
            self.calls.borrow_mut().push((line.clone(), verbose));
            if self.fail {
                return Err(CommandError::failed(line, "exit status: 1", "boom"));
            }
            Ok(())
        }

        fn output(&self, _program: &str, _args: &[&str]) -> Result<String, CommandError> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_update_runs_go_get() {
        let runner = MockRunner::default();
        let updater = GoUpdater::new(&runner, false);

        updater.update("github.com/gin-gonic/gin").unwrap();

        assert_eq!(
            *runner.calls.borrow(),
            vec![("go get -u github.com/gin-gonic/gin".to_string(), false)]
        );
    }

    #[test]
    fn test_tidy_runs_go_mod_tidy_verbose() {
        let runner = MockRunner::default();
        let updater = GoUpdater::new(&runner, true);

        updater.tidy().unwrap();

        assert_eq!(
            *runner.calls.borrow(),
            vec![("go mod tidy".to_string(), true)]
        );
    }

    #[test]
    fn test_update_failure_propagates() {
        let runner = MockRunner {
            fail: true,
            ..Default::default()
        };
        let err = GoUpdater::new(&runner, false).update("a/a").unwrap_err();
        assert!(err.to_string().contains("go get -u a/a"));
        assert!(err.to_string().contains("boom"));
    }
}
