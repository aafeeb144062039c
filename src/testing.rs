//! Fake collaborators shared by unit tests

use crate::domain::Dependency;
use crate::error::{CommandError, ManifestError, ResolutionError};
use crate::manifest::ManifestReader;
use crate::output::Console;
use crate::resolver::VersionResolver;
use crate::update::Updater;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::Path;

/// Console that replays scripted answers and records everything shown
#[derive(Default)]
pub struct FakeConsole {
    inputs: RefCell<VecDeque<io::Result<String>>>,
    confirms: RefCell<VecDeque<io::Result<bool>>>,
    pub log: RefCell<Vec<String>>,
}

impl FakeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(self, inputs: &[&str]) -> Self {
        self.inputs
            .borrow_mut()
            .extend(inputs.iter().map(|s| Ok(s.to_string())));
        self
    }

    pub fn with_input_error(self) -> Self {
        self.inputs
            .borrow_mut()
            .push_back(Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed")));
        self
    }

    pub fn with_confirms(self, answers: &[bool]) -> Self {
        self.confirms
            .borrow_mut()
            .extend(answers.iter().map(|a| Ok(*a)));
        self
    }

    pub fn entries(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.log.borrow().iter().any(|l| l.contains(needle))
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|l| l.starts_with(prefix))
            .count()
    }

    fn record(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

impl Console for FakeConsole {
    fn header(&self) {
        self.record("header".to_string());
    }

    fn info(&self, message: &str) {
        self.record(format!("info: {}", message));
    }

    fn success(&self, message: &str) {
        self.record(format!("success: {}", message));
    }

    fn warning(&self, message: &str) {
        self.record(format!("warning: {}", message));
    }

    fn error(&self, message: &str) {
        self.record(format!("error: {}", message));
    }

    fn debug(&self, message: &str) {
        self.record(format!("debug: {}", message));
    }

    fn progress(&self, message: &str) {
        self.record(format!("progress: {}", message));
    }

    fn read_input(&self, prompt: &str) -> io::Result<String> {
        self.record(format!("prompt: {}", prompt));
        self.inputs.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted input left",
            ))
        })
    }

    fn confirm(&self, message: &str) -> io::Result<bool> {
        self.record(format!("confirm: {}", message));
        self.confirms.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted answer left",
            ))
        })
    }

    fn print_dependencies(&self, deps: &[Dependency], title: &str) {
        let paths: Vec<&str> = deps.iter().map(|d| d.path.as_str()).collect();
        self.record(format!("table: {} [{}]", title, paths.join(", ")));
    }

    fn print_selection_help(&self) {
        self.record("help".to_string());
    }

    fn print_update_result(&self, updated: usize, total: usize, has_errors: bool) {
        self.record(format!("result: {}/{} errors={}", updated, total, has_errors));
    }
}

/// Manifest reader returning a fixed list or error
pub struct FakeReader {
    pub deps: Vec<Dependency>,
    pub fail: bool,
}

impl FakeReader {
    pub fn new(deps: Vec<Dependency>) -> Self {
        Self { deps, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            deps: Vec::new(),
            fail: true,
        }
    }
}

impl ManifestReader for FakeReader {
    fn read(&self, dir: &Path) -> Result<Vec<Dependency>, ManifestError> {
        if self.fail {
            return Err(ManifestError::not_found(dir.join("go.mod")));
        }
        Ok(self.deps.clone())
    }
}

/// Resolver returning a fixed list of updatable dependencies
pub struct FakeResolver {
    pub updatable: Vec<Dependency>,
    pub fail: bool,
}

impl FakeResolver {
    pub fn new(updatable: Vec<Dependency>) -> Self {
        Self {
            updatable,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            updatable: Vec::new(),
            fail: true,
        }
    }
}

impl VersionResolver for FakeResolver {
    fn resolve(&self, _deps: &[Dependency]) -> Result<Vec<Dependency>, ResolutionError> {
        if self.fail {
            return Err(CommandError::failed("go list -u -m -json all", "exit status: 1", "offline").into());
        }
        Ok(self.updatable.clone())
    }
}

/// Updater that records every call and fails for configured paths
#[derive(Default)]
pub struct FakeUpdater {
    failing: HashSet<String>,
    tidy_fails: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn with_failing_tidy(mut self) -> Self {
        self.tidy_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Updater for FakeUpdater {
    fn update(&self, path: &str) -> Result<(), CommandError> {
        self.calls.borrow_mut().push(format!("update {}", path));
        if self.failing.contains(path) {
            return Err(CommandError::failed(
                format!("go get -u {}", path),
                "exit status: 1",
                "",
            ));
        }
        Ok(())
    }

    fn tidy(&self) -> Result<(), CommandError> {
        self.calls.borrow_mut().push("tidy".to_string());
        if self.tidy_fails {
            return Err(CommandError::failed("go mod tidy", "exit status: 1", ""));
        }
        Ok(())
    }
}
