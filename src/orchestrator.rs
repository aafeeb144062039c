//! Update orchestrator for coordinating the entire update workflow
//!
//! This module provides:
//! - Workflow coordination: read → resolve → filter → select → update → tidy
//! - Dry-run and list mode support
//! - Interactive confirmation and selection
//! - Error handling with partial continuation

use crate::config::Config;
use crate::domain::{Dependency, RunOutcome, TidyFailurePolicy, TidyStatus, UpdateOutcome};
use crate::error::AppError;
use crate::manifest::ManifestReader;
use crate::output::Console;
use crate::progress::Progress;
use crate::resolver::VersionResolver;
use crate::select::{SelectionResult, Selector};
use crate::update::{canonical_order, count_indirect, filter_dependencies, Updater};
use std::path::{Path, PathBuf};

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator<'a> {
    /// Effective configuration
    config: &'a Config,
    /// Validated project directory
    dir: PathBuf,
    console: &'a dyn Console,
    reader: &'a dyn ManifestReader,
    resolver: &'a dyn VersionResolver,
    selector: &'a dyn Selector,
    updater: &'a dyn Updater,
}

impl<'a> Orchestrator<'a> {
    /// Create a new orchestrator from its collaborators
    pub fn new(
        config: &'a Config,
        dir: impl Into<PathBuf>,
        console: &'a dyn Console,
        reader: &'a dyn ManifestReader,
        resolver: &'a dyn VersionResolver,
        selector: &'a dyn Selector,
        updater: &'a dyn Updater,
    ) -> Self {
        Self {
            config,
            dir: dir.into(),
            console,
            reader,
            resolver,
            selector,
            updater,
        }
    }

    /// Run the whole workflow
    ///
    /// Manifest, resolution and input errors abort the run before any update.
    /// Per-dependency and tidy failures are part of the returned outcome.
    pub fn run(&self) -> Result<RunOutcome, AppError> {
        self.console.header();
        self.report_modes();

        if self.config.path != Path::new(".") {
            self.console
                .info(&format!("Working in directory: {}", self.dir.display()));
        }

        let declared = self.reader.read(&self.dir)?;
        self.console
            .debug(&format!("Found {} dependencies in go.mod", declared.len()));

        let updatable = self.resolve(&declared)?;
        if updatable.is_empty() {
            self.console.info("All dependencies are up to date!");
            return Ok(RunOutcome::NothingToDo);
        }

        let include_indirect = self.config.should_include_indirect();
        let filtered = canonical_order(filter_dependencies(&updatable, include_indirect));
        if filtered.is_empty() {
            self.console.info("All direct dependencies are up to date!");
            self.console.info(&format!(
                "({} indirect dependencies have updates available, use --all to include them)",
                count_indirect(&updatable)
            ));
            return Ok(RunOutcome::NothingToDo);
        }

        self.console.debug("Selecting dependencies to update...");
        let selected = match self.select(filtered)? {
            Some(selected) => selected,
            None => {
                self.console.info("Selection cancelled");
                return Ok(RunOutcome::Cancelled);
            }
        };
        self.console
            .debug(&format!("Selected {} dependencies for update", selected.len()));

        if selected.is_empty() {
            self.console.info("No dependencies selected for update");
            return Ok(RunOutcome::NothingToDo);
        }

        if self.config.is_dry_run() {
            self.console
                .warning("Dry run mode - no actual updates will be performed");
            if self.config.select {
                self.console.print_dependencies(
                    &selected,
                    &format!("Would update {} selected dependencies:", selected.len()),
                );
            }
            return Ok(RunOutcome::DryRun { selected });
        }

        if self.config.interactive && !self.config.select {
            let proceed = self
                .console
                .confirm("Do you want to proceed with the update?")
                .map_err(AppError::Confirmation)?;
            if !proceed {
                self.console.info("Update cancelled");
                return Ok(RunOutcome::Cancelled);
            }
        }

        self.console.info("Updating dependencies...");
        let outcome = self.update_all(&selected);

        self.console.print_update_result(
            outcome.updated.len(),
            outcome.total(),
            !outcome.is_success(),
        );
        for failure in &outcome.failed {
            self.console.error(&format!(
                "Failed to update {}: {}",
                failure.dependency.path, failure.reason
            ));
        }

        let tidy = self.run_tidy();
        if tidy.is_success() || self.config.tidy_failure == TidyFailurePolicy::Warn {
            self.console.success("Dependency update completed!");
        }

        Ok(RunOutcome::Completed { outcome, tidy })
    }

    /// Update each dependency in order, continuing past failures
    pub fn update_all(&self, deps: &[Dependency]) -> UpdateOutcome {
        let mut outcome = UpdateOutcome::new();
        let total = deps.len();

        for (i, dep) in deps.iter().enumerate() {
            self.console
                .progress(&format!("Updating {}... ({}/{})", dep.path, i + 1, total));

            match self.updater.update(&dep.path) {
                Ok(()) => {
                    self.console.success(&format!("✓ Updated {}", dep.path));
                    outcome.add_updated(dep.clone());
                }
                Err(e) => {
                    self.console
                        .debug(&format!("Update of {} failed: {}", dep.path, e));
                    outcome.add_failed(dep.clone(), e.to_string());
                }
            }
        }

        outcome
    }

    /// Run `go mod tidy`, reporting failure according to the configured policy
    pub fn run_tidy(&self) -> TidyStatus {
        self.console.info("Running go mod tidy...");

        let mut progress = Progress::new(self.config.show_progress());
        progress.spinner("Running go mod tidy...");
        let result = self.updater.tidy();
        progress.finish_and_clear();

        match result {
            Ok(()) => {
                self.console.success("✓ go mod tidy completed");
                TidyStatus::Succeeded
            }
            Err(e) => {
                let message = format!("go mod tidy failed: {}", e);
                match self.config.tidy_failure {
                    TidyFailurePolicy::Fail => self.console.error(&message),
                    TidyFailurePolicy::Warn => self.console.warning(&message),
                }
                TidyStatus::Failed(e.to_string())
            }
        }
    }

    fn report_modes(&self) {
        if self.config.is_dry_run() {
            self.console.debug("Dry run mode enabled");
        }
        if self.config.select {
            self.console.debug("Selective mode enabled");
        }
        if self.config.interactive {
            self.console.debug("Interactive mode enabled");
        }
        if self.config.all {
            self.console.debug("All dependencies mode enabled");
        }
    }

    fn resolve(&self, declared: &[Dependency]) -> Result<Vec<Dependency>, AppError> {
        let mut progress = Progress::new(self.config.show_progress());
        progress.spinner("Checking for updates...");
        let result = self.resolver.resolve(declared);
        progress.finish_and_clear();
        Ok(result?)
    }

    /// Choose the dependencies to update; `None` means the user cancelled
    fn select(&self, filtered: Vec<Dependency>) -> Result<Option<Vec<Dependency>>, AppError> {
        let include_indirect = self.config.should_include_indirect();

        if !self.config.select {
            let kind = if include_indirect { "all" } else { "direct" };
            self.console.print_dependencies(
                &filtered,
                &format!(
                    "Found {} {} dependencies with available updates:",
                    filtered.len(),
                    kind
                ),
            );
            return Ok(Some(filtered));
        }

        match self.selector.select(&filtered, include_indirect) {
            SelectionResult::Selected(selected) => Ok(Some(selected)),
            SelectionResult::Cancelled => Ok(None),
            SelectionResult::Failed(e) => Err(AppError::Selection(e)),
        }
    }
}
