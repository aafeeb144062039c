//! Update batch and run outcome types

use super::Dependency;
use std::fmt;
use std::str::FromStr;

/// A dependency that could not be updated, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFailure {
    /// The dependency that failed
    pub dependency: Dependency,
    /// Human-readable failure reason
    pub reason: String,
}

/// Aggregate result of updating a batch of dependencies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Dependencies updated successfully, in attempt order
    pub updated: Vec<Dependency>,
    /// Dependencies that failed, in attempt order
    pub failed: Vec<UpdateFailure>,
}

impl UpdateOutcome {
    /// Creates an empty outcome
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful update
    pub fn add_updated(&mut self, dependency: Dependency) {
        self.updated.push(dependency);
    }

    /// Records a failed update
    pub fn add_failed(&mut self, dependency: Dependency, reason: impl Into<String>) {
        self.failed.push(UpdateFailure {
            dependency,
            reason: reason.into(),
        });
    }

    /// True iff no update failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of attempted updates
    pub fn total(&self) -> usize {
        self.updated.len() + self.failed.len()
    }
}

/// Result of the post-update tidy step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TidyStatus {
    Succeeded,
    Failed(String),
}

impl TidyStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, TidyStatus::Succeeded)
    }
}

/// How a failed tidy step affects the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TidyFailurePolicy {
    /// Report the failure and exit non-zero
    #[default]
    Fail,
    /// Report the failure as a warning only
    Warn,
}

impl FromStr for TidyFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" | "error" => Ok(TidyFailurePolicy::Fail),
            "warn" | "warning" => Ok(TidyFailurePolicy::Warn),
            other => Err(format!(
                "invalid tidy failure policy '{}': expected 'fail' or 'warn'",
                other
            )),
        }
    }
}

impl fmt::Display for TidyFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TidyFailurePolicy::Fail => write!(f, "fail"),
            TidyFailurePolicy::Warn => write!(f, "warn"),
        }
    }
}

/// Terminal outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No dependency had an update to apply
    NothingToDo,
    /// The user cancelled selection or declined confirmation
    Cancelled,
    /// A selection was computed but nothing was executed
    DryRun { selected: Vec<Dependency> },
    /// The update batch ran
    Completed {
        outcome: UpdateOutcome,
        tidy: TidyStatus,
    },
}

impl RunOutcome {
    /// Map the outcome to a process exit code
    ///
    /// - 0: success, nothing to do, cancelled, or dry-run
    /// - 1: tidy failed under `TidyFailurePolicy::Fail`
    /// - 2: partial success (some dependencies failed to update)
    pub fn exit_code(&self, policy: TidyFailurePolicy) -> u8 {
        match self {
            RunOutcome::Completed { outcome, tidy } => {
                if !tidy.is_success() && policy == TidyFailurePolicy::Fail {
                    1
                } else if !outcome.is_success() {
                    2
                } else {
                    0
                }
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(failed: bool, tidy: TidyStatus) -> RunOutcome {
        let mut outcome = UpdateOutcome::new();
        outcome.add_updated(Dependency::direct("a/a", "v1.0.0"));
        if failed {
            outcome.add_failed(Dependency::direct("b/b", "v1.0.0"), "boom");
        }
        RunOutcome::Completed { outcome, tidy }
    }

    #[test]
    fn test_update_outcome_success() {
        let mut outcome = UpdateOutcome::new();
        assert!(outcome.is_success());
        outcome.add_updated(Dependency::direct("a/a", "v1.0.0"));
        assert!(outcome.is_success());
        assert_eq!(outcome.total(), 1);
    }

    #[test]
    fn test_update_outcome_failure() {
        let mut outcome = UpdateOutcome::new();
        outcome.add_failed(Dependency::direct("a/a", "v1.0.0"), "network");
        assert!(!outcome.is_success());
        assert_eq!(outcome.failed[0].reason, "network");
        assert_eq!(outcome.failed[0].dependency.path, "a/a");
    }

    #[test]
    fn test_tidy_policy_from_str() {
        assert_eq!("fail".parse::<TidyFailurePolicy>(), Ok(TidyFailurePolicy::Fail));
        assert_eq!("WARN".parse::<TidyFailurePolicy>(), Ok(TidyFailurePolicy::Warn));
        assert_eq!(
            "warning".parse::<TidyFailurePolicy>(),
            Ok(TidyFailurePolicy::Warn)
        );
        assert!("ignore".parse::<TidyFailurePolicy>().is_err());
    }

    #[test]
    fn test_tidy_policy_default_is_fail() {
        assert_eq!(TidyFailurePolicy::default(), TidyFailurePolicy::Fail);
    }

    #[test]
    fn test_exit_code_non_batch_outcomes() {
        let policy = TidyFailurePolicy::Fail;
        assert_eq!(RunOutcome::NothingToDo.exit_code(policy), 0);
        assert_eq!(RunOutcome::Cancelled.exit_code(policy), 0);
        let dry = RunOutcome::DryRun {
            selected: Vec::new(),
        };
        assert_eq!(dry.exit_code(policy), 0);
    }

    #[test]
    fn test_exit_code_completed() {
        let ok = completed(false, TidyStatus::Succeeded);
        assert_eq!(ok.exit_code(TidyFailurePolicy::Fail), 0);

        let partial = completed(true, TidyStatus::Succeeded);
        assert_eq!(partial.exit_code(TidyFailurePolicy::Fail), 2);
    }

    #[test]
    fn test_exit_code_tidy_failure_policy() {
        let tidy_failed = completed(false, TidyStatus::Failed("boom".to_string()));
        assert_eq!(tidy_failed.exit_code(TidyFailurePolicy::Fail), 1);
        assert_eq!(tidy_failed.exit_code(TidyFailurePolicy::Warn), 0);

        let both = completed(true, TidyStatus::Failed("boom".to_string()));
        assert_eq!(both.exit_code(TidyFailurePolicy::Warn), 2);
    }
}
