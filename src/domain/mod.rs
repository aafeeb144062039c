//! Core domain models for goup
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records read from go.mod
//! - Version change classification
//! - Update batch outcomes and terminal run outcomes

mod change;
mod dependency;
mod outcome;

pub use change::VersionChangeType;
pub use dependency::Dependency;
pub use outcome::{RunOutcome, TidyFailurePolicy, TidyStatus, UpdateFailure, UpdateOutcome};
