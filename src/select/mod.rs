//! Dependency selection
//!
//! This module provides:
//! - A parser for selection expressions (indices, ranges, patterns, `all`)
//! - An interactive selector that prompts until the user accepts or cancels

mod flow;
mod parser;

pub use flow::InteractiveSelector;
pub use parser::{matches_pattern, parse_selection, Clause};

use crate::domain::Dependency;

/// Result of an interactive selection
#[derive(Debug)]
pub enum SelectionResult {
    /// The user accepted this (possibly empty) selection
    Selected(Vec<Dependency>),
    /// The user aborted without an error
    Cancelled,
    /// Reading input failed
    Failed(std::io::Error),
}

/// Trait for choosing which dependencies to update
pub trait Selector {
    /// Let the user choose among the displayed, canonically ordered list
    fn select(&self, deps: &[Dependency], include_indirect: bool) -> SelectionResult;
}
