//! Interactive dependency selection
//!
//! The prompt loop is an explicit state machine:
//!
//! ```text
//! Prompting ──empty──▶ Cancelled
//!     │ ──io error──▶ Failed
//!     ▼
//! Parsing ──error / no match──▶ Prompting
//!     ▼
//! Confirming ──declined──▶ Prompting
//!     │ ──io error──▶ Failed
//!     ▼
//! Accepted
//! ```

use super::{parse_selection, SelectionResult, Selector};
use crate::domain::Dependency;
use crate::output::Console;

const PROMPT: &str = "Select dependencies to update";
const CONFIRM: &str = "Proceed with these selected dependencies?";

/// States of the selection loop
#[derive(Debug)]
enum SelectionState {
    Prompting,
    Parsing(String),
    Confirming(Vec<Dependency>),
    Accepted(Vec<Dependency>),
    Cancelled,
    Failed(std::io::Error),
}

/// Selector that prompts on the console until the user accepts or cancels
pub struct InteractiveSelector<'a> {
    console: &'a dyn Console,
}

impl<'a> InteractiveSelector<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }

    fn step(&self, state: SelectionState, deps: &[Dependency]) -> SelectionState {
        match state {
            SelectionState::Prompting => match self.console.read_input(PROMPT) {
                Err(e) => SelectionState::Failed(e),
                Ok(input) if input.trim().is_empty() => SelectionState::Cancelled,
                Ok(input) => SelectionState::Parsing(input),
            },
            SelectionState::Parsing(input) => match parse_selection(&input, deps) {
                Err(e) => {
                    self.console.error(&format!("Invalid selection: {}", e));
                    SelectionState::Prompting
                }
                Ok(selected) if selected.is_empty() => {
                    self.console.error("No dependencies matched your selection");
                    SelectionState::Prompting
                }
                Ok(selected) => SelectionState::Confirming(selected.into_iter().cloned().collect()),
            },
            SelectionState::Confirming(selected) => {
                self.console
                    .success(&format!("Selected {} dependencies:", selected.len()));
                self.console.print_dependencies(&selected, "");
                match self.console.confirm(CONFIRM) {
                    Err(e) => SelectionState::Failed(e),
                    Ok(true) => SelectionState::Accepted(selected),
                    Ok(false) => {
                        self.console.info("Let's try again...");
                        SelectionState::Prompting
                    }
                }
            }
            terminal => terminal,
        }
    }
}

impl Selector for InteractiveSelector<'_> {
    fn select(&self, deps: &[Dependency], include_indirect: bool) -> SelectionResult {
        if deps.is_empty() {
            return SelectionResult::Selected(Vec::new());
        }

        let kind = if include_indirect { "all" } else { "direct" };
        self.console.info(&format!(
            "Found {} {} dependencies with available updates:",
            deps.len(),
            kind
        ));
        self.console.print_dependencies(deps, "");
        self.console.print_selection_help();

        let mut state = SelectionState::Prompting;
        loop {
            state = match self.step(state, deps) {
                SelectionState::Accepted(selected) => return SelectionResult::Selected(selected),
                SelectionState::Cancelled => return SelectionResult::Cancelled,
                SelectionState::Failed(e) => return SelectionResult::Failed(e),
                next => next,
            };
        }
    }
}
