//! goup - Go module dependency updater library
//!
//! This library provides the core functionality for updating the
//! dependencies declared in a Go module's go.mod:
//! - Reading requirements, including `// indirect` markers
//! - Discovering available updates through `go list`
//! - Selecting dependencies by position, range or pattern
//! - Applying updates with `go get -u` and cleaning up with `go mod tidy`

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod resolver;
pub mod runner;
pub mod select;
pub mod update;

#[cfg(test)]
mod testing;
