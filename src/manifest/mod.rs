//! Manifest detection and reading
//!
//! This module provides functionality to:
//! - Validate that a directory is a Go module
//! - Read the dependencies declared in its go.mod

mod detector;
mod go_mod;

pub use detector::resolve_project_dir;
pub use go_mod::{parse_go_mod, GoModReader};

use crate::domain::Dependency;
use crate::error::ManifestError;
use std::path::Path;

/// Name of the Go module manifest
pub const MANIFEST_FILENAME: &str = "go.mod";

/// Trait for reading the dependency records declared by a project
pub trait ManifestReader {
    /// Read every declared dependency in `dir`, in canonical order
    fn read(&self, dir: &Path) -> Result<Vec<Dependency>, ManifestError>;
}
