//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or parsing go.mod (fatal)
//! - ResolutionError: Issues querying the toolchain for available updates (fatal)
//! - CommandError: External command failures (per-dependency, non-fatal)
//! - SelectionError: Malformed selection expressions (recoverable)
//! - ConfigError: Issues with CLI or project configuration
//! - IoError: Project directory resolution failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Update resolution related errors
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Reading user input failed during selection
    #[error("dependency selection failed: {0}")]
    Selection(#[source] std::io::Error),

    /// Reading user input failed during confirmation
    #[error("failed to read confirmation: {0}")]
    Confirmation(#[source] std::io::Error),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// go.mod parsing error
    #[error("failed to parse {path}:{line}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Errors related to querying available updates
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The resolution command could not be run or exited non-zero
    #[error("failed to check for updates: {0}")]
    CommandFailed(#[from] CommandError),
}

/// Errors raised by external commands
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program exited unsuccessfully
    #[error("'{command}' exited with {status}{}", format_output(.output))]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}

fn format_output(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\noutput:\n{}", trimmed)
    }
}

/// Errors produced while interpreting a selection expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A range clause does not consist of two integers
    #[error("invalid range format: {clause}")]
    InvalidRange { clause: String },

    /// A range clause falls outside the list
    #[error("range {start}-{end} is out of bounds (1-{len})")]
    RangeOutOfBounds { start: i64, end: i64, len: usize },

    /// A positional reference falls outside the list
    #[error("number {index} is out of range (1-{len})")]
    IndexOutOfRange { index: i64, len: usize },

    /// A pattern clause matched nothing
    #[error("no dependencies match pattern: {pattern}")]
    NoPatternMatch { pattern: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid tidy failure policy
    #[error("invalid tidy failure policy '{value}': expected 'fail' or 'warn'")]
    InvalidTidyPolicy { value: String },

    /// Project configuration file could not be read or parsed
    #[error("invalid configuration file {path}: {message}")]
    InvalidFile { path: PathBuf, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory '{path}' does not exist")]
    DirectoryNotFound { path: PathBuf },

    /// Path exists but is not a directory
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// Directory has no go.mod
    #[error("no go.mod file found in directory '{path}' - not a Go module")]
    NoManifest { path: PathBuf },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        ManifestError::ParseError {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

impl CommandError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Failed error
    pub fn failed(
        command: impl Into<String>,
        status: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        CommandError::Failed {
            command: command.into(),
            status: status.into(),
            output: output.into(),
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new NotADirectory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        IoError::NotADirectory { path: path.into() }
    }

    /// Creates a new NoManifest error
    pub fn no_manifest(path: impl Into<PathBuf>) -> Self {
        IoError::NoManifest { path: path.into() }
    }

    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}
