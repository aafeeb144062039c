//! Dependency record

use std::fmt;

/// A module requirement declared in go.mod
///
/// Records are built once per invocation and never mutated; filtering and
/// selection produce new lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Module path (e.g., "github.com/gin-gonic/gin")
    pub path: String,
    /// Current version (e.g., "v1.9.1")
    pub version: String,
    /// Available version, present only when an update is known
    pub new_version: Option<String>,
    /// Whether the module is required transitively (`// indirect`)
    pub indirect: bool,
}

impl Dependency {
    /// Creates a new dependency without update information
    pub fn new(path: impl Into<String>, version: impl Into<String>, indirect: bool) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            new_version: None,
            indirect,
        }
    }

    /// Creates a directly required dependency
    pub fn direct(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(path, version, false)
    }

    /// Creates an indirectly required dependency
    pub fn indirect(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(path, version, true)
    }

    /// Sets the available version (builder pattern)
    pub fn with_new_version(mut self, version: impl Into<String>) -> Self {
        self.new_version = Some(version.into());
        self
    }

    /// Returns true if a newer version distinct from the current one is known
    pub fn has_update(&self) -> bool {
        self.new_version
            .as_deref()
            .is_some_and(|v| !v.is_empty() && v != self.version)
    }

    /// Returns "direct" or "indirect"
    pub fn kind_label(&self) -> &'static str {
        if self.indirect {
            "indirect"
        } else {
            "direct"
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.indirect { " (indirect)" } else { "" };
        write!(f, "{}@{}{}", self.path, self.version, suffix)
    }
}
