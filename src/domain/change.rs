//! Semantic version change classification

use semver::Version;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes, or a newer pseudo-version)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two Go module versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        match (parse_go_version(old), parse_go_version(new)) {
            (Some(old), Some(new)) => {
                if old.major != new.major {
                    VersionChangeType::Major
                } else if old.minor != new.minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Parse a Go module version (`v1.2.3`, `v0.0.0-2021...-abc`, `v2.0.0+incompatible`)
fn parse_go_version(version: &str) -> Option<Version> {
    let stripped = version.trim().strip_prefix('v')?;
    Version::parse(stripped).ok()
}
