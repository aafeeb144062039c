//! Update discovery through the Go toolchain
//!
//! `go list -u -m -json all` prints one JSON object per module, concatenated
//! without separators. Only modules that report an `Update` are of interest.

use crate::domain::Dependency;
use crate::error::ResolutionError;
use crate::runner::CommandRunner;
use crate::update::canonical_order;
use serde::Deserialize;
use std::collections::HashMap;

const GO_LIST_ARGS: &[&str] = &["list", "-u", "-m", "-json", "all"];

/// Trait for discovering available updates
pub trait VersionResolver {
    /// Return the records of `deps` that have a newer version, with
    /// `new_version` populated, in canonical order
    fn resolve(&self, deps: &[Dependency]) -> Result<Vec<Dependency>, ResolutionError>;
}

/// Module object printed by `go list -m -json`
#[derive(Debug, Deserialize)]
struct ListedModule {
    #[serde(rename = "Path")]
    path: String,
    #[serde(rename = "Version", default)]
    version: String,
    #[serde(rename = "Main", default)]
    main: bool,
    #[serde(rename = "Update")]
    update: Option<ModuleUpdate>,
}

/// Newer version reported for a module
#[derive(Debug, Deserialize)]
struct ModuleUpdate {
    #[serde(rename = "Version")]
    version: String,
}

/// Resolver that asks `go list` for available updates
pub struct GoListResolver<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GoListResolver<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl VersionResolver for GoListResolver<'_> {
    fn resolve(&self, deps: &[Dependency]) -> Result<Vec<Dependency>, ResolutionError> {
        let output = self.runner.output("go", GO_LIST_ARGS)?;
        let updates = parse_go_list_output(&output);
        Ok(apply_updates(deps, &updates))
    }
}

/// Map module path to newer version from a `go list -u -m -json` stream
///
/// The main module, modules without a version and objects that fail to
/// decode are skipped.
pub fn parse_go_list_output(output: &str) -> HashMap<String, String> {
    let mut updates = HashMap::new();

    for value in serde_json::Deserializer::from_str(output).into_iter::<serde_json::Value>() {
        // A syntax error leaves the stream unrecoverable
        let Ok(value) = value else {
            break;
        };
        let Ok(module) = serde_json::from_value::<ListedModule>(value) else {
            continue;
        };
        if module.main || module.version.is_empty() {
            continue;
        }
        if let Some(update) = module.update {
            if !update.version.is_empty() {
                updates.insert(module.path, update.version);
            }
        }
    }

    updates
}

/// Attach newer versions to the declared records that have one
///
/// The manifest stays authoritative for the record set and the indirect flag.
pub fn apply_updates(deps: &[Dependency], updates: &HashMap<String, String>) -> Vec<Dependency> {
    let updatable = deps
        .iter()
        .filter_map(|dep| {
            updates
                .get(&dep.path)
                .map(|new_version| dep.clone().with_new_version(new_version.clone()))
        })
        .filter(Dependency::has_update)
        .collect();
    canonical_order(updatable)
}
