//! Run configuration
//!
//! Merges, in priority order:
//! - command-line flags
//! - the optional `.goup.toml` in the project directory
//! - built-in defaults
//!
//! The `NO_COLOR` environment variable also disables colors.

use crate::cli::CliArgs;
use crate::domain::TidyFailurePolicy;
use crate::error::ConfigError;
use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const SETTINGS_FILENAME: &str = ".goup.toml";

/// Settings read from `.goup.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectSettings {
    /// Include indirect dependencies
    pub all: Option<bool>,
    /// Disable colored output
    pub no_color: Option<bool>,
    /// Enable verbose output
    pub verbose: Option<bool>,
    /// Tidy failure policy (`fail` or `warn`)
    pub tidy_failure: Option<String>,
}

impl ProjectSettings {
    /// Read project settings from a directory
    ///
    /// A missing file yields the defaults. An unreadable or malformed file
    /// is an error.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(SETTINGS_FILENAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::InvalidFile {
                    path,
                    message: e.to_string(),
                })
            }
        };

        toml::from_str(&content).map_err(|e| ConfigError::InvalidFile {
            path,
            message: e.message().to_string(),
        })
    }

    /// Parsed tidy failure policy, if the file sets one
    pub fn tidy_failure_policy(&self) -> Result<Option<TidyFailurePolicy>, ConfigError> {
        self.tidy_failure
            .as_deref()
            .map(|value| {
                value.parse::<TidyFailurePolicy>().map_err(|_| ConfigError::InvalidTidyPolicy {
                    value: value.to_string(),
                })
            })
            .transpose()
    }
}

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project directory
    pub path: PathBuf,
    /// Compute the selection without executing anything
    pub dry_run: bool,
    /// List upgradeable dependencies only
    pub list: bool,
    /// Confirm before updating
    pub interactive: bool,
    /// Choose dependencies interactively
    pub select: bool,
    /// Include indirect dependencies
    pub all: bool,
    /// Show debug output and stream `go` output
    pub verbose: bool,
    /// Use colors
    pub color: bool,
    /// How a failing tidy step affects the exit code
    pub tidy_failure: TidyFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            dry_run: false,
            list: false,
            interactive: false,
            select: false,
            all: false,
            verbose: false,
            color: true,
            tidy_failure: TidyFailurePolicy::default(),
        }
    }
}

impl Config {
    /// Build the configuration for `args`, reading `.goup.toml` from the target directory
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let settings = ProjectSettings::from_dir(&args.path)?;
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::merge(args, &settings, no_color_env)
    }

    /// Merge CLI flags over project settings
    pub fn merge(
        args: &CliArgs,
        settings: &ProjectSettings,
        no_color_env: bool,
    ) -> Result<Self, ConfigError> {
        let tidy_failure = match args.tidy_failure {
            Some(policy) => policy,
            None => settings.tidy_failure_policy()?.unwrap_or_default(),
        };
        let no_color = args.no_color || settings.no_color.unwrap_or(false) || no_color_env;

        Ok(Self {
            path: args.path.clone(),
            dry_run: args.dry_run,
            list: args.list,
            interactive: args.interactive,
            select: args.select,
            all: args.all || settings.all.unwrap_or(false),
            verbose: args.verbose || settings.verbose.unwrap_or(false),
            color: !no_color,
            tidy_failure,
        })
    }

    /// Whether indirect dependencies take part in the run
    pub fn should_include_indirect(&self) -> bool {
        self.all
    }

    /// Whether nothing should be executed (`--list` implies dry-run)
    pub fn is_dry_run(&self) -> bool {
        self.dry_run || self.list
    }

    /// Whether to draw spinners: never in verbose mode or when stderr is not a terminal
    pub fn show_progress(&self) -> bool {
        !self.verbose && std::io::stderr().is_terminal()
    }
}
