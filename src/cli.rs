//! CLI argument parsing module for goup

use crate::domain::TidyFailurePolicy;
use clap::Parser;
use std::path::PathBuf;

/// Parse a tidy failure policy: `fail` or `warn`
fn parse_tidy_policy(s: &str) -> Result<TidyFailurePolicy, String> {
    s.parse()
}

/// Go module dependency updater
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "goup",
    version,
    about = "Go module dependency updater",
    after_help = "Examples:\n  goup                      Update direct dependencies in the current directory\n  goup /path/to/project     Update direct dependencies in the given directory\n  goup --all -s             Pick dependencies, including indirect ones, interactively"
)]
pub struct CliArgs {
    /// Target directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List dependencies with available updates (implies --dry-run)
    #[arg(short, long)]
    pub list: bool,

    /// Ask for confirmation before updating
    #[arg(short, long)]
    pub interactive: bool,

    /// Choose which dependencies to update interactively
    #[arg(short, long)]
    pub select: bool,

    /// Include indirect dependencies
    #[arg(short, long)]
    pub all: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// What a failing `go mod tidy` does to the exit code: fail or warn
    #[arg(long, value_name = "POLICY", value_parser = parse_tidy_policy)]
    pub tidy_failure: Option<TidyFailurePolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["goup"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.dry_run);
        assert!(!args.list);
        assert!(!args.interactive);
        assert!(!args.select);
        assert!(!args.all);
        assert!(!args.verbose);
        assert!(!args.no_color);
        assert!(args.tidy_failure.is_none());
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["goup", "/some/path"]);
        assert_eq!(args.path, PathBuf::from("/some/path"));
    }

    #[test]
    fn test_dry_run_flags() {
        assert!(CliArgs::parse_from(["goup", "-n"]).dry_run);
        assert!(CliArgs::parse_from(["goup", "--dry-run"]).dry_run);
    }

    #[test]
    fn test_short_flags() {
        let args = CliArgs::parse_from(["goup", "-l", "-i", "-s", "-a"]);
        assert!(args.list);
        assert!(args.interactive);
        assert!(args.select);
        assert!(args.all);
    }

    #[test]
    fn test_long_flags() {
        let args = CliArgs::parse_from([
            "goup",
            "--list",
            "--interactive",
            "--select",
            "--all",
            "--verbose",
            "--no-color",
        ]);
        assert!(args.list);
        assert!(args.interactive);
        assert!(args.select);
        assert!(args.all);
        assert!(args.verbose);
        assert!(args.no_color);
    }

    #[test]
    fn test_tidy_failure_policy() {
        let args = CliArgs::parse_from(["goup", "--tidy-failure", "warn"]);
        assert_eq!(args.tidy_failure, Some(TidyFailurePolicy::Warn));

        let args = CliArgs::parse_from(["goup", "--tidy-failure", "fail"]);
        assert_eq!(args.tidy_failure, Some(TidyFailurePolicy::Fail));
    }

    #[test]
    fn test_tidy_failure_invalid() {
        let result = CliArgs::try_parse_from(["goup", "--tidy-failure", "ignore"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(CliArgs::try_parse_from(["goup", "--frobnicate"]).is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from(["goup", "/path/to/project", "-n", "-a", "--verbose"]);
        assert_eq!(args.path, PathBuf::from("/path/to/project"));
        assert!(args.dry_run);
        assert!(args.all);
        assert!(args.verbose);
        assert!(!args.select);
    }
}
