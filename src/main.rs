//! goup - Go module dependency updater CLI tool
//!
//! Updates the dependencies declared in a Go module's go.mod, one module at
//! a time, then tidies the module graph.

use clap::Parser;
use goup::cli::CliArgs;
use goup::config::Config;
use goup::manifest::{resolve_project_dir, GoModReader};
use goup::orchestrator::Orchestrator;
use goup::output::TerminalConsole;
use goup::resolver::GoListResolver;
use goup::runner::SystemCommandRunner;
use goup::select::InteractiveSelector;
use goup::update::GoUpdater;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let dir = resolve_project_dir(&args.path)?;
    let config = Config::load(&args)?;

    // Print version info in verbose mode
    if config.verbose {
        eprintln!("goup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", dir.display());
        eprintln!("Tidy failure policy: {}", config.tidy_failure);
    }

    let console = TerminalConsole::new(config.color, config.verbose);
    let runner = SystemCommandRunner::new(&dir);
    let reader = GoModReader::new();
    let resolver = GoListResolver::new(&runner);
    let selector = InteractiveSelector::new(&console);
    let updater = GoUpdater::new(&runner, config.verbose);

    let orchestrator = Orchestrator::new(
        &config, &dir, &console, &reader, &resolver, &selector, &updater,
    );
    let outcome = orchestrator.run()?;

    Ok(ExitCode::from(outcome.exit_code(config.tidy_failure)))
}
