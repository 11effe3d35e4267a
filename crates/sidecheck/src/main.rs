//! sidecheck CLI - navigation-content consistency checker.
//!
//! Verifies a bijection between the content identifiers declared in a
//! sidebar configuration and the markdown files under the content root.
//! Intended to run as a single CI step; exit code 0 means the two sides
//! reconcile.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::CheckArgs;
use output::Output;

/// sidecheck - navigation-content consistency checker.
#[derive(Parser)]
#[command(name = "sidecheck", version, about)]
struct Cli {
    #[command(flatten)]
    check: CheckArgs,
}

fn main() {
    // A missing argument is a usage error and exits 1 per the CLI contract;
    // --help and --version print to stdout and exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.check.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.check.execute() {
        Ok(report) if report.is_consistent() => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
