//! The consistency check: parse, scan, compare, report.

use std::path::PathBuf;

use clap::Args;
use sidecheck_nav::{Sidebars, default_content_root};
use sidecheck_report::ConsistencyReport;
use sidecheck_scan::Scanner;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the consistency check.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to the sidebar configuration (JSON).
    pub sidebars: PathBuf,

    /// Content root directory (default: docs/ next to the configuration).
    #[arg(short, long)]
    docs_dir: Option<PathBuf>,

    /// Print the report as JSON on stdout instead of human-readable lines.
    #[arg(long)]
    json: bool,

    /// Enable verbose output (timing and count logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Run the check and report the outcome.
    ///
    /// Returns `Ok(report)` when the comparison ran; mismatches are part of
    /// the report, not an error. Duplicate identifiers and a missing content
    /// directory are fatal.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for configuration, scan, or serialization
    /// failures.
    pub(crate) fn execute(self) -> Result<ConsistencyReport, CliError> {
        let output = Output::new();

        let sidebars = Sidebars::load(&self.sidebars)?;
        // Collect identifiers before touching the filesystem so a duplicate
        // aborts regardless of filesystem state.
        let expected = sidebars.expected_files()?;

        let docs_dir = self
            .docs_dir
            .unwrap_or_else(|| default_content_root(&self.sidebars));
        tracing::info!(
            docs_dir = %docs_dir.display(),
            expected_count = expected.len(),
            "Checking navigation consistency"
        );

        let discovered = Scanner::new(docs_dir).scan()?;
        let report = ConsistencyReport::compare(&expected, &discovered);

        if self.json {
            output.line(&serde_json::to_string_pretty(&report)?);
            return Ok(report);
        }

        if !report.missing.is_empty() {
            output.error("Missing markdown files for IDs:");
            for file in &report.missing {
                output.detail(&format!("  - {file}"));
            }
        }
        if !report.extra.is_empty() {
            output.error("Markdown files with no matching ID in the sidebar:");
            for file in &report.extra {
                output.detail(&format!("  - {file}"));
            }
        }
        if report.is_consistent() {
            output.success("All IDs have corresponding .md files and vice versa.");
        }

        Ok(report)
    }
}
