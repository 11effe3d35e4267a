//! Colored terminal output utilities.
//!
//! Problems go to stderr; the success confirmation goes to stdout so CI
//! logs keep the two streams separable.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    stdout: Term,
    stderr: Term,
    green: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
        }
    }

    /// Print a plain line to stdout.
    pub(crate) fn line(&self, msg: &str) {
        let _ = self.stdout.write_line(msg);
    }

    /// Print a success message (green) to stdout.
    pub(crate) fn success(&self, msg: &str) {
        let _ = self
            .stdout
            .write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red) to stderr.
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a plain problem detail line to stderr.
    pub(crate) fn detail(&self, msg: &str) {
        let _ = self.stderr.write_line(msg);
    }
}
