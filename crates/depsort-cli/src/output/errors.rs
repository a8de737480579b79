//! Error reports for the terminal.
//!
//! A report is a headline, then the details the error carries: the source
//! position of a manifest parse error or the services along a cycle.

use std::error::Error;
use std::fmt::Write;

use depsort_core::error::DepsortError;
use depsort_core::utils::format_cycle;

use super::colors::{ColorSupport, Tone};

/// Renders `DepsortError`s for stderr
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Build the full report for an error
    pub fn format_error(&self, error: &DepsortError) -> String {
        let label = self.colors.paint(Tone::Error, "error");
        let mut report = format!("{}: {}\n", label, headline(error));

        if let Some(location) = error.location() {
            let arrow = self.colors.paint(Tone::Muted, "-->");
            let _ = writeln!(report, "  {} {}", arrow, location);
        }

        if let Some(cycle) = error.cycle_path() {
            let _ = writeln!(
                report,
                "  {} {}",
                self.colors.paint(Tone::Muted, "cycle:"),
                self.colors.paint(Tone::Accent, &format_cycle(cycle))
            );
        }

        let mut source = error.source();
        while let Some(cause) = source {
            let label = self.colors.paint(Tone::Muted, "caused by:");
            let _ = writeln!(report, "  {} {}", label, cause);
            source = cause.source();
        }

        if let Some(suggestion) = error.suggestion() {
            let label = self.colors.paint(Tone::Muted, "help:");
            let _ = write!(report, "\n{} {}\n", label, suggestion);
        }

        report
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Process exit code for an error
///
/// Graph failures exit with 2 so scripts can tell a bad dependency graph
/// from a manifest that could not be read.
pub fn exit_code(error: &DepsortError) -> i32 {
    if error.is_graph_error() {
        2
    } else {
        1
    }
}

/// First line of the report
///
/// Details printed on their own lines are left out of the headline.
fn headline(error: &DepsortError) -> String {
    match error {
        DepsortError::CycleDetected { cycle } => {
            format!("dependency cycle between {} services", cycle.len())
        },
        DepsortError::ManifestParse { message, .. } => {
            format!("failed to parse manifest: {}", message)
        },
        other => other.to_string(),
    }
}
