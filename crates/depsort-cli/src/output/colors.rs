//! Terminal styling.
//!
//! Respects the NO_COLOR environment variable and only styles output when
//! both standard streams are terminals.

use std::env;
use std::io::{self, IsTerminal};

/// Role of a piece of terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    /// Locations and cycle paths
    Accent,
    /// Labels such as `help` and `caused by`
    Muted,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Success => "32",
            Tone::Warning => "33",
            Tone::Error => "1;31",
            Tone::Accent => "36",
            Tone::Muted => "2",
        }
    }
}

/// Whether output is styled with ANSI escapes
#[derive(Debug, Clone, Copy)]
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect from NO_COLOR and the attached streams
    pub fn detect() -> Self {
        let enabled = env::var_os("NO_COLOR").is_none()
            && io::stderr().is_terminal()
            && io::stdout().is_terminal();
        Self { enabled }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Style `text` for the given tone
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", tone.sgr(), text)
        } else {
            text.to_string()
        }
    }
}
