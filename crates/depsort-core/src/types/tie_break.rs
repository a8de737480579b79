//! Tie-break rule for services that become ready at the same time.

use crate::error::DepsortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which simultaneously ready services are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Registration order of services and append order of dependents
    #[default]
    Registration,
    /// Identifier order, independent of registration order
    Lexical,
}

impl TieBreak {
    /// All accepted spellings, for help and error text
    pub const VARIANTS: &'static [&'static str] = &["registration", "lexical"];

    /// Name used in manifests and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::Registration => "registration",
            TieBreak::Lexical => "lexical",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = DepsortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "registration" => Ok(TieBreak::Registration),
            "lexical" => Ok(TieBreak::Lexical),
            other => Err(DepsortError::config(
                "tie-break",
                format!(
                    "unknown value '{}', expected one of: {}",
                    other,
                    Self::VARIANTS.join(", ")
                ),
            )),
        }
    }
}
