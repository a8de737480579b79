//! Error types and result aliases for depsort operations.
//!
//! Provides a unified error type that covers graph failures and manifest
//! loading failures with actionable error messages.

use crate::utils::format_cycle;
use thiserror::Error;

/// Unified error type for all depsort operations
#[derive(Error, Debug)]
pub enum DepsortError {
    // Graph errors
    #[error("Cycle detected involving services: {}", format_cycle(.cycle))]
    CycleDetected { cycle: Vec<String> },

    #[error("Graph contains unresolved dependencies")]
    UnresolvedDependency,

    #[error("Graph contains a cycle")]
    GraphHasCycle,

    // Manifest errors
    #[error("Failed to parse manifest: {message} at line {line}, column {column}")]
    ManifestParse {
        file: Option<String>,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Failed to parse JSON manifest: {message}")]
    JsonParse {
        file: Option<String>,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for depsort operations
pub type DepsortResult<T> = Result<T, DepsortError>;

impl DepsortError {
    /// Create a cycle error from the witness path
    pub fn cycle(cycle: Vec<String>) -> Self {
        Self::CycleDetected { cycle }
    }

    /// Create a config validation error
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error describes the shape of the dependency graph
    /// rather than a problem reading its input
    pub fn is_graph_error(&self) -> bool {
        matches!(
            self,
            DepsortError::CycleDetected { .. }
                | DepsortError::UnresolvedDependency
                | DepsortError::GraphHasCycle
        )
    }

    /// Witness path carried by a cycle error
    pub fn cycle_path(&self) -> Option<&[String]> {
        match self {
            DepsortError::CycleDetected { cycle } => Some(cycle),
            _ => None,
        }
    }

    /// Attach the manifest path to a parse error
    pub fn in_file(self, path: impl Into<String>) -> Self {
        match self {
            DepsortError::ManifestParse {
                message,
                line,
                column,
                ..
            } => DepsortError::ManifestParse {
                file: Some(path.into()),
                message,
                line,
                column,
            },
            DepsortError::JsonParse {
                message,
                line,
                column,
                ..
            } => DepsortError::JsonParse {
                file: Some(path.into()),
                message,
                line,
                column,
            },
            other => other,
        }
    }

    /// `file:line:column` of a parse error
    ///
    /// A zero line means the position is unknown and only the file is given.
    pub fn location(&self) -> Option<String> {
        let (file, line, column) = match self {
            DepsortError::ManifestParse {
                file, line, column, ..
            }
            | DepsortError::JsonParse {
                file, line, column, ..
            } => (file.as_deref(), *line, *column),
            _ => return None,
        };

        match (file, line) {
            (Some(file), 0) => Some(file.to_string()),
            (Some(file), _) => Some(format!("{}:{}:{}", file, line, column)),
            (None, 0) => None,
            (None, _) => Some(format!("{}:{}", line, column)),
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            DepsortError::CycleDetected { .. } | DepsortError::GraphHasCycle => {
                Some("Break the cycle by removing one of the dependencies along the path")
            },
            DepsortError::UnresolvedDependency => {
                Some("Declare every service that appears in a dependency list")
            },
            DepsortError::ManifestParse { .. } | DepsortError::JsonParse { .. } => {
                Some("Check the manifest syntax near the reported location")
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_message() {
        let err = DepsortError::cycle(vec!["api".to_string(), "db".to_string()]);
        assert_eq!(
            err.to_string(),
            "Cycle detected involving services: api -> db -> api"
        );
        assert_eq!(
            err.cycle_path(),
            Some(&["api".to_string(), "db".to_string()][..])
        );
    }

    #[test]
    fn test_graph_error_classification() {
        assert!(DepsortError::UnresolvedDependency.is_graph_error());
        assert!(DepsortError::GraphHasCycle.is_graph_error());
        assert!(DepsortError::cycle(vec!["a".to_string()]).is_graph_error());
        assert!(!DepsortError::config("services", "empty").is_graph_error());
        assert!(DepsortError::GraphHasCycle.cycle_path().is_none());
    }

    #[test]
    fn test_parse_error_location() {
        let err = DepsortError::ManifestParse {
            file: None,
            message: "invalid table header".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(err.location().as_deref(), Some("3:7"));

        let err = err.in_file("services/depsort.toml");
        assert_eq!(err.location().as_deref(), Some("services/depsort.toml:3:7"));

        let unplaced = DepsortError::JsonParse {
            file: None,
            message: "bad".to_string(),
            line: 0,
            column: 0,
        };
        assert_eq!(unplaced.location(), None);
        assert_eq!(
            unplaced.in_file("depsort.json").location().as_deref(),
            Some("depsort.json")
        );
        assert_eq!(DepsortError::GraphHasCycle.location(), None);
    }

    #[test]
    fn test_suggestions() {
        assert!(DepsortError::UnresolvedDependency.suggestion().is_some());
        assert!(DepsortError::GraphHasCycle.suggestion().is_some());
        assert!(DepsortError::config("tie-break", "unknown").suggestion().is_none());
    }

    #[test]
    fn test_config_error_message() {
        let err = DepsortError::config("tie-break", "unknown value 'random'");
        assert_eq!(
            err.to_string(),
            "Configuration field 'tie-break' is invalid: unknown value 'random'"
        );
    }
}
