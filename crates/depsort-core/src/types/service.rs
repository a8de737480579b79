//! Service entity type.
//!
//! A service is a named node in the dependency graph together with the
//! ordered list of services it requires to come first.

use serde::{Deserialize, Serialize};

/// Named entity with its declared dependencies
///
/// Declared dependencies do not have to be registered services themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Service {
    /// Create a service with no dependencies
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
        }
    }

    /// Create a service with the given dependencies
    pub fn with_dependencies<I, S>(name: impl Into<String>, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a dependency to this service
    pub fn depends_on(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }
}
