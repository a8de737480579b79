//! Dependency ordering engine for depsort
//!
//! This crate orders named services so that every service comes after the
//! services it depends on, and validates that a dependency graph is acyclic.
//!
//! - [`graph`]: building the dependency graph
//! - [`sort`]: topological ordering by in-degree reduction
//! - [`cycle`]: cycle detection and DAG validation
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut deps = HashMap::new();
//! deps.insert("web", vec!["api"]);
//! deps.insert("api", vec!["db"]);
//! deps.insert("db", vec![]);
//!
//! let order = depsort_graph::define_services(deps).unwrap();
//! assert_eq!(order, vec!["db", "api", "web"]);
//! ```

pub mod cycle;
pub mod graph;
pub mod sort;

// Re-export main types
pub use graph::DependencyGraph;
pub use sort::SortOptions;

use depsort_core::error::DepsortResult;
use depsort_core::types::Service;

/// Result type for graph operations
pub type GraphResult<T> = DepsortResult<T>;

fn build_graph<I, K, D, S>(dependencies: I) -> DependencyGraph
where
    I: IntoIterator<Item = (K, D)>,
    K: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    dependencies
        .into_iter()
        .map(|(name, deps)| Service::with_dependencies(name, deps))
        .collect()
}

/// Order services given as a map from name to dependency names
///
/// Each key becomes a service whose dependencies are the mapped names.
pub fn define_services<I, K, D, S>(dependencies: I) -> GraphResult<Vec<String>>
where
    I: IntoIterator<Item = (K, D)>,
    K: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    define_services_with(dependencies, &SortOptions::default())
}

/// Order services with explicit sort options
pub fn define_services_with<I, K, D, S>(
    dependencies: I,
    options: &SortOptions,
) -> GraphResult<Vec<String>>
where
    I: IntoIterator<Item = (K, D)>,
    K: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    build_graph(dependencies).topological_sort_with(options)
}

/// Build a graph from a dependency map and check that it is acyclic
pub fn create_and_check_dag<I, K, D, S>(dependencies: I) -> GraphResult<bool>
where
    I: IntoIterator<Item = (K, D)>,
    K: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    build_graph(dependencies).is_dag()
}
