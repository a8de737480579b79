//! Topological ordering by in-degree reduction
//!
//! Kahn's algorithm over the reverse edges of a [`DependencyGraph`]. The
//! graph itself is left untouched; the in-degrees are reduced on a working
//! copy, so the same graph can be sorted or checked again afterwards.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::{debug, warn};

use depsort_core::error::DepsortError;
use depsort_core::types::TieBreak;

use crate::graph::DependencyGraph;
use crate::GraphResult;

/// Options controlling how a graph is ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Rule for services that become ready at the same time
    pub tie_break: TieBreak,
}

impl SortOptions {
    /// Options with a specific tie-break rule
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Identifier-ordered tie-breaking
    pub fn lexical() -> Self {
        Self::with_tie_break(TieBreak::Lexical)
    }
}

impl DependencyGraph {
    /// Get services in dependency order using registration-order tie-breaking
    pub fn topological_sort(&self) -> GraphResult<Vec<String>> {
        self.topological_sort_with(&SortOptions::default())
    }

    /// Get services in dependency order
    ///
    /// Every service appears after all of its registered dependencies. When
    /// some service never becomes ready, the cycle detector decides between
    /// [`DepsortError::CycleDetected`] and [`DepsortError::UnresolvedDependency`].
    pub fn topological_sort_with(&self, options: &SortOptions) -> GraphResult<Vec<String>> {
        let lexical = options.tie_break == TieBreak::Lexical;

        let mut in_degree: IndexMap<&str, usize> = self
            .in_degree
            .iter()
            .map(|(name, degree)| (name.as_str(), *degree))
            .collect();

        let mut ready: Vec<&str> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(name, _)| *name)
            .collect();
        if lexical {
            ready.sort_unstable();
        }

        debug!(
            services = self.len(),
            ready = ready.len(),
            tie_break = %options.tie_break,
            "Starting topological sort"
        );

        let mut queue: VecDeque<&str> = ready.into();
        let mut result = Vec::with_capacity(self.len());

        while let Some(service) = queue.pop_front() {
            result.push(service.to_string());

            let mut dependents: Vec<&str> =
                self.dependents(service).iter().map(String::as_str).collect();
            if lexical {
                dependents.sort_unstable();
            }

            for dependent in dependents {
                if let Some(degree) = in_degree.get_mut(dependent) {
                    // Already released; only stale edges from a re-registration reach here
                    if *degree == 0 {
                        continue;
                    }
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(dependent);
                    }
                }
            }
        }

        if result.len() != self.len() {
            warn!(
                ordered = result.len(),
                services = self.len(),
                "Topological sort left services unordered"
            );
            return Err(match self.find_cycle() {
                Some(cycle) => DepsortError::cycle(cycle),
                None => DepsortError::UnresolvedDependency,
            });
        }

        debug!(ordered = result.len(), "Topological sort complete");
        Ok(result)
    }
}
