//! Cycle detection over the dependents relation
//!
//! Depth-first traversal with three marks per service: unvisited, on the
//! current path, or fully explored. Reaching a service that is still on the
//! current path closes a cycle. The traversal keeps its own stack of frames,
//! which doubles as the current path, so deep dependency chains do not
//! consume the thread stack.

use std::collections::HashMap;

use tracing::{debug, trace};

use depsort_core::error::DepsortError;

use crate::graph::DependencyGraph;
use crate::GraphResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnStack,
    Done,
}

/// A service on the current path and the index of its next dependent to visit
struct Frame<'a> {
    service: &'a str,
    next: usize,
}

impl DependencyGraph {
    /// Find one dependency cycle, if any
    ///
    /// The returned path starts at the service where the cycle was closed.
    /// Each entry is a dependency of the entry after it, and the last entry
    /// is a dependency of the first. The first entry is not repeated.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.len());

        for start in self.services.keys() {
            if marks.contains_key(start.as_str()) {
                continue;
            }

            marks.insert(start, Mark::OnStack);
            let mut stack = vec![Frame {
                service: start,
                next: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let service = frame.service;
                let Some(dependent) = self.dependents(service).get(frame.next) else {
                    marks.insert(service, Mark::Done);
                    stack.pop();
                    continue;
                };
                frame.next += 1;

                match marks.get(dependent.as_str()) {
                    Some(Mark::OnStack) => {
                        let from = stack
                            .iter()
                            .position(|f| f.service == dependent.as_str())
                            .unwrap_or(0);
                        let cycle: Vec<String> = stack[from..]
                            .iter()
                            .map(|f| f.service.to_string())
                            .collect();
                        debug!(length = cycle.len(), "Dependency cycle found");
                        return Some(cycle);
                    },
                    Some(Mark::Done) => {},
                    None => {
                        trace!(service = %dependent, depth = stack.len(), "Entering service");
                        marks.insert(dependent, Mark::OnStack);
                        stack.push(Frame {
                            service: dependent,
                            next: 0,
                        });
                    },
                }
            }
        }

        None
    }

    /// Check if the graph contains at least one dependency cycle
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Check that the graph is acyclic
    ///
    /// Returns `Ok(true)` when no cycle exists and
    /// [`DepsortError::GraphHasCycle`] as soon as one is found. Dependencies on
    /// unregistered services are not an error here.
    pub fn is_dag(&self) -> GraphResult<bool> {
        if self.has_cycle() {
            return Err(DepsortError::GraphHasCycle);
        }
        Ok(true)
    }
}
