//! Check command implementation

use camino::Utf8Path;

use depsort_config::ServiceManifest;
use depsort_core::error::DepsortResult;
use depsort_graph::DependencyGraph;

use super::CommandContext;

/// Execute the check command
///
/// Undeclared dependencies are reported as warnings; only a cycle fails the
/// check.
pub fn execute(manifest: Option<&Utf8Path>, ctx: &CommandContext) -> DepsortResult<bool> {
    let (manifest, path) = ctx.load_manifest(manifest)?;
    let graph = DependencyGraph::from_services(manifest.services());

    for missing in graph.missing_dependencies() {
        ctx.output.warn(&format!(
            "'{}' is required by {} but never declared",
            missing,
            describe_dependents(&manifest, &graph, missing)
        ));
    }

    let is_dag = graph.is_dag()?;
    ctx.output.success(&format!(
        "{}: {} services, no dependency cycles",
        path,
        graph.len()
    ));
    Ok(is_dag)
}

/// Services that require `dependency`, with their manifest descriptions
fn describe_dependents(
    manifest: &ServiceManifest,
    graph: &DependencyGraph,
    dependency: &str,
) -> String {
    graph
        .dependents(dependency)
        .iter()
        .map(|name| match manifest.description(name) {
            Some(description) => format!("{} ({})", name, description),
            None => name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
