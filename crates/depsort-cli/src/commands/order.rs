//! Order command implementation

use camino::Utf8Path;
use tracing::debug;

use depsort_config::ConfigLayering;
use depsort_core::error::{DepsortError, DepsortResult};
use depsort_graph::{DependencyGraph, SortOptions};

use super::CommandContext;

/// Execute the order command
///
/// Returns the ordering that was printed.
pub fn execute(
    manifest: Option<&Utf8Path>,
    json: bool,
    layering: &ConfigLayering,
    ctx: &CommandContext,
) -> DepsortResult<Vec<String>> {
    let (manifest, path) = ctx.load_manifest(manifest)?;
    let settings = layering.merge_settings(manifest.settings)?;
    debug!(
        tie_break = %settings.tie_break,
        source = ?layering.tie_break_source(Some(path.as_path())),
        "Resolved settings"
    );

    let graph = DependencyGraph::from_services(manifest.services());
    let options = SortOptions::with_tie_break(settings.tie_break);
    let order = graph.topological_sort_with(&options)?;

    if json {
        let rendered = serde_json::to_string(&order).map_err(|e| {
            DepsortError::io("Failed to render ordering as JSON".to_string(), e.into())
        })?;
        ctx.output.print(&rendered);
    } else {
        for service in &order {
            ctx.output.print(service);
        }
    }

    Ok(order)
}
