use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hampath_core::Graph;
use tracing::debug;

/// Parses a JSON array of rows, e.g. `[[0, 5], [5, 0]]`.
pub fn parse_graph(raw: &str) -> Result<Graph> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(raw).context("distance matrix must be a JSON array of number arrays")?;
    let graph = Graph::new(rows).context("invalid distance matrix")?;
    Ok(graph)
}

pub fn load_graph(path: &Path) -> Result<Graph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read distance matrix from {}", path.display()))?;
    let graph = parse_graph(&raw).with_context(|| format!("while loading {}", path.display()))?;
    debug!(path = %path.display(), vertices = graph.vertex_count(), "distance matrix loaded");
    Ok(graph)
}
