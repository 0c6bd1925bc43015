#![deny(clippy::all)]

use hampath_core::{find_paths_with, Acceptance, BestPath, Graph, SearchStats};
use napi::{Error, Result, Status};
use napi_derive::napi;

mod models;

use models::{AcceptedPath, HamiltonianSolution, SearchStatistics};

fn to_js_path(path: &[usize]) -> Vec<u32> {
    path.iter().map(|&v| v as u32).collect()
}

fn to_js_best(best: BestPath) -> AcceptedPath {
    AcceptedPath {
        source: best.path[0] as u32,
        path: to_js_path(&best.path),
        cost: best.cost,
    }
}

fn to_js_stats(stats: SearchStats) -> SearchStatistics {
    SearchStatistics {
        accepted: stats.accepted as i64,
        rejected: stats.rejected as i64,
        completed: stats.completed as i64,
        cache_hits: stats.cache_hits as i64,
        cache_misses: stats.cache_misses as i64,
    }
}

#[napi]
pub fn find_hamiltonian_paths(distances: Vec<Vec<f64>>) -> Result<HamiltonianSolution> {
    let graph = Graph::new(distances).map_err(|e| Error::new(Status::InvalidArg, e.to_string()))?;
    let n = graph.vertex_count();

    let mut accepted = Vec::new();
    let outcome = find_paths_with(&graph, &mut |event: &Acceptance<'_>| {
        if event.is_complete(n) {
            accepted.push(AcceptedPath {
                source: event.start as u32,
                path: to_js_path(event.path),
                cost: event.cost,
            });
        }
    });

    Ok(HamiltonianSolution {
        results: outcome
            .results
            .into_iter()
            .map(|slot| slot.map(to_js_best))
            .collect(),
        accepted,
        stats: to_js_stats(outcome.stats),
    })
}
