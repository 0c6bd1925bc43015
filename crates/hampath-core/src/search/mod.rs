pub mod context;
pub mod walk;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::events::{Acceptance, AcceptanceObserver, Silent};
use crate::graph::Graph;
use crate::results::BestPath;
use context::{SearchContext, SearchStats};
use walk::Walk;

#[derive(Clone, Debug, Serialize)]
pub struct SearchOutcome {
    /// Indexed by start vertex.
    pub results: Vec<Option<BestPath>>,
    pub stats: SearchStats,
}

/// Submits `path` to the pruning gate and reports it when accepted.
fn gate<O>(ctx: &mut SearchContext, path: &[usize], cost: f64, observer: &mut O) -> bool
where
    O: AcceptanceObserver + ?Sized,
{
    let start = path[0];
    if !ctx.pruning.admit(start, path.len(), cost) {
        ctx.rejected += 1;
        trace!(start, len = path.len(), cost, "pruned");
        return false;
    }

    ctx.accepted += 1;
    observer.on_accept(&Acceptance { start, path, cost });
    true
}

fn extend_path<O>(ctx: &mut SearchContext, walk: &mut Walk, observer: &mut O)
where
    O: AcceptanceObserver + ?Sized,
{
    let graph = ctx.graph;

    // Base Case: every vertex visited
    if walk.path.len() == graph.vertex_count() {
        let cost = ctx.cost_cache.cost(graph, &walk.path);
        ctx.results.record(&walk.path, cost);
        ctx.completed += 1;
        return;
    }

    for &next in graph.neighbors(walk.last()) {
        if walk.is_visited(next) {
            continue;
        }

        let mut step = walk.extend(next);
        let cost = ctx.cost_cache.cost(graph, &step.path);
        if gate(ctx, &step.path, cost, observer) {
            extend_path(ctx, &mut step, observer);
        }
    }
}

impl SearchContext<'_> {
    /// Searches from every start vertex in index order. Consumes the context:
    /// a second run over the same cache and pruning table would not be a
    /// fresh search.
    pub fn run<O>(mut self, observer: &mut O) -> SearchOutcome
    where
        O: AcceptanceObserver + ?Sized,
    {
        let n = self.graph.vertex_count();

        for start in 0..n {
            let completed_before = self.completed;
            let mut walk = Walk::rooted(n, start);
            let cost = self.cost_cache.cost(self.graph, &walk.path);
            if gate(&mut self, &walk.path, cost, observer) {
                extend_path(&mut self, &mut walk, observer);
            }
            debug!(
                start,
                completed = self.completed - completed_before,
                best = ?self.results.get(start).map(|best| best.cost),
                "start vertex searched"
            );
        }

        let stats = self.stats();
        info!(
            vertices = n,
            accepted = stats.accepted,
            rejected = stats.rejected,
            completed = stats.completed,
            cache_entries = stats.cache_entries,
            cache_hits = stats.cache_hits,
            "search finished"
        );

        SearchOutcome {
            results: self.results.snapshot(),
            stats,
        }
    }
}

pub fn find_paths(graph: &Graph) -> SearchOutcome {
    find_paths_with(graph, &mut Silent)
}

pub fn find_paths_with<O>(graph: &Graph, observer: &mut O) -> SearchOutcome
where
    O: AcceptanceObserver + ?Sized,
{
    SearchContext::new(graph).run(observer)
}
