use serde::Serialize;

use crate::cost_cache::CostCache;
use crate::graph::Graph;
use crate::pruning::PruningTable;
use crate::results::ResultStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub accepted: u64,
    pub rejected: u64,
    pub completed: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_entries: usize,
}

/// State shared by every start vertex of one run.
///
/// The cost cache and pruning table are deliberately not reset between start
/// vertices.
pub struct SearchContext<'g> {
    pub graph: &'g Graph,
    pub cost_cache: CostCache,
    pub pruning: PruningTable,
    pub results: ResultStore,
    pub accepted: u64,
    pub rejected: u64,
    pub completed: u64,
}

impl<'g> SearchContext<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        SearchContext {
            graph,
            cost_cache: CostCache::new(),
            pruning: PruningTable::new(n),
            results: ResultStore::new(n),
            accepted: 0,
            rejected: 0,
            completed: 0,
        }
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            accepted: self.accepted,
            rejected: self.rejected,
            completed: self.completed,
            cache_hits: self.cost_cache.hits(),
            cache_misses: self.cost_cache.misses(),
            cache_entries: self.cost_cache.len(),
        }
    }
}
