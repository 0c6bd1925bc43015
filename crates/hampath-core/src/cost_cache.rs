use std::collections::HashMap;

use crate::graph::Graph;

/// Memoized cumulative cost of every vertex sequence seen during a run.
///
/// Keys are the exact ordered sequence: a prefix or a permutation of a cached
/// path is a different key. Entries are never evicted.
#[derive(Debug, Default)]
pub struct CostCache {
    memo: HashMap<Vec<usize>, f64>,
    hits: u64,
    misses: u64,
}

impl CostCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cost(&mut self, graph: &Graph, path: &[usize]) -> f64 {
        if let Some(&cached) = self.memo.get(path) {
            self.hits += 1;
            return cached;
        }

        self.misses += 1;
        let cost = graph.path_cost(path);
        self.memo.insert(path.to_vec(), cost);
        cost
    }

    pub fn get(&self, path: &[usize]) -> Option<f64> {
        self.memo.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of summations actually performed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
