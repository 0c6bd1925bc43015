use napi_derive::napi;

#[napi(object)]
#[derive(Clone, Debug)]
pub struct AcceptedPath {
    pub source: u32,
    pub path: Vec<u32>,
    pub cost: f64,
}

#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct SearchStatistics {
    pub accepted: i64,
    pub rejected: i64,
    pub completed: i64,
    pub cache_hits: i64,
    pub cache_misses: i64,
}

#[napi(object)]
pub struct HamiltonianSolution {
    /// Indexed by source vertex; `null` when no complete path was accepted
    pub results: Vec<Option<AcceptedPath>>,
    /// Every accepted complete path, in search order
    pub accepted: Vec<AcceptedPath>,
    pub stats: SearchStatistics,
}
