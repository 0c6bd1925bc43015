//! Hamiltonian path search over a complete weighted graph.
//!
//! For every start vertex the engine enumerates simple paths depth-first and
//! keeps the last complete path that passed the pruning gate. Two structures
//! are shared across all start vertices of a run:
//!
//! - [`CostCache`]: cumulative cost keyed by the exact vertex sequence.
//! - [`PruningTable`]: lowest cost seen per (start, path length). A path is cut
//!   as soon as its cost exceeds the bound for its length, whichever vertices
//!   produced that bound, so the retained path is not guaranteed optimal.

#![deny(clippy::all)]

pub mod cost_cache;
pub mod error;
pub mod events;
pub mod graph;
pub mod pruning;
pub mod results;
pub mod search;

pub use cost_cache::CostCache;
pub use error::GraphError;
pub use events::{Acceptance, AcceptanceObserver, AcceptanceRecord, Recorder, Silent};
pub use graph::Graph;
pub use pruning::PruningTable;
pub use results::{BestPath, ResultStore};
pub use search::context::{SearchContext, SearchStats};
pub use search::{find_paths, find_paths_with, SearchOutcome};
