use thiserror::Error;

/// Raised when a distance matrix cannot describe a complete graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("distance matrix is empty")]
    Empty,

    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("distance matrix entry [{row}][{col}] is not a finite number")]
    NonFinite { row: usize, col: usize },
}
