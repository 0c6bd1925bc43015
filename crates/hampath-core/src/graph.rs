use crate::error::GraphError;

/// Complete undirected graph over `n` locations with a pairwise distance matrix.
///
/// Immutable once built. Every vertex is adjacent to every other vertex, so the
/// adjacency lists are derived from `n` alone.
#[derive(Clone, Debug)]
pub struct Graph {
    n: usize,
    // Flattened row-major matrix for cache locality
    dist_mat: Vec<f64>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(distances: Vec<Vec<f64>>) -> Result<Self, GraphError> {
        let n = distances.len();
        if n == 0 {
            return Err(GraphError::Empty);
        }

        let mut dist_mat = Vec::with_capacity(n * n);
        for (row, values) in distances.into_iter().enumerate() {
            if values.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            if let Some(col) = values.iter().position(|d| !d.is_finite()) {
                return Err(GraphError::NonFinite { row, col });
            }
            dist_mat.extend(values);
        }

        let adjacency = (0..n)
            .map(|v| (0..n).filter(|&u| u != v).collect())
            .collect();

        Ok(Graph {
            n,
            dist_mat,
            adjacency,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Cost of the edge `from -> to`. Panics when either index is out of range.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "vertex index out of range");
        self.dist_mat[from * self.n + to]
    }

    /// All vertices other than `v`, in index order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Sum of edge weights between consecutive vertices of `path`.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        let mut cost = 0.0;
        for leg in path.windows(2) {
            cost += self.distance(leg[0], leg[1]);
        }
        cost
    }
}
