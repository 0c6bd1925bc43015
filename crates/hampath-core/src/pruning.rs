/// Lowest cumulative cost observed per (start vertex, path length).
///
/// The bound is shared by every path of the same length from the same start,
/// whichever vertices it visited, so it is not an admissible bound: it can cut
/// a branch that would have completed into a cheaper Hamiltonian path.
#[derive(Clone, Debug)]
pub struct PruningTable {
    lengths: usize,
    // Row per start vertex, column per path length 0..=n
    cells: Vec<f64>,
}

impl PruningTable {
    /// No bound yet; larger than any real path cost.
    pub const UNBOUNDED: f64 = f64::INFINITY;

    pub fn new(n: usize) -> Self {
        let lengths = n + 1;
        PruningTable {
            lengths,
            cells: vec![Self::UNBOUNDED; n * lengths],
        }
    }

    #[inline]
    fn index(&self, start: usize, len: usize) -> usize {
        assert!(len < self.lengths, "path length out of range");
        start * self.lengths + len
    }

    pub fn bound(&self, start: usize, len: usize) -> f64 {
        self.cells[self.index(start, len)]
    }

    /// Gate for a path of `len` vertices beginning at `start`.
    ///
    /// Rejects without touching the table when `cost` is strictly greater than
    /// the stored bound; otherwise stores `cost` and accepts.
    pub fn admit(&mut self, start: usize, len: usize, cost: f64) -> bool {
        let idx = self.index(start, len);
        if cost > self.cells[idx] {
            return false;
        }
        self.cells[idx] = cost;
        true
    }
}
