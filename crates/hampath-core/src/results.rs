use serde::Serialize;

/// A complete path retained for its start vertex.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BestPath {
    pub path: Vec<usize>,
    pub cost: f64,
}

/// Per-start record of the last complete path that passed the pruning gate.
#[derive(Clone, Debug)]
pub struct ResultStore {
    slots: Vec<Option<BestPath>>,
}

impl ResultStore {
    pub fn new(n: usize) -> Self {
        ResultStore {
            slots: vec![None; n],
        }
    }

    /// Overwrites whatever was stored for the path's start vertex.
    pub fn record(&mut self, path: &[usize], cost: f64) {
        let start = path[0];
        self.slots[start] = Some(BestPath {
            path: path.to_vec(),
            cost,
        });
    }

    pub fn get(&self, start: usize) -> Option<&BestPath> {
        self.slots[start].as_ref()
    }

    pub fn snapshot(&self) -> Vec<Option<BestPath>> {
        self.slots.clone()
    }
}
