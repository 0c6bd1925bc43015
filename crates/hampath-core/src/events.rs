use serde::Serialize;

/// A (start, path, cost) triple that passed the pruning gate.
///
/// Borrowed from the live search state; use [`Acceptance::to_record`] to keep it.
#[derive(Clone, Copy, Debug)]
pub struct Acceptance<'a> {
    pub start: usize,
    pub path: &'a [usize],
    pub cost: f64,
}

impl Acceptance<'_> {
    pub fn is_complete(&self, vertex_count: usize) -> bool {
        self.path.len() == vertex_count
    }

    pub fn to_record(&self) -> AcceptanceRecord {
        AcceptanceRecord {
            start: self.start,
            path: self.path.to_vec(),
            cost: self.cost,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AcceptanceRecord {
    pub start: usize,
    pub path: Vec<usize>,
    pub cost: f64,
}

/// Receives every acceptance in search order.
pub trait AcceptanceObserver {
    fn on_accept(&mut self, event: &Acceptance<'_>);
}

impl<F> AcceptanceObserver for F
where
    F: FnMut(&Acceptance<'_>),
{
    fn on_accept(&mut self, event: &Acceptance<'_>) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl AcceptanceObserver for Silent {
    fn on_accept(&mut self, _event: &Acceptance<'_>) {}
}

/// Observer that keeps an owned copy of every event.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<AcceptanceRecord>,
}

impl AcceptanceObserver for Recorder {
    fn on_accept(&mut self, event: &Acceptance<'_>) {
        self.events.push(event.to_record());
    }
}
