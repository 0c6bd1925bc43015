use std::io::{self, Write};

use clap::ValueEnum;
use hampath_core::{Acceptance, AcceptanceObserver, AcceptanceRecord, BestPath, SearchOutcome};
use serde::Serialize;

const RULE_WIDTH: usize = 64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Accepted paths as they are found, then the result table
    #[default]
    Text,
    /// A single JSON document written after the search
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    vertices: usize,
    events: &'a [AcceptanceRecord],
    results: &'a [Option<BestPath>],
    stats: &'a hampath_core::SearchStats,
}

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Streams acceptances to `out` while the search runs.
///
/// Write errors cannot unwind through the search, so the first one is kept and
/// surfaced by [`Reporter::finish`].
pub struct Reporter<W: Write> {
    out: W,
    format: Format,
    all_events: bool,
    vertices: usize,
    events: Vec<AcceptanceRecord>,
    error: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: Format, all_events: bool, vertices: usize) -> Self {
        Reporter {
            out,
            format,
            all_events,
            vertices,
            events: Vec::new(),
            error: None,
        }
    }

    fn write_event(&mut self, event: &Acceptance<'_>) -> io::Result<()> {
        rule(&mut self.out)?;
        writeln!(
            self.out,
            "Source: {} Path: {:?} Cost: {}",
            event.start, event.path, event.cost
        )
    }

    pub fn finish(mut self, outcome: &SearchOutcome) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        match self.format {
            Format::Text => {
                rule(&mut self.out)?;
                writeln!(self.out)?;
                for (start, slot) in outcome.results.iter().enumerate() {
                    match slot {
                        Some(best) => {
                            writeln!(self.out, "{start}: {:?} (cost {})", best.path, best.cost)?
                        }
                        None => writeln!(self.out, "{start}: None")?,
                    }
                }
            }
            Format::Json => {
                let report = JsonReport {
                    vertices: self.vertices,
                    events: &self.events,
                    results: &outcome.results,
                    stats: &outcome.stats,
                };
                serde_json::to_writer_pretty(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }

        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> AcceptanceObserver for Reporter<W> {
    fn on_accept(&mut self, event: &Acceptance<'_>) {
        if self.error.is_some() || !(self.all_events || event.is_complete(self.vertices)) {
            return;
        }

        match self.format {
            Format::Text => {
                if let Err(err) = self.write_event(event) {
                    self.error = Some(err);
                }
            }
            Format::Json => self.events.push(event.to_record()),
        }
    }
}
