use crate::catalog::{CatalogError, TrackCatalog};
use crate::core::event::ListenEvent;
use crate::core::traits::{Ack, NameSource, Pacer, PublishError, PublishSink, ThreadPacer};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Upper bound (inclusive) for generated listener identifiers.
pub const USER_ID_MAX: u32 = 5000;

/// Result of one publish attempt.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// Zero-based position of the record in the run.
    pub sequence: u64,
    /// Sink acknowledgment on success, the captured error on failure.
    pub result: Result<Ack, PublishError>,
}

impl PublishOutcome {
    /// Whether this record reached the sink.
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-run report with one outcome per attempted record.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Outcomes in publish order.
    pub outcomes: Vec<PublishOutcome>,
}

impl RunSummary {
    /// Number of records attempted.
    pub fn attempted(&self) -> u64 {
        self.outcomes.len() as u64
    }

    /// Number of records the sink acknowledged.
    pub fn succeeded(&self) -> u64 {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.succeeded())
            .count() as u64
    }
}

/// Generates listen events over a catalog and publishes them one at a time
/// at a fixed cadence, capturing per-record outcomes.
///
/// A failed publish never aborts the run; retry policy, if wanted, belongs
/// to the injected sink.
pub struct EventPublisher {
    catalog: TrackCatalog,
    rng: StdRng,
    names: Box<dyn NameSource>,
}

impl EventPublisher {
    /// Builds a publisher over a catalog with an optional RNG seed.
    pub fn new(catalog: TrackCatalog, names: Box<dyn NameSource>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            catalog,
            rng,
            names,
        }
    }

    /// Publishes `count` events with `interval` between consecutive records.
    ///
    /// `count == 0` is a valid no-op. There is no pause after the last
    /// record.
    pub fn run(
        &mut self,
        count: u64,
        interval: Duration,
        sink: &mut dyn PublishSink,
    ) -> Result<RunSummary, CatalogError> {
        self.run_paced(count, interval, sink, &mut ThreadPacer)
    }

    /// Like [`EventPublisher::run`], with an explicit pacer for the
    /// inter-record pause.
    pub fn run_paced(
        &mut self,
        count: u64,
        interval: Duration,
        sink: &mut dyn PublishSink,
        pacer: &mut dyn Pacer,
    ) -> Result<RunSummary, CatalogError> {
        let mut outcomes = Vec::with_capacity(count as usize);
        for sequence in 0..count {
            let event = self.next_event()?;
            let partition_key = event.user_id.to_string();
            let result = sink.publish(&event, &partition_key);
            outcomes.push(PublishOutcome { sequence, result });
            if sequence + 1 < count {
                pacer.pause(interval);
            }
        }
        Ok(RunSummary { outcomes })
    }

    fn next_event(&mut self) -> Result<ListenEvent, CatalogError> {
        let user_id = self.rng.gen_range(0..=USER_ID_MAX);
        let user_name = self.names.full_name();
        let track_id = self.catalog.sample(&mut self.rng)?.to_string();
        let like = self.rng.gen_range(0..=1u8);
        // Captured after sampling so each record carries its own instant.
        let timestamp = unix_seconds();
        Ok(ListenEvent {
            user_id,
            user_name,
            track_id,
            like,
            timestamp,
        })
    }
}

fn unix_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
