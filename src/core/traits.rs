use crate::core::event::ListenEvent;
use std::time::Duration;

/// Opaque sink-assigned acknowledgment for one published record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    marker: String,
}

impl Ack {
    /// Wraps a sink-assigned marker (shard label, offset, etc.).
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Returns the raw marker string.
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

/// Error reported by a sink for a single publish attempt.
#[derive(Debug, Clone)]
pub struct PublishError {
    message: String,
}

impl PublishError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "publish failed: {}", self.message)
    }
}

impl std::error::Error for PublishError {}

/// Accepts one record per call and routes it by partition key.
pub trait PublishSink {
    /// Publishes a single event, returning the sink's acknowledgment.
    fn publish(&mut self, event: &ListenEvent, partition_key: &str)
        -> Result<Ack, PublishError>;
}

/// Produces plausible human names for generated records.
pub trait NameSource {
    /// Returns one full name.
    fn full_name(&mut self) -> String;
}

/// Controls the pause between consecutive publishes.
pub trait Pacer {
    /// Suspends the caller for `interval`.
    fn pause(&mut self, interval: Duration);
}

/// Pacer that blocks the calling thread.
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}
