//! Concrete publish sinks.

pub mod jsonl;

pub use jsonl::JsonlSink;
