//! Streamseed library crate.
//!
//! Exposes the track catalog, event publisher, and sinks for the CLI.

pub mod catalog;
pub mod core;
pub mod names;
pub mod publisher;
pub mod sinks;
pub mod table;

pub use crate::core::config;
pub use crate::core::event;
pub use crate::core::traits;
