//! Shared configuration, event schema, and collaborator traits.

pub mod config;
pub mod event;
pub mod traits;
