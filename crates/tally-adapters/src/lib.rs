//! Infrastructure adapters for Tally.
//!
//! This crate implements the ports defined in `tally-core::application::ports`.

pub mod store;

// Re-export commonly used adapters
pub use store::{InMemoryStore, SharedStore};
