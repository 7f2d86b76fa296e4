//! Application services - orchestrate use cases.
//!
//! Services wrap the domain types and ports for drivers such as the CLI.

pub mod accumulator_service;
pub mod snapshot_service;

pub use accumulator_service::{AccumulatorService, PairedRow};
pub use snapshot_service::SnapshotService;
