//! Tally Core - Hexagonal Architecture Implementation
//!
//! Two independent components and the plumbing around them:
//!
//! - **Accumulators**: handles over a private running total, advanced only by
//!   [`domain::Accumulator::add`]. Two accumulators never share state.
//! - **Snapshot store**: a keyed record store reached through the
//!   [`application::ports::SnapshotStore`] port. Lookups answer with
//!   [`domain::Lookup`], so a missing key is an ordinary outcome.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            tally-cli (CLI)              │
//! │        (demonstration driver)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (SnapshotService, AccumulatorService)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: SnapshotStore)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      tally-adapters (Infrastructure)    │
//! │       (InMemoryStore, SharedStore)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Accumulator, Record, Lookup, StoreOp)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::domain::create_accumulator;
//!
//! let mut acc = create_accumulator();
//! assert_eq!(acc.add(5), 5);
//! assert_eq!(acc.add(-2), 3);
//! assert_eq!(acc.add(0), 3);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AccumulatorService, PairedRow, SnapshotService, ports::SnapshotStore,
    };
    pub use crate::domain::{
        Accumulator, Lookup, OpOutcome, Record, StoreOp, create_accumulator, make_adder,
    };
    pub use crate::error::{TallyError, TallyResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
