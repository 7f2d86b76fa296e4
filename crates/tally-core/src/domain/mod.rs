// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Tally.
//!
//! Pure values and entities with no I/O. The snapshot store itself is a port
//! (see `crate::application::ports`); the domain only defines what goes in
//! and what comes out of it.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, network, or console
//! - **Absence is not an error**: lookups answer with [`Lookup`]
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    accumulator::{Accumulator, create_accumulator, make_adder},
    operation::{OpOutcome, StoreOp},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Lookup, Record};
