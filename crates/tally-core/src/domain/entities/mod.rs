pub mod accumulator;
pub mod operation;
