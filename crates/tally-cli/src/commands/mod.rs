//! Command handlers, one module per subcommand.

pub mod accumulate;
pub mod closures;
pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod store;
