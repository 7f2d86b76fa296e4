//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tally",
    bin_name = "tally",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Running totals and a keyed record store",
    long_about = "Tally drives two independent components: accumulators that \
                  each keep a private running total, and an in-memory store \
                  that reports missing keys instead of failing on them.",
    after_help = "EXAMPLES:\n\
        \x20 tally accumulate 5 -2 0\n\
        \x20 tally closures --rounds 10\n\
        \x20 tally store put:default=5,8 get:default delete:default get:default\n\
        \x20 tally demo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Feed deltas to one fresh accumulator.
    #[command(
        visible_alias = "acc",
        about = "Feed deltas to a fresh accumulator",
        after_help = "EXAMPLES:\n\
            \x20 tally accumulate 5 -2 0\n\
            \x20 tally accumulate --checked 9223372036854775807 1"
    )]
    Accumulate(AccumulateArgs),

    /// Run two accumulators side by side.
    #[command(
        about = "Show two independent accumulators side by side",
        after_help = "EXAMPLES:\n\
            \x20 tally closures\n\
            \x20 tally closures --rounds 3"
    )]
    Closures(ClosuresArgs),

    /// Run a script of store operations.
    #[command(
        visible_alias = "kv",
        about = "Run store operations against a fresh store",
        after_help = "OPERATIONS:\n\
            \x20 put:KEY=VALUE,NEXT   insert or overwrite\n\
            \x20 get:KEY              look up (prints the zero record and false when absent)\n\
            \x20 delete:KEY | del:KEY remove (no-op when absent)\n\n\
            EXAMPLES:\n\
            \x20 tally store put:default=5,8 get:default delete:default get:default"
    )]
    Store(StoreArgs),

    /// Run the reference scenarios for both components.
    #[command(about = "Run the accumulator and store scenarios")]
    Demo,

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tally init\n\
            \x20 tally init --force\n\
            \x20 tally init --path ./tally.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tally completions bash > ~/.local/share/bash-completion/completions/tally\n\
            \x20 tally completions zsh  > ~/.zfunc/_tally\n\
            \x20 tally completions fish > ~/.config/fish/completions/tally.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Tally configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tally config get demo.rounds\n\
            \x20 tally config list\n\
            \x20 tally config path"
    )]
    Config(ConfigCommands),
}

// ── accumulate ────────────────────────────────────────────────────────────────

/// Arguments for `tally accumulate`.
#[derive(Debug, Args)]
pub struct AccumulateArgs {
    /// Deltas to add, in order.
    #[arg(
        value_name = "DELTA",
        required = true,
        allow_negative_numbers = true,
        help = "Signed integers to add, in order"
    )]
    pub deltas: Vec<i64>,

    /// Fail on 64-bit overflow instead of wrapping.
    #[arg(long = "checked", help = "Fail on overflow instead of wrapping")]
    pub checked: bool,
}

// ── closures ──────────────────────────────────────────────────────────────────

/// Arguments for `tally closures`.
#[derive(Debug, Args)]
pub struct ClosuresArgs {
    /// Number of rounds (defaults to `demo.rounds` from config).
    #[arg(
        short = 'n',
        long = "rounds",
        value_name = "N",
        help = "Number of rounds"
    )]
    pub rounds: Option<u32>,
}

// ── store ─────────────────────────────────────────────────────────────────────

/// Arguments for `tally store`.
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Operations, run left to right against one store.
    #[arg(value_name = "OP", required = true, help = "Operations to run")]
    pub ops: Vec<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tally init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,

    /// Write here instead of the platform config directory.
    #[arg(long = "path", value_name = "FILE", help = "Destination file")]
    pub path: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tally completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tally config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `demo.rounds`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
