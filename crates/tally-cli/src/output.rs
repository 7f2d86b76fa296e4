//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

/// The format this run renders in.
///
/// `--output-format` beats `output.format`; `auto` then becomes
/// `human` on a TTY and `plain` otherwise. Never returns `Auto`.
pub fn resolve_format(args: &GlobalArgs, config: &AppConfig) -> OutputFormat {
    resolve(args.output_format, config, io::stdout().is_terminal())
}

fn resolve(flag: Option<OutputFormat>, config: &AppConfig, tty: bool) -> OutputFormat {
    match flag.unwrap_or(config.output.format) {
        OutputFormat::Auto if tty => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        explicit => explicit,
    }
}

impl OutputManager {
    /// Build an `OutputManager` for an already resolved format.
    pub fn new(resolved_format: OutputFormat, args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// A `found`/`missing` flag, coloured green/red in human mode.
    pub fn flag(&self, found: bool) -> String {
        match (found, self.no_color) {
            (true, true) => "true".into(),
            (false, true) => "false".into(),
            (true, false) => "true".green().to_string(),
            (false, false) => "false".red().to_string(),
        }
    }

    /// Pretty JSON on stdout.
    ///
    /// Not suppressed by `--quiet`: asking for JSON means asking for the data.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when the caller asked for JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: Option<OutputFormat>, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        }
    }

    fn config_with(format: OutputFormat) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.output.format = format;
        cfg
    }

    fn make_manager(format: OutputFormat, no_color: bool) -> OutputManager {
        OutputManager::new(format, &args(Some(format), no_color), &AppConfig::default())
    }

    #[test]
    fn explicit_flag_is_kept() {
        let cfg = AppConfig::default();
        assert_eq!(resolve(Some(OutputFormat::Plain), &cfg, true), OutputFormat::Plain);
        assert_eq!(resolve(Some(OutputFormat::Json), &cfg, false), OutputFormat::Json);
    }

    #[test]
    fn config_format_applies_when_flag_is_absent() {
        let cfg = config_with(OutputFormat::Json);
        assert_eq!(resolve(None, &cfg, true), OutputFormat::Json);
    }

    #[test]
    fn explicit_auto_beats_config() {
        let cfg = config_with(OutputFormat::Json);
        assert_eq!(resolve(Some(OutputFormat::Auto), &cfg, false), OutputFormat::Plain);
        assert_eq!(resolve(Some(OutputFormat::Auto), &cfg, true), OutputFormat::Human);
    }

    #[test]
    fn auto_follows_the_terminal() {
        let cfg = AppConfig::default();
        assert_eq!(resolve(None, &cfg, true), OutputFormat::Human);
        assert_eq!(resolve(None, &cfg, false), OutputFormat::Plain);
    }

    #[test]
    fn plain_format_never_colours() {
        let out = make_manager(OutputFormat::Plain, false);
        assert_eq!(out.flag(true), "true");
        assert_eq!(out.flag(false), "false");
        assert!(!out.is_json());
    }

    #[test]
    fn human_format_colours_flags() {
        let out = make_manager(OutputFormat::Human, false);
        assert_ne!(out.flag(true), "true");
        assert!(out.flag(true).contains("true"));
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        let out = OutputManager::new(OutputFormat::Human, &args(None, false), &cfg);
        assert_eq!(out.flag(false), "false");
    }
}
