// ─────────────────────────────────────────────────────────────────────
// Hackergate — Command Line Front End
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! `hackergate` asks you to finish the sentence `I ... hacker` and
//! decides whether you get in.
//!
//! ```text
//! hackergate                 # pick words from a menu
//! hackergate "ain't no"     # judge a sentence directly
//! hackergate --no-pace --json am a
//! ```

mod builder;
mod console;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use hackergate_core::DecisionEngine;
use hackergate_types::{GateConfig, SlangRule};

use crate::builder::{parse_words, WordPicker};
use crate::console::ConsoleReporter;

#[derive(Parser, Debug)]
#[command(name = "hackergate", version, about = "Prove you are not a hacker")]
struct Cli {
    /// Sentence words, e.g. `ain't no`. Omit to pick interactively.
    words: Vec<String>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay after each status line, in milliseconds.
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Print status lines without delay.
    #[arg(long, conflicts_with = "pace_ms")]
    no_pace: bool,

    /// Offer already-chosen words again in the picker.
    #[arg(long)]
    allow_repeats: bool,

    /// Reading of the slang pair `ain't no`.
    #[arg(long, value_enum)]
    slang_rule: Option<SlangArg>,

    /// Print the run outcome as JSON after the status lines.
    #[arg(long)]
    json: bool,

    /// Debug logging (overrides RUST_LOG).
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only (overrides RUST_LOG).
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SlangArg {
    Collapse,
    KeepArticle,
}

impl From<SlangArg> for SlangRule {
    fn from(arg: SlangArg) -> Self {
        match arg {
            SlangArg::Collapse => SlangRule::Collapse,
            SlangArg::KeepArticle => SlangRule::KeepArticle,
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn load_config(cli: &Cli) -> Result<GateConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GateConfig::from_json(&json)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => GateConfig::default(),
    };

    if let Some(pace_ms) = cli.pace_ms {
        config.pace_ms = pace_ms;
    }
    if cli.no_pace {
        config.pace_ms = 0;
    }
    if cli.allow_repeats {
        config.allow_repeated_words = true;
    }
    if let Some(rule) = cli.slang_rule {
        config.slang_rule = rule.into();
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    let config = load_config(&cli)?;
    log::debug!("effective config: {config:?}");

    let sentence = if cli.words.is_empty() {
        let stdin = io::stdin();
        WordPicker::new(stdin.lock(), io::stdout(), config.allow_repeated_words).pick()?
    } else {
        parse_words(&cli.words)?
    };

    let reporter = Arc::new(ConsoleReporter::stdout(Duration::from_millis(config.pace_ms)));
    let engine = DecisionEngine::with_config(config, reporter);
    let outcome = engine.run(&sentence);

    if cli.json {
        let json = serde_json::to_string_pretty(&outcome).context("serializing outcome")?;
        println!("{json}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from([
            "hackergate",
            "--no-pace",
            "--allow-repeats",
            "--slang-rule",
            "keep-article",
            "ain't",
            "no",
        ]);
        assert_eq!(cli.words, vec!["ain't", "no"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.pace_ms, 0);
        assert!(config.allow_repeated_words);
        assert_eq!(config.slang_rule, SlangRule::KeepArticle);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hackergate"]);
        assert!(cli.words.is_empty());
        assert_eq!(load_config(&cli).unwrap(), GateConfig::default());
    }

    #[test]
    fn test_cli_pace_out_of_range() {
        let cli = Cli::parse_from(["hackergate", "--pace-ms", "99999", "am", "a"]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_cli_no_pace_conflicts_with_pace_ms() {
        let res = Cli::try_parse_from(["hackergate", "--no-pace", "--pace-ms", "10"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["hackergate", "--config", "/nonexistent/hackergate.json"]);
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
