//! Command-line arguments and the optional TOML config file.
//!
//! Precedence: CLI flag, then environment variable, then config file, then
//! built-in default.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use oddfacts_core::{Language, StalePolicy, session::DEFAULT_MIN_VISIBLE};
use oddfacts_http::{
  DEFAULT_FACTS_URL, DEFAULT_TIMEOUT, DEFAULT_TRANSLATE_URL, HttpConfig,
};
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Default)]
#[command(name = "oddfacts", version, about = "Random useless facts in your terminal")]
pub struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Display language: `en` or `it`.
  #[arg(short, long, env = "ODDFACTS_LANGUAGE")]
  pub language: Option<Language>,

  /// Random-fact endpoint.
  #[arg(long, env = "ODDFACTS_FACTS_URL")]
  pub facts_url: Option<String>,

  /// Translation endpoint (MyMemory-compatible).
  #[arg(long, env = "ODDFACTS_TRANSLATE_URL")]
  pub translate_url: Option<String>,

  /// Per-request timeout in seconds.
  #[arg(long, value_name = "SECS")]
  pub timeout_secs: Option<u64>,

  /// How long the loading state stays visible after a fetch resolves.
  #[arg(long, value_name = "MS")]
  pub min_visible_ms: Option<u64>,

  /// What to do with responses that arrive after a language switch:
  /// `discard` or `apply`.
  #[arg(long, value_name = "POLICY")]
  pub stale_responses: Option<StalePolicy>,

  /// Where to write logs while the TUI owns the terminal.
  #[arg(long, value_name = "FILE")]
  pub log_file: Option<PathBuf>,

  /// Print one fact to stdout and exit.
  #[arg(long)]
  pub once: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
  pub language:        Option<Language>,
  pub facts_url:       Option<String>,
  pub translate_url:   Option<String>,
  pub timeout_secs:    Option<u64>,
  pub min_visible_ms:  Option<u64>,
  pub stale_responses: Option<StalePolicy>,
}

impl ConfigFile {
  /// Read `path`, or return the empty config when no path is given.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let Some(path) = path else {
      return Ok(Self::default());
    };
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw)
      .with_context(|| format!("parsing config file {}", path.display()))
  }
}

// ─── Resolved settings ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Settings {
  pub language:     Language,
  pub http:         HttpConfig,
  pub min_visible:  Duration,
  pub stale_policy: StalePolicy,
}

impl Settings {
  /// Merge CLI arguments over the config file over the defaults.
  pub fn resolve(args: &Args, file: ConfigFile) -> Self {
    let timeout = args
      .timeout_secs
      .or(file.timeout_secs)
      .map(Duration::from_secs)
      .unwrap_or(DEFAULT_TIMEOUT);

    Self {
      language: args.language.or(file.language).unwrap_or_default(),
      http: HttpConfig {
        facts_url: args
          .facts_url
          .clone()
          .or(file.facts_url)
          .unwrap_or_else(|| DEFAULT_FACTS_URL.to_string()),
        translate_url: args
          .translate_url
          .clone()
          .or(file.translate_url)
          .unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string()),
        timeout,
      },
      min_visible: args
        .min_visible_ms
        .or(file.min_visible_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_MIN_VISIBLE),
      stale_policy: args
        .stale_responses
        .or(file.stale_responses)
        .unwrap_or_default(),
    }
  }
}
