//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::keyboard::MAX_KEYS;
use crate::params::Waveform;

#[derive(Debug, Parser)]
#[command(name = "synthdial", version, about = "Control surface for a remote synthesizer")]
pub struct Cli {
    /// Config file (default: ~/.synthdial/config.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the play endpoint URL.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Interactive control surface (default).
    Ui {
        /// White keys in the keyboard drawing.
        #[arg(long, value_parser = parse_key_count)]
        keys: Option<usize>,
    },
    /// Send one play request and report the outcome.
    Play {
        /// Waveform: Sine, Square, Triangle or Sawtooth.
        #[arg(long, short)]
        waveform: Option<Waveform>,
        /// Set a dial before playing, as ID=VALUE. Repeatable.
        #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, f64)>,
        /// Print the request body instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print a keyboard layout.
    Keyboard {
        #[arg(long, value_parser = parse_key_count)]
        keys: Option<usize>,
    },
}

/// Parse a white-key count in `0..=MAX_KEYS`.
pub fn parse_key_count(s: &str) -> Result<usize, String> {
    let keys: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a key count"))?;
    if keys > MAX_KEYS {
        return Err(format!("at most {MAX_KEYS} keys, got {keys}"));
    }
    Ok(keys)
}

/// Parse `ID=VALUE`.
pub fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{s}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing dial id in '{s}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((id.to_string(), value))
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        match &self.command {
            Some(Command::Ui { keys: Some(keys) }) | Some(Command::Keyboard { keys: Some(keys) }) => {
                config.keyboard_keys = *keys;
            }
            _ => {}
        }
        config
    }
}
