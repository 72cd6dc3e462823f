//! Engine and server configuration.
//!
//! Values start from defaults, are overridden by `MORPHO_*` environment
//! variables and finally by command-line flags.

use crate::lexicon::alphabet::Alphabet;

use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_BIND: &str = "MORPHO_BIND";
pub const ENV_ALPHABET: &str = "MORPHO_ALPHABET";
pub const ENV_DEFAULT_FREQUENCY: &str = "MORPHO_DEFAULT_FREQUENCY";
pub const ENV_MAX_RESIDUE: &str = "MORPHO_MAX_RESIDUE";
pub const ENV_AFFIXES: &str = "MORPHO_AFFIXES";
pub const ENV_TOP_N: &str = "MORPHO_TOP_N";
pub const ENV_LOG_LEVEL: &str = "MORPHO_LOG_LEVEL";

pub const USAGE: &str = "Usage: morpho-engine [--bind <addr:port>] [--alphabet arabic|latin] \
[--roots <file>] [--patterns <file>] [--clash-table <file>] [--frequencies <file>]";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub bind: SocketAddr,
    pub alphabet: Alphabet,
    /// Frequency reported for a derivative the ledger has never seen. Either 0 or 1.
    pub default_frequency: u64,
    /// Upper bound on prefix + suffix symbols tolerated by decomposition.
    pub max_residue: usize,
    /// Residue symbols accepted by decomposition. `None` means the alphabet's defaults.
    pub affixes: Option<BTreeSet<char>>,
    pub top_n: usize,
    pub log_level: tracing::Level,
    pub roots_file: Option<PathBuf>,
    pub patterns_file: Option<PathBuf>,
    pub clash_table_file: Option<PathBuf>,
    pub frequencies_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            alphabet: Alphabet::Arabic,
            default_frequency: 1,
            max_residue: 6,
            affixes: None,
            top_n: 10,
            log_level: tracing::Level::INFO,
            roots_file: None,
            patterns_file: None,
            clash_table_file: None,
            frequencies_file: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(bind) = lookup(ENV_BIND) {
            config.bind = bind
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", ENV_BIND, bind))?;
        }
        if let Some(alphabet) = lookup(ENV_ALPHABET) {
            config.alphabet = alphabet.parse()?;
        }
        if let Some(freq) = lookup(ENV_DEFAULT_FREQUENCY) {
            let freq: u64 = freq
                .trim()
                .parse()
                .with_context(|| format!("{} must be 0 or 1", ENV_DEFAULT_FREQUENCY))?;
            if freq > 1 {
                bail!("{} must be 0 or 1, got {}", ENV_DEFAULT_FREQUENCY, freq);
            }
            config.default_frequency = freq;
        }
        if let Some(residue) = lookup(ENV_MAX_RESIDUE) {
            config.max_residue = residue
                .trim()
                .parse()
                .with_context(|| format!("{} must be a non-negative integer", ENV_MAX_RESIDUE))?;
        }
        if let Some(affixes) = lookup(ENV_AFFIXES) {
            config.affixes = Some(affixes.chars().filter(|c| !c.is_whitespace()).collect());
        }
        if let Some(top) = lookup(ENV_TOP_N) {
            config.top_n = top
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer", ENV_TOP_N))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("{} is not a log level: {}", ENV_LOG_LEVEL, level))?;
        }

        Ok(config)
    }

    /// Applies `--flag value` pairs on top of the current values. Unknown flags are skipped.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--bind" | "--alphabet" | "--roots" | "--patterns" | "--clash-table"
                | "--frequencies" => {
                    let value = args
                        .get(i + 1)
                        .with_context(|| format!("{} requires a value\n{}", flag, USAGE))?;
                    self.apply_flag(flag, value)?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(())
    }

    fn apply_flag(&mut self, flag: &str, value: &str) -> Result<()> {
        match flag {
            "--bind" => {
                self.bind = value
                    .parse()
                    .with_context(|| format!("--bind is not a socket address: {}", value))?
            }
            "--alphabet" => self.alphabet = value.parse()?,
            "--roots" => self.roots_file = Some(PathBuf::from(value)),
            "--patterns" => self.patterns_file = Some(PathBuf::from(value)),
            "--clash-table" => self.clash_table_file = Some(PathBuf::from(value)),
            "--frequencies" => self.frequencies_file = Some(PathBuf::from(value)),
            _ => {}
        }
        Ok(())
    }

    /// The residue symbol set decomposition should use.
    pub fn affix_set(&self) -> BTreeSet<char> {
        match &self.affixes {
            Some(affixes) => affixes.clone(),
            None => self.alphabet.default_affixes(),
        }
    }
}
