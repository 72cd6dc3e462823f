//! Corpus frequency ledger.
//!
//! Counts are keyed by `(root, word)`. A derivative the ledger has never seen
//! reports the configured default.

use crate::error::{MorphologyError, Result};
use crate::lexicon::import::split_fields;

use dashmap::DashMap;

pub struct FrequencyLedger {
    counts: DashMap<(String, String), u64>,
    default_frequency: u64,
}

impl FrequencyLedger {
    pub fn new(default_frequency: u64) -> Self {
        Self {
            counts: DashMap::new(),
            default_frequency,
        }
    }

    /// Recorded count, or the default when nothing was recorded.
    pub fn frequency_of(&self, root: &str, word: &str) -> u64 {
        self.counts
            .get(&(root.to_string(), word.to_string()))
            .map(|count| *count)
            .unwrap_or(self.default_frequency)
    }

    pub fn record(&self, root: &str, word: &str, count: u64) {
        self.counts
            .insert((root.to_string(), word.to_string()), count);
    }

    /// Adds one corpus hit, saturating at `u64::MAX`. The first hit replaces the
    /// default rather than adding to it.
    pub fn increment(&self, root: &str, word: &str) -> u64 {
        let mut entry = self
            .counts
            .entry((root.to_string(), word.to_string()))
            .or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }

    /// Number of `(root, word)` pairs with a recorded count.
    pub fn recorded(&self) -> usize {
        self.counts.len()
    }
}

/// A parsed `root|word|count` line. The root is not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyLine<'a> {
    pub root: &'a str,
    pub word: &'a str,
    pub count: u64,
}

pub fn parse_frequency_line(line_no: usize, line: &str) -> Result<FrequencyLine<'_>> {
    let fields = split_fields(line_no, line, 3)?;
    if fields[1].is_empty() {
        return Err(MorphologyError::malformed_line(line_no, "word is empty"));
    }
    let count = fields[2].parse::<u64>().map_err(|_| {
        MorphologyError::malformed_line(
            line_no,
            format!("count must be a non-negative integer, got '{}'", fields[2]),
        )
    })?;
    Ok(FrequencyLine {
        root: fields[0],
        word: fields[1],
        count,
    })
}
