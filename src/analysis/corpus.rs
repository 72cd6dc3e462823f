use crate::error::{MorphologyError, Result};

use regex::Regex;

/// Splits raw text into word tokens: runs of letters and combining marks.
pub struct CorpusTokenizer {
    word: Regex,
}

impl CorpusTokenizer {
    pub fn new() -> Result<Self> {
        let word = Regex::new(r"[\p{L}\p{M}]+")
            .map_err(|e| MorphologyError::Internal(format!("corpus tokenizer: {}", e)))?;
        Ok(Self { word })
    }

    /// Tokens in text order, duplicates kept so every occurrence counts.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.word
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
