//! Consonant alphabets.
//!
//! A root may only be spelled with consonants of the configured alphabet.
//! The alphabet also owns input normalization and the default residue symbols.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Alef maqsura, folded to ya before validation.
const ALEF_MAQSURA: char = '\u{0649}';
const YA: char = '\u{064A}';
const ALEF: char = '\u{0627}';
const TATWEEL: char = '\u{0640}';

/// Clitics, prepositions and feminine markers that commonly surround a base word.
const ARABIC_AFFIX_LETTERS: &str = "الوفبكستنيهمةأ";
const LATIN_AFFIX_LETTERS: &str = "aeiousnt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Arabic,
    Latin,
}

impl Alphabet {
    /// Whether `c` may appear in a root.
    pub fn is_consonant(&self, c: char) -> bool {
        match self {
            Alphabet::Arabic => {
                ('\u{0621}'..=YA).contains(&c) && c != ALEF && c != TATWEEL && c != ALEF_MAQSURA
            }
            Alphabet::Latin => c.is_ascii_lowercase() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'),
        }
    }

    /// Trims the input and folds letter variants to their canonical form.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self {
            Alphabet::Arabic => trimmed
                .chars()
                .map(|c| if c == ALEF_MAQSURA { YA } else { c })
                .collect(),
            Alphabet::Latin => trimmed.to_lowercase(),
        }
    }

    pub fn default_affixes(&self) -> BTreeSet<char> {
        match self {
            Alphabet::Arabic => {
                // harakat, shadda and sukun
                let marks = '\u{064B}'..='\u{0652}';
                ARABIC_AFFIX_LETTERS.chars().chain(marks).collect()
            }
            Alphabet::Latin => LATIN_AFFIX_LETTERS.chars().collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arabic" => Ok(Alphabet::Arabic),
            "latin" => Ok(Alphabet::Latin),
            other => Err(anyhow::anyhow!(
                "unknown alphabet '{}', expected 'arabic' or 'latin'",
                other
            )),
        }
    }
}
