//! Phonological clash table.
//!
//! A rule forbids a class of letters in one slot of one pattern (or of every
//! pattern). The table is data: it is parsed from `class|slot|pattern|reason`
//! lines where `class` is `weak`, `hamza` or a single letter, `slot` is 1-3 and
//! `pattern` is a pattern name or `*`.

use crate::error::{MorphologyError, Result};
use crate::lexicon::import::{meaningful_lines, split_fields};
use crate::lexicon::types::{Pattern, Root, is_hamza, is_weak};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterClass {
    Weak,
    Hamza,
    Letter(char),
}

impl LetterClass {
    pub fn matches(&self, c: char) -> bool {
        match self {
            LetterClass::Weak => is_weak(c),
            LetterClass::Hamza => is_hamza(c),
            LetterClass::Letter(l) => *l == c,
        }
    }

    fn parse(field: &str) -> Option<Self> {
        match field {
            "weak" => Some(LetterClass::Weak),
            "hamza" => Some(LetterClass::Hamza),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(LetterClass::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashRule {
    pub class: LetterClass,
    pub slot: usize,
    /// `None` applies the rule to every pattern.
    pub pattern: Option<String>,
    pub reason: String,
}

impl ClashRule {
    fn applies(&self, root: &Root, pattern: &Pattern) -> bool {
        let pattern_matches = self.pattern.as_deref().map_or(true, |p| p == pattern.name);
        pattern_matches
            && root
                .letter(self.slot)
                .is_some_and(|letter| self.class.matches(letter))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClashTable {
    rules: Vec<ClashRule>,
}

impl ClashTable {
    pub fn new(rules: Vec<ClashRule>) -> Self {
        Self { rules }
    }

    /// Parses a whole table. Any bad line rejects the table.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rules = Vec::new();
        for (line_no, line) in meaningful_lines(text) {
            let fields = split_fields(line_no, line, 4)?;

            let class = LetterClass::parse(fields[0]).ok_or_else(|| {
                MorphologyError::malformed_line(
                    line_no,
                    format!("unknown letter class '{}'", fields[0]),
                )
            })?;
            let slot = match fields[1].parse::<usize>() {
                Ok(slot @ 1..=3) => slot,
                _ => {
                    return Err(MorphologyError::malformed_line(
                        line_no,
                        format!("slot must be 1, 2 or 3, got '{}'", fields[1]),
                    ));
                }
            };
            let pattern = match fields[2] {
                "*" | "" => None,
                name => Some(name.to_string()),
            };

            rules.push(ClashRule {
                class,
                slot,
                pattern,
                reason: fields[3].to_string(),
            });
        }
        Ok(Self { rules })
    }

    /// First rule forbidding `root` in `pattern`, if any.
    pub fn find(&self, root: &Root, pattern: &Pattern) -> Option<&ClashRule> {
        self.rules.iter().find(|rule| rule.applies(root, pattern))
    }

    pub fn rules(&self) -> &[ClashRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
