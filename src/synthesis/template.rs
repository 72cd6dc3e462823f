use super::clash::ClashTable;
use crate::error::{MorphologyError, Result};
use crate::lexicon::types::{Pattern, Root, RuleSymbol};

/// Pure (root, pattern) -> word substitution, gated by the clash table.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    clashes: ClashTable,
}

impl Synthesizer {
    pub fn new(clashes: ClashTable) -> Self {
        Self { clashes }
    }

    pub fn generate(&self, root: &Root, pattern: &Pattern) -> Result<String> {
        if let Some(rule) = self.clashes.find(root, pattern) {
            return Err(MorphologyError::PhonologicalClash {
                root: root.to_string(),
                pattern: pattern.name.clone(),
                reason: rule.reason.clone(),
            });
        }
        Ok(substitute(root, pattern))
    }
}

/// Walks the rule left to right, replacing each slot with the root letter.
pub fn substitute(root: &Root, pattern: &Pattern) -> String {
    let letters = root.letters();
    pattern
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            RuleSymbol::Slot(k) => letters[k - 1],
            RuleSymbol::Fixed(c) => *c,
        })
        .collect()
}
