//! Inverse pattern matching.
//!
//! For every pattern and every way to split the word into
//! `prefix + base + suffix`, the base must line up with the pattern's fixed
//! symbols. The slot letters then name a candidate root, which is kept only if
//! it is stored and regenerating it reproduces the base. This finds exactly
//! the pairs a scan over all roots and patterns would, without touching roots
//! that cannot match.

use super::types::{DecompositionCandidate, MatchKind, Validation};
use crate::error::{MorphologyError, Result};
use crate::lexicon::store::LexiconState;
use crate::lexicon::types::{Pattern, Root};
use crate::synthesis::template::Synthesizer;

use std::collections::BTreeSet;

pub struct Resolver {
    affixes: BTreeSet<char>,
    max_residue: usize,
}

impl Resolver {
    pub fn new(affixes: BTreeSet<char>, max_residue: usize) -> Self {
        Self {
            affixes,
            max_residue,
        }
    }

    /// Every candidate, exact matches first, then shorter residue, then root
    /// order, then pattern order.
    pub fn find_all(
        &self,
        word: &str,
        state: &LexiconState,
        synthesizer: &Synthesizer,
    ) -> Vec<DecompositionCandidate> {
        let symbols: Vec<char> = state.alphabet().normalize(word).chars().collect();
        let mut candidates = Vec::new();

        for (order, pattern) in state.patterns().iter().enumerate() {
            let width = pattern.width();
            if width > symbols.len() {
                continue;
            }
            let slack = symbols.len() - width;
            if slack > self.max_residue {
                continue;
            }

            for start in 0..=slack {
                let (prefix, rest) = symbols.split_at(start);
                let (base, suffix) = rest.split_at(width);
                if !prefix.iter().chain(suffix).all(|c| self.affixes.contains(c)) {
                    continue;
                }
                let Some(root) = self.matching_root(base, pattern, state, synthesizer) else {
                    continue;
                };

                let matched = if slack == 0 {
                    MatchKind::Exact
                } else {
                    MatchKind::WithResidue(prefix.iter().chain(suffix).copied().collect())
                };
                candidates.push(DecompositionCandidate {
                    root: root.to_string(),
                    pattern: pattern.name.clone(),
                    rule: pattern.rule.clone(),
                    base: base.iter().collect(),
                    pattern_affixes: pattern.affixes(),
                    matched,
                    pattern_order: order,
                });
            }
        }

        candidates.sort_by(|a, b| {
            a.matched
                .residue_len()
                .cmp(&b.matched.residue_len())
                .then_with(|| a.root.cmp(&b.root))
                .then_with(|| a.pattern_order.cmp(&b.pattern_order))
        });
        candidates
    }

    /// The highest-ranked candidate.
    pub fn decompose(
        &self,
        word: &str,
        state: &LexiconState,
        synthesizer: &Synthesizer,
    ) -> Result<DecompositionCandidate> {
        self.find_all(word, state, synthesizer)
            .into_iter()
            .next()
            .ok_or_else(|| MorphologyError::NotFound {
                kind: "decomposition",
                key: state.alphabet().normalize(word),
            })
    }

    /// Exact-only check that `word` derives from `claimed_root`.
    pub fn validate(
        &self,
        word: &str,
        claimed_root: &str,
        state: &LexiconState,
        synthesizer: &Synthesizer,
    ) -> Validation {
        let normalized = state.alphabet().normalize(word);
        let word = normalized.as_str();
        let mut verdict = Validation {
            word: word.to_string(),
            root: claimed_root.trim().to_string(),
            valid: false,
            pattern: None,
            message: String::new(),
        };

        let root = match Root::parse(claimed_root, state.alphabet()) {
            Ok(root) => root,
            Err(e) => {
                verdict.message = e.to_string();
                return verdict;
            }
        };
        verdict.root = root.to_string();
        if state.root_by_key(root.as_str()).is_none() {
            verdict.message = format!("root '{}' is not in the lexicon", root);
            return verdict;
        }

        let exact = state.patterns().iter().find(|pattern| {
            synthesizer
                .generate(&root, pattern)
                .is_ok_and(|generated| generated == word)
        });
        if let Some(pattern) = exact {
            verdict.valid = true;
            verdict.pattern = Some(pattern.name.clone());
            verdict.message = format!("'{}' derives from '{}' via '{}'", word, root, pattern.name);
            return verdict;
        }

        let near = self
            .find_all(word, state, synthesizer)
            .into_iter()
            .find(|candidate| candidate.root == root.as_str());
        verdict.message = match near {
            Some(candidate) => format!(
                "'{}' does not derive exactly from '{}'; closest is '{}' via '{}' with residue {:?}",
                word,
                root,
                candidate.base,
                candidate.pattern,
                match &candidate.matched {
                    MatchKind::WithResidue(residue) => residue.iter().collect::<String>(),
                    MatchKind::Exact => String::new(),
                }
            ),
            None => format!("'{}' does not derive from '{}'", word, root),
        };
        verdict
    }

    fn matching_root<'s>(
        &self,
        base: &[char],
        pattern: &Pattern,
        state: &'s LexiconState,
        synthesizer: &Synthesizer,
    ) -> Option<&'s Root> {
        let letters = pattern.extract(base)?;
        let key: String = letters.iter().collect();
        let root = state.root_by_key(&key)?;
        let regenerated = synthesizer.generate(root, pattern).ok()?;
        regenerated.chars().eq(base.iter().copied()).then_some(root)
    }
}
