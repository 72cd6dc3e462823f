//! The morphology engine instance.
//!
//! Owns the lexicon, the derivation index, the frequency ledger and the
//! synthesizer. Every mutation takes the write guard, applies the change and
//! invalidates the index before the guard is released. Reads take one read
//! guard for the whole operation.

use crate::analysis::corpus::CorpusTokenizer;
use crate::analysis::resolver::Resolver;
use crate::analysis::types::{CorpusReport, DecompositionCandidate, Validation};
use crate::config::EngineConfig;
use crate::derivation::frequency::{FrequencyLedger, parse_frequency_line};
use crate::derivation::index::DerivationIndex;
use crate::derivation::types::{Derivative, PatternWord, PatternWords, RootDerivatives};
use crate::error::{MorphologyError, Result};
use crate::lexicon::import::{ImportReport, meaningful_lines};
use crate::lexicon::protocol::RootInfo;
use crate::lexicon::store::{LexiconState, RootPage};
use crate::lexicon::types::{Pattern, Root};
use crate::stats::aggregator::aggregate;
use crate::stats::types::Statistics;
use crate::synthesis::clash::ClashTable;
use crate::synthesis::template::Synthesizer;
use crate::synthesis::types::{FamilyMember, GeneratedWord, WordFamily};

use parking_lot::RwLock;
use std::collections::BTreeSet;

pub struct MorphologyEngine {
    lexicon: RwLock<LexiconState>,
    index: DerivationIndex,
    ledger: FrequencyLedger,
    synthesizer: Synthesizer,
    resolver: Resolver,
    tokenizer: CorpusTokenizer,
    top_n: usize,
}

impl MorphologyEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_clash_table(config, ClashTable::default())
    }

    pub fn with_clash_table(config: &EngineConfig, clashes: ClashTable) -> Result<Self> {
        if !clashes.is_empty() {
            tracing::info!("Loaded {} clash rules", clashes.rules().len());
        }
        Ok(Self {
            lexicon: RwLock::new(LexiconState::new(config.alphabet)),
            index: DerivationIndex::new(),
            ledger: FrequencyLedger::new(config.default_frequency),
            synthesizer: Synthesizer::new(clashes),
            resolver: Resolver::new(config.affix_set(), config.max_residue),
            tokenizer: CorpusTokenizer::new()?,
            top_n: config.top_n,
        })
    }

    // ============================================================
    // Lexicon Store
    // ============================================================

    pub fn add_root(&self, raw: &str) -> Result<RootInfo> {
        let mut state = self.lexicon.write();
        let root = state.add_root(raw)?;
        self.index.invalidate_root(root.as_str());
        tracing::info!("Added root {}", root);
        Ok(RootInfo::from(&root))
    }

    pub fn delete_root(&self, raw: &str) -> Result<RootInfo> {
        let mut state = self.lexicon.write();
        let root = state.remove_root(raw)?;
        self.index.evict_root(root.as_str());
        tracing::info!("Deleted root {}", root);
        Ok(RootInfo::from(&root))
    }

    pub fn lookup_root(&self, raw: &str) -> Result<RootInfo> {
        let state = self.lexicon.read();
        state.require_root(raw).map(RootInfo::from)
    }

    /// Classifies a candidate root without storing it.
    pub fn analyze_root(&self, raw: &str) -> Result<RootInfo> {
        let alphabet = self.lexicon.read().alphabet();
        Root::parse(raw, alphabet).map(|root| RootInfo::from(&root))
    }

    pub fn list_roots(&self, prefix: Option<&str>, page: usize, page_size: usize) -> RootPage {
        self.lexicon.read().list_roots(prefix, page, page_size)
    }

    pub fn list_patterns(&self) -> Vec<Pattern> {
        self.lexicon.read().patterns().to_vec()
    }

    pub fn add_pattern(&self, name: &str, rule: &str) -> Result<Pattern> {
        let mut state = self.lexicon.write();
        let pattern = state.add_pattern(name, rule)?;
        self.index.invalidate_all();
        tracing::info!("Added pattern {} = {}", pattern.name, pattern.rule);
        Ok(pattern)
    }

    pub fn update_pattern(&self, name: &str, rule: &str) -> Result<Pattern> {
        let mut state = self.lexicon.write();
        let pattern = state.update_pattern(name, rule)?;
        self.index.invalidate_all();
        tracing::info!("Updated pattern {} = {}", pattern.name, pattern.rule);
        Ok(pattern)
    }

    pub fn delete_pattern(&self, name: &str) -> Result<Pattern> {
        let mut state = self.lexicon.write();
        let pattern = state.remove_pattern(name)?;
        self.index.invalidate_all();
        tracing::info!("Deleted pattern {}", pattern.name);
        Ok(pattern)
    }

    pub fn import_roots(&self, text: &str) -> ImportReport {
        let mut state = self.lexicon.write();
        let report = state.import_roots(text);
        for root in &report.accepted {
            self.index.invalidate_root(root);
        }
        tracing::info!(
            "Imported roots: {} succeeded, {} failed",
            report.succeeded,
            report.failed.len()
        );
        report
    }

    pub fn import_patterns(&self, text: &str) -> ImportReport {
        let mut state = self.lexicon.write();
        let report = state.import_patterns(text);
        if report.succeeded > 0 {
            self.index.invalidate_all();
        }
        tracing::info!(
            "Imported patterns: {} succeeded, {} failed",
            report.succeeded,
            report.failed.len()
        );
        report
    }

    // ============================================================
    // Template Substitution
    // ============================================================

    /// Generates one word. Both root and pattern must be stored.
    pub fn generate_word(&self, root: &str, pattern: &str) -> Result<GeneratedWord> {
        let state = self.lexicon.read();
        let root = state.require_root(root)?;
        let pattern = state.require_pattern(pattern)?;
        let word = self.synthesizer.generate(root, pattern)?;
        Ok(GeneratedWord {
            root: root.to_string(),
            pattern: pattern.name.clone(),
            rule: pattern.rule.clone(),
            word,
            root_type: root.root_type(),
        })
    }

    /// Applies every pattern to `root`, keeping failures alongside successes.
    pub fn generate_family(&self, root: &str) -> Result<WordFamily> {
        let state = self.lexicon.read();
        let root = state.require_root(root)?;
        let members: Vec<FamilyMember> = state
            .patterns()
            .iter()
            .map(|pattern| {
                let (word, error) = match self.synthesizer.generate(root, pattern) {
                    Ok(word) => (Some(word), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                FamilyMember {
                    pattern: pattern.name.clone(),
                    rule: pattern.rule.clone(),
                    word,
                    error,
                }
            })
            .collect();
        let generated = members.iter().filter(|m| m.word.is_some()).count();

        Ok(WordFamily {
            root: root.to_string(),
            root_type: root.root_type(),
            failed: members.len() - generated,
            generated,
            members,
        })
    }

    // ============================================================
    // Derivation Index
    // ============================================================

    pub fn derivatives_of(&self, root: &str) -> Result<RootDerivatives> {
        let state = self.lexicon.read();
        let root = state.require_root(root)?;
        let cached = self
            .index
            .derivatives(&state, &self.synthesizer, &self.ledger, root);

        let mut derivatives: Vec<Derivative> = cached.as_ref().clone();
        derivatives.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        let root_type = root.root_type();

        Ok(RootDerivatives {
            root: root.to_string(),
            root_type,
            root_type_name: root_type.arabic_name(),
            total_derivatives: derivatives.len(),
            total_frequency: derivatives
                .iter()
                .fold(0u64, |total, d| total.saturating_add(d.frequency)),
            derivatives,
        })
    }

    /// Every root's word for `pattern`, in root order. Roots that clash are left out.
    pub fn words_for_pattern(&self, pattern: &str) -> Result<PatternWords> {
        let state = self.lexicon.read();
        let pattern = state.require_pattern(pattern)?;
        let words: Vec<PatternWord> = state
            .roots()
            .filter_map(|root| {
                self.index
                    .derivatives(&state, &self.synthesizer, &self.ledger, root)
                    .iter()
                    .find(|d| d.pattern == pattern.name)
                    .map(|d| PatternWord {
                        root: d.root.clone(),
                        word: d.word.clone(),
                        frequency: d.frequency,
                    })
            })
            .collect();

        Ok(PatternWords {
            pattern: pattern.name.clone(),
            rule: pattern.rule.clone(),
            count: words.len(),
            words,
        })
    }

    pub fn generate_by_pattern(&self, pattern: &str) -> Result<PatternWords> {
        self.words_for_pattern(pattern)
    }

    pub fn cached_roots(&self) -> BTreeSet<String> {
        let _state = self.lexicon.read();
        self.index.cached_roots()
    }

    // ============================================================
    // Decomposition Resolver
    // ============================================================

    pub fn decompose(&self, word: &str) -> Result<DecompositionCandidate> {
        let state = self.lexicon.read();
        self.resolver.decompose(word, &state, &self.synthesizer)
    }

    pub fn find_all_roots(&self, word: &str) -> Vec<DecompositionCandidate> {
        let state = self.lexicon.read();
        self.resolver.find_all(word, &state, &self.synthesizer)
    }

    pub fn validate(&self, word: &str, claimed_root: &str) -> Validation {
        let state = self.lexicon.read();
        self.resolver
            .validate(word, claimed_root, &state, &self.synthesizer)
    }

    // ============================================================
    // Frequencies
    // ============================================================

    pub fn record_frequency(&self, root: &str, word: &str, count: u64) -> Result<Derivative> {
        let state = self.lexicon.write();
        let root = state.require_root(root)?;
        let word = state.alphabet().normalize(word);
        if word.is_empty() {
            return Err(MorphologyError::InvalidWord("word is empty".to_string()));
        }
        self.ledger.record(root.as_str(), &word, count);
        self.index.invalidate_root(root.as_str());
        tracing::info!("Recorded frequency {} for {} ({})", count, word, root);

        let pattern = state
            .patterns()
            .iter()
            .find(|p| {
                self.synthesizer
                    .generate(root, p)
                    .is_ok_and(|generated| generated == word)
            })
            .map(|p| p.name.clone())
            .unwrap_or_default();
        Ok(Derivative {
            root: root.to_string(),
            pattern,
            word: word.to_string(),
            frequency: count,
        })
    }

    /// Applies `root|word|count` lines. Unknown roots are rejected per line.
    pub fn import_frequencies(&self, text: &str) -> ImportReport {
        let state = self.lexicon.write();
        let mut report = ImportReport::default();
        for (line_no, line) in meaningful_lines(text) {
            let parsed = parse_frequency_line(line_no, line).and_then(|entry| {
                let root = state.require_root(entry.root)?;
                Ok((root.to_string(), entry))
            });
            match parsed {
                Ok((root, entry)) => {
                    let word = state.alphabet().normalize(entry.word);
                    self.ledger.record(&root, &word, entry.count);
                    self.index.invalidate_root(&root);
                    report.accept(format!("{}|{}", root, word));
                }
                Err(e) => report.reject(line_no, line, e),
            }
        }
        tracing::info!(
            "Imported frequencies: {} succeeded, {} failed",
            report.succeeded,
            report.failed.len()
        );
        report
    }

    /// Credits each token to its best decomposition.
    pub fn ingest_corpus(&self, text: &str) -> CorpusReport {
        let state = self.lexicon.write();
        let mut report = CorpusReport::default();
        for token in self.tokenizer.tokenize(text) {
            report.tokens += 1;
            match self.resolver.decompose(&token, &state, &self.synthesizer) {
                Ok(best) => {
                    self.ledger.increment(&best.root, &best.base);
                    if report.roots.insert(best.root.clone()) {
                        self.index.invalidate_root(&best.root);
                    }
                    report.credited += 1;
                }
                Err(_) => {
                    report.unmatched.insert(token);
                }
            }
        }
        tracing::info!(
            "Ingested corpus: {} tokens, {} credited, {} distinct unmatched",
            report.tokens,
            report.credited,
            report.unmatched.len()
        );
        report
    }

    // ============================================================
    // Statistics
    // ============================================================

    pub fn statistics(&self, top: Option<usize>) -> Statistics {
        let state = self.lexicon.read();
        aggregate(
            &state,
            &self.index,
            &self.synthesizer,
            &self.ledger,
            top.unwrap_or(self.top_n),
        )
    }
}
