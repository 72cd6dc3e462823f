//! Lazily materialized derivatives per root.
//!
//! Each entry remembers the pattern epoch it was built against. Pattern
//! mutations bump the epoch, which stales every entry at once; root and
//! frequency mutations mark a single entry dirty. Reads rebuild whatever is
//! stale.
//!
//! Callers must hold the lexicon read guard across [`DerivationIndex::derivatives`]
//! and the write guard across every invalidation, so a rebuild never races
//! the mutation that invalidated it.

use super::frequency::FrequencyLedger;
use super::types::Derivative;
use crate::lexicon::store::LexiconState;
use crate::lexicon::types::Root;
use crate::synthesis::template::Synthesizer;

use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

struct IndexEntry {
    derivatives: Arc<Vec<Derivative>>,
    epoch: u64,
    dirty: bool,
}

pub struct DerivationIndex {
    entries: DashMap<String, IndexEntry>,
    pattern_epoch: AtomicU64,
}

impl Default for DerivationIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl DerivationIndex {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            pattern_epoch: AtomicU64::new(0),
        }
    }

    /// Derivatives of `root` in pattern order, rebuilding the entry if stale.
    pub fn derivatives(
        &self,
        state: &LexiconState,
        synthesizer: &Synthesizer,
        ledger: &FrequencyLedger,
        root: &Root,
    ) -> Arc<Vec<Derivative>> {
        let epoch = self.pattern_epoch.load(Ordering::Acquire);
        if let Some(entry) = self.entries.get(root.as_str()) {
            if !entry.dirty && entry.epoch == epoch {
                return entry.derivatives.clone();
            }
        }

        let derivatives = Arc::new(build(state, synthesizer, ledger, root));
        tracing::debug!(
            "Rebuilt index entry for {} ({} derivatives)",
            root,
            derivatives.len()
        );
        self.entries.insert(
            root.to_string(),
            IndexEntry {
                derivatives: derivatives.clone(),
                epoch,
                dirty: false,
            },
        );
        derivatives
    }

    /// Marks one root's entry for rebuild on the next read.
    pub fn invalidate_root(&self, root: &str) {
        if let Some(mut entry) = self.entries.get_mut(root) {
            entry.dirty = true;
        }
    }

    pub fn evict_root(&self, root: &str) {
        self.entries.remove(root);
    }

    /// Stales every entry. Used after any pattern mutation.
    pub fn invalidate_all(&self) {
        let epoch = self.pattern_epoch.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!("Derivation index invalidated (epoch {})", epoch);
    }

    /// Roots whose entries are currently valid.
    pub fn cached_roots(&self) -> BTreeSet<String> {
        let epoch = self.pattern_epoch.load(Ordering::Acquire);
        self.entries
            .iter()
            .filter(|entry| !entry.dirty && entry.epoch == epoch)
            .map(|entry| entry.key().clone())
            .collect()
    }
}

fn build(
    state: &LexiconState,
    synthesizer: &Synthesizer,
    ledger: &FrequencyLedger,
    root: &Root,
) -> Vec<Derivative> {
    state
        .patterns()
        .iter()
        .filter_map(|pattern| match synthesizer.generate(root, pattern) {
            Ok(word) => Some(Derivative {
                root: root.to_string(),
                pattern: pattern.name.clone(),
                frequency: ledger.frequency_of(root.as_str(), &word),
                word,
            }),
            Err(e) => {
                tracing::debug!("Skipping derivative: {}", e);
                None
            }
        })
        .collect()
}
