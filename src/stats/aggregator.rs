use super::types::{RootFrequency, Statistics};
use crate::derivation::frequency::FrequencyLedger;
use crate::derivation::index::DerivationIndex;
use crate::lexicon::store::LexiconState;
use crate::synthesis::template::Synthesizer;

/// Rolls up the whole index. Recomputed on every call.
pub fn aggregate(
    state: &LexiconState,
    index: &DerivationIndex,
    synthesizer: &Synthesizer,
    ledger: &FrequencyLedger,
    top_n: usize,
) -> Statistics {
    let mut per_root: Vec<RootFrequency> = state
        .roots()
        .map(|root| {
            let derivatives = index.derivatives(state, synthesizer, ledger, root);
            RootFrequency {
                root: root.to_string(),
                derivatives: derivatives.len(),
                frequency: derivatives
                    .iter()
                    .fold(0u64, |total, d| total.saturating_add(d.frequency)),
            }
        })
        .collect();

    let total_roots = per_root.len();
    let total_derivatives: usize = per_root.iter().map(|r| r.derivatives).sum();
    // counts saturate at u64::MAX
    let total_frequency = per_root
        .iter()
        .fold(0u64, |total, r| total.saturating_add(r.frequency));
    let avg_derivatives = if total_roots == 0 {
        0.0
    } else {
        total_derivatives as f64 / total_roots as f64
    };

    // roots() is already lexicographic, so a stable sort keeps root order on ties
    per_root.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    per_root.truncate(top_n);

    Statistics {
        total_roots,
        total_patterns: state.patterns().len(),
        total_derivatives,
        total_frequency,
        avg_derivatives,
        top_roots: per_root,
    }
}
