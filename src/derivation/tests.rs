//! Derivation Module Tests
//!
//! ## Test Scopes
//! - **Index**: Lazy builds, per-root invalidation and pattern epochs.
//! - **Ledger**: Defaults, recorded counts and line parsing.
//! - **Handlers**: Search and frequency endpoints.

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::derivation::frequency::{FrequencyLedger, parse_frequency_line};
    use crate::derivation::handlers::*;
    use crate::derivation::index::DerivationIndex;
    use crate::derivation::protocol::*;
    use crate::engine::engine::MorphologyEngine;
    use crate::error::MorphologyError;
    use crate::lexicon::alphabet::Alphabet;
    use crate::lexicon::store::LexiconState;
    use crate::synthesis::protocol::SchemeRequest;
    use crate::synthesis::template::Synthesizer;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    struct Fixture {
        state: LexiconState,
        index: DerivationIndex,
        ledger: FrequencyLedger,
        synthesizer: Synthesizer,
    }

    fn fixture() -> Fixture {
        let mut state = LexiconState::new(Alphabet::Arabic);
        state.add_root("كتب").unwrap();
        state.add_root("درس").unwrap();
        state.add_pattern("fa'il", "1ا23").unwrap();
        state.add_pattern("maf'ul", "م12و3").unwrap();
        Fixture {
            state,
            index: DerivationIndex::new(),
            ledger: FrequencyLedger::new(1),
            synthesizer: Synthesizer::default(),
        }
    }

    impl Fixture {
        fn words_of(&self, raw: &str) -> Vec<String> {
            let root = self.state.root(raw).unwrap();
            self.index
                .derivatives(&self.state, &self.synthesizer, &self.ledger, root)
                .iter()
                .map(|d| d.word.clone())
                .collect()
        }
    }

    // ============================================================
    // INDEX TESTS
    // ============================================================

    #[test]
    fn test_index_builds_lazily_in_pattern_order() {
        let fx = fixture();
        assert!(fx.index.cached_roots().is_empty());

        assert_eq!(fx.words_of("كتب"), vec!["كاتب", "مكتوب"]);

        assert_eq!(fx.index.cached_roots(), BTreeSet::from(["كتب".to_string()]));
    }

    #[test]
    fn test_index_pattern_epoch_stales_every_entry() {
        let mut fx = fixture();
        fx.words_of("كتب");
        fx.words_of("درس");

        fx.state.add_pattern("bare", "123").unwrap();
        fx.index.invalidate_all();

        assert!(fx.index.cached_roots().is_empty());
        assert_eq!(fx.words_of("كتب"), vec!["كاتب", "مكتوب", "كتب"]);
    }

    #[test]
    fn test_index_invalidate_root_picks_up_new_frequency() {
        let fx = fixture();
        let root = fx.state.root("كتب").unwrap();
        let before = fx
            .index
            .derivatives(&fx.state, &fx.synthesizer, &fx.ledger, root);
        assert!(before.iter().all(|d| d.frequency == 1));

        fx.ledger.record("كتب", "مكتوب", 40);
        fx.index.invalidate_root("كتب");
        assert!(!fx.index.cached_roots().contains("كتب"));

        let after = fx
            .index
            .derivatives(&fx.state, &fx.synthesizer, &fx.ledger, root);
        assert_eq!(after[1].frequency, 40);
    }

    #[test]
    fn test_index_evict_root() {
        let fx = fixture();
        fx.words_of("كتب");
        fx.words_of("درس");

        fx.index.evict_root("كتب");

        assert_eq!(fx.index.cached_roots(), BTreeSet::from(["درس".to_string()]));
    }

    // ============================================================
    // LEDGER TESTS
    // ============================================================

    #[test]
    fn test_ledger_default_and_increment() {
        let ledger = FrequencyLedger::new(0);
        assert_eq!(ledger.frequency_of("كتب", "كاتب"), 0);

        assert_eq!(ledger.increment("كتب", "كاتب"), 1);
        assert_eq!(ledger.increment("كتب", "كاتب"), 2);
        assert_eq!(ledger.frequency_of("كتب", "كاتب"), 2);
        assert_eq!(ledger.recorded(), 1);
    }

    #[test]
    fn test_ledger_first_hit_replaces_default() {
        let ledger = FrequencyLedger::new(1);

        assert_eq!(ledger.increment("كتب", "كاتب"), 1);
    }

    #[test]
    fn test_ledger_increment_saturates() {
        let ledger = FrequencyLedger::new(1);
        ledger.record("كتب", "كاتب", u64::MAX);

        assert_eq!(ledger.increment("كتب", "كاتب"), u64::MAX);
        assert_eq!(ledger.frequency_of("كتب", "كاتب"), u64::MAX);
    }

    #[test]
    fn test_parse_frequency_line() {
        let entry = parse_frequency_line(1, "كتب | كاتب | 12").unwrap();
        assert_eq!(entry.root, "كتب");
        assert_eq!(entry.word, "كاتب");
        assert_eq!(entry.count, 12);

        assert!(matches!(
            parse_frequency_line(3, "كتب|كاتب|-1"),
            Err(MorphologyError::MalformedImportLine { line: 3, .. })
        ));
        assert!(parse_frequency_line(1, "كتب||4").is_err());
        assert!(parse_frequency_line(1, "كتب|كاتب").is_err());
    }

    // ============================================================
    // ENGINE-LEVEL INVALIDATION TESTS
    // ============================================================

    fn engine() -> Arc<MorphologyEngine> {
        let engine = MorphologyEngine::new(&EngineConfig::default()).unwrap();
        engine.import_roots("كتب\nدرس");
        engine.import_patterns("fa'il|1ا23\nmaf'ul|م12و3");
        Arc::new(engine)
    }

    #[test]
    fn test_add_then_delete_root_restores_cached_set() {
        let engine = engine();
        engine.derivatives_of("كتب").unwrap();
        engine.derivatives_of("درس").unwrap();
        let before = engine.cached_roots();

        engine.add_root("علم").unwrap();
        engine.derivatives_of("علم").unwrap();
        engine.delete_root("علم").unwrap();

        assert_eq!(engine.cached_roots(), before);
    }

    #[test]
    fn test_pattern_update_changes_derivatives() {
        let engine = engine();
        assert_eq!(engine.derivatives_of("كتب").unwrap().total_derivatives, 2);

        engine.update_pattern("fa'il", "1ا2ِ3").unwrap();
        engine.delete_pattern("maf'ul").unwrap();

        let derivatives = engine.derivatives_of("كتب").unwrap();
        assert_eq!(derivatives.total_derivatives, 1);
        assert_eq!(derivatives.derivatives[0].word, "كاتِب");
    }

    #[test]
    fn test_derivatives_sorted_by_frequency() {
        let engine = engine();
        engine.record_frequency("كتب", "مكتوب", 9).unwrap();

        let derivatives = engine.derivatives_of("كتب").unwrap();

        assert_eq!(derivatives.derivatives[0].word, "مكتوب");
        assert_eq!(derivatives.derivatives[0].pattern, "maf'ul");
        assert_eq!(derivatives.total_frequency, 10);
    }

    #[test]
    fn test_huge_counts_saturate_totals() {
        let engine = engine();
        engine.record_frequency("كتب", "كاتب", u64::MAX).unwrap();

        let derivatives = engine.derivatives_of("كتب").unwrap();
        assert_eq!(derivatives.total_frequency, u64::MAX);

        let report = engine.ingest_corpus("كاتب كاتب");
        assert_eq!(report.credited, 2);
        let katib = engine
            .derivatives_of("كتب")
            .unwrap()
            .derivatives
            .into_iter()
            .find(|d| d.word == "كاتب")
            .unwrap();
        assert_eq!(katib.frequency, u64::MAX);
    }

    #[test]
    fn test_record_frequency_folds_alef_maqsura() {
        let engine = engine();
        engine.add_root("رمى").unwrap();

        let recorded = engine.record_frequency("رمى", "رامى", 4).unwrap();
        assert_eq!(recorded.word, "رامي");
        assert_eq!(recorded.pattern, "fa'il");

        let derivatives = engine.derivatives_of("رمي").unwrap();
        assert_eq!(derivatives.derivatives[0].word, "رامي");
        assert_eq!(derivatives.derivatives[0].frequency, 4);

        let report = engine.import_frequencies("رمي|مرموى|7");
        assert_eq!(report.accepted, vec!["رمي|مرموي".to_string()]);
        assert_eq!(engine.derivatives_of("رمي").unwrap().derivatives[0].frequency, 7);
    }

    #[test]
    fn test_import_frequencies_rejects_unknown_roots() {
        let engine = engine();

        let report = engine.import_frequencies("كتب|كاتب|5\nعلم|عالم|3\nدرس|دارس|x\n");

        assert_eq!(report.succeeded, 1);
        let lines: Vec<usize> = report.failed.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert_eq!(engine.derivatives_of("كتب").unwrap().total_frequency, 6);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_search_by_scheme() {
        let engine = engine();

        let (status, Json(body)) = handle_search_by_scheme(
            Extension(engine.clone()),
            Json(SchemeRequest {
                scheme: "maf'ul".to_string(),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let words: Vec<String> = body.data.unwrap().words.into_iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["مدروس", "مكتوب"]);

        let (status, _) = handle_search_by_scheme(
            Extension(engine),
            Json(SchemeRequest {
                scheme: "missing".to_string(),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_handle_root_derivatives() {
        let engine = engine();

        let (status, Json(body)) =
            handle_root_derivatives(Extension(engine.clone()), Path("درس".to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.unwrap().total_derivatives, 2);

        let (status, _) =
            handle_root_derivatives(Extension(engine), Path("علم".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_handle_record_frequency() {
        let engine = engine();

        let (status, Json(body)) = handle_record_frequency(
            Extension(engine.clone()),
            Json(RecordFrequencyRequest {
                root: "كتب".to_string(),
                word: "كاتب".to_string(),
                count: 7,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.unwrap().pattern, "fa'il");

        let (status, _) = handle_record_frequency(
            Extension(engine.clone()),
            Json(RecordFrequencyRequest {
                root: "كتب".to_string(),
                word: " ".to_string(),
                count: 7,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, Json(body)) = handle_upload_frequencies(
            Extension(engine),
            "درس|دارس|3\nbad line".to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.unwrap().succeeded, 1);
    }
}
