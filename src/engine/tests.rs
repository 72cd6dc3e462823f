//! Engine Module Tests
//!
//! ## Test Scopes
//! - **Routing**: The router builds without conflicting routes.
//! - **Envelope**: JSON shape and error status mapping.
//! - **Concurrency**: Readers never observe a half-applied import.

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::engine::engine::MorphologyEngine;
    use crate::engine::protocol::{ApiResponse, reply};
    use crate::engine::router::router;
    use crate::error::MorphologyError;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use std::thread;

    fn engine() -> Arc<MorphologyEngine> {
        Arc::new(MorphologyEngine::new(&EngineConfig::default()).unwrap())
    }

    // ============================================================
    // ROUTER & ENVELOPE TESTS
    // ============================================================

    #[test]
    fn test_router_builds() {
        let _app = router(engine());
    }

    #[test]
    fn test_envelope_serialization() {
        let ok = serde_json::to_value(ApiResponse::ok(3)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 3}));

        let err = serde_json::to_value(ApiResponse::<()>::error("root 'كت' not found")).unwrap();
        assert_eq!(
            err,
            serde_json::json!({"success": false, "message": "root 'كت' not found"})
        );
    }

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (MorphologyError::invalid_root("كت", "short"), StatusCode::BAD_REQUEST),
            (MorphologyError::invalid_pattern("p", "bad"), StatusCode::BAD_REQUEST),
            (MorphologyError::malformed_line(2, "bad"), StatusCode::BAD_REQUEST),
            (MorphologyError::DuplicateRoot("كتب".into()), StatusCode::CONFLICT),
            (MorphologyError::DuplicatePattern("p".into()), StatusCode::CONFLICT),
            (MorphologyError::root_not_found("كتب"), StatusCode::NOT_FOUND),
            (
                MorphologyError::PhonologicalClash {
                    root: "قول".into(),
                    pattern: "p".into(),
                    reason: "weak".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (MorphologyError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let (status, body) = reply::<()>(StatusCode::OK, Err(error));
            assert_eq!(status, expected);
            assert!(!body.0.success);
        }
    }

    #[test]
    fn test_only_internal_errors_are_unexpected() {
        assert!(MorphologyError::root_not_found("x").is_expected());
        assert!(!MorphologyError::Internal("x".into()).is_expected());
    }

    // ============================================================
    // ENGINE FACADE TESTS
    // ============================================================

    #[test]
    fn test_generate_requires_stored_root_and_pattern() {
        let engine = engine();
        engine.add_root("كتب").unwrap();

        assert!(matches!(
            engine.generate_word("كتب", "fa'il"),
            Err(MorphologyError::NotFound { kind: "pattern", .. })
        ));

        engine.add_pattern("fa'il", "1ا23").unwrap();
        assert_eq!(engine.generate_word("كتب", "fa'il").unwrap().word, "كاتب");
        assert!(matches!(
            engine.generate_word("درس", "fa'il"),
            Err(MorphologyError::NotFound { kind: "root", .. })
        ));
    }

    #[test]
    fn test_reads_do_not_mutate_lexicon() {
        let engine = engine();
        engine.import_roots("كتب\nدرس");
        engine.import_patterns("fa'il|1ا23");
        let roots_before = engine.list_roots(None, 1, 10);

        engine.decompose("كاتب").unwrap();
        engine.validate("دارس", "درس");
        engine.statistics(None);
        engine.find_all_roots("مكتب");

        assert_eq!(engine.list_roots(None, 1, 10), roots_before);
        assert_eq!(engine.list_patterns().len(), 1);
    }

    #[test]
    fn test_concurrent_readers_see_whole_imports() {
        let engine = engine();
        engine.add_pattern("fa'il", "1ا23").unwrap();
        let batch = "كتب\nدرس\nعلم\nنصر\nفتح";

        let writer = {
            let engine = engine.clone();
            thread::spawn(move || {
                engine.import_roots(batch);
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let stats = engine.statistics(None);
                        assert!(stats.total_roots == 0 || stats.total_roots == 5);
                        assert_eq!(stats.total_derivatives, stats.total_roots);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(engine.statistics(None).total_roots, 5);
    }
}
