use super::engine::MorphologyEngine;
use super::protocol::ENDPOINT_HEALTH;
use crate::analysis::handlers::*;
use crate::analysis::protocol::*;
use crate::derivation::handlers::*;
use crate::derivation::protocol::*;
use crate::lexicon::handlers::*;
use crate::lexicon::protocol::*;
use crate::stats::handlers::{ENDPOINT_STATISTICS, handle_statistics};
use crate::synthesis::handlers::*;
use crate::synthesis::protocol::*;

use axum::extract::Extension;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Every `/api` route, with the engine attached as an extension.
pub fn router(engine: Arc<MorphologyEngine>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(|| async { "ok" }))
        // Roots
        .route(ENDPOINT_ROOTS, get(handle_list_roots).post(handle_add_root))
        .route(ENDPOINT_ROOTS_UPLOAD, post(handle_upload_roots))
        .route(ENDPOINT_ROOT_ANALYZE, get(handle_analyze_root))
        .route(ENDPOINT_ROOT, get(handle_get_root).delete(handle_delete_root))
        // Schemes
        .route(
            ENDPOINT_SCHEMES,
            get(handle_list_patterns).post(handle_add_pattern),
        )
        .route(ENDPOINT_SCHEMES_UPLOAD, post(handle_upload_patterns))
        .route(
            ENDPOINT_SCHEME,
            axum::routing::put(handle_update_pattern).delete(handle_delete_pattern),
        )
        // Generation
        .route(ENDPOINT_GENERATE_WORD, post(handle_generate_word))
        .route(ENDPOINT_GENERATE_FAMILY, post(handle_generate_family))
        .route(ENDPOINT_GENERATE_BY_SCHEME, post(handle_generate_by_scheme))
        // Validation
        .route(ENDPOINT_VALIDATE_CHECK, post(handle_validate))
        .route(ENDPOINT_VALIDATE_DECOMPOSE, post(handle_decompose))
        .route(ENDPOINT_VALIDATE_FIND_ROOTS, post(handle_find_roots))
        // Search & frequencies
        .route(ENDPOINT_SEARCH_BY_SCHEME, post(handle_search_by_scheme))
        .route(ENDPOINT_ROOT_DERIVATIVES, get(handle_root_derivatives))
        .route(ENDPOINT_FREQUENCIES, post(handle_record_frequency))
        .route(ENDPOINT_FREQUENCIES_UPLOAD, post(handle_upload_frequencies))
        .route(ENDPOINT_CORPUS_INGEST, post(handle_ingest_corpus))
        .route(ENDPOINT_STATISTICS, get(handle_statistics))
        .layer(Extension(engine))
}
