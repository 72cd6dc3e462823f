use super::protocol::*;
use super::types::{Derivative, PatternWords, RootDerivatives};
use crate::engine::engine::MorphologyEngine;
use crate::engine::protocol::{ApiReply, reply};
use crate::lexicon::handlers::import_reply;
use crate::lexicon::import::ImportReport;
use crate::synthesis::protocol::SchemeRequest;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search_by_scheme(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<SchemeRequest>,
) -> ApiReply<PatternWords> {
    reply(StatusCode::OK, engine.words_for_pattern(&req.scheme))
}

pub async fn handle_root_derivatives(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Path(root): Path<String>,
) -> ApiReply<RootDerivatives> {
    reply(StatusCode::OK, engine.derivatives_of(&root))
}

pub async fn handle_record_frequency(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<RecordFrequencyRequest>,
) -> ApiReply<Derivative> {
    reply(
        StatusCode::OK,
        engine.record_frequency(&req.root, &req.word, req.count),
    )
}

/// Plain-text body, one `root|word|count` per line.
pub async fn handle_upload_frequencies(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    body: String,
) -> ApiReply<ImportReport> {
    import_reply(engine.import_frequencies(&body))
}
