use super::protocol::*;
use super::types::{CorpusReport, DecompositionCandidate, Validation};
use crate::engine::engine::MorphologyEngine;
use crate::engine::protocol::{ApiReply, ApiResponse, reply};

use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// A miss is still a 200; `valid` carries the verdict.
pub async fn handle_validate(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<ValidateRequest>,
) -> ApiReply<Validation> {
    let verdict = engine.validate(&req.word, &req.root);
    let message = verdict.message.clone();
    (
        StatusCode::OK,
        Json(ApiResponse::ok_with_message(message, verdict)),
    )
}

pub async fn handle_decompose(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<WordRequest>,
) -> ApiReply<DecompositionCandidate> {
    reply(StatusCode::OK, engine.decompose(&req.word))
}

pub async fn handle_find_roots(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<WordRequest>,
) -> ApiReply<Vec<DecompositionCandidate>> {
    let candidates = engine.find_all_roots(&req.word);
    let message = format!("{} candidate(s)", candidates.len());
    (
        StatusCode::OK,
        Json(ApiResponse::ok_with_message(message, candidates)),
    )
}

/// Plain-text body of running text.
pub async fn handle_ingest_corpus(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    body: String,
) -> ApiReply<CorpusReport> {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(engine.ingest_corpus(&body))),
    )
}
