use super::protocol::*;
use super::types::{GeneratedWord, WordFamily};
use crate::derivation::types::PatternWords;
use crate::engine::engine::MorphologyEngine;
use crate::engine::protocol::{ApiReply, reply};

use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_generate_word(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<GenerateWordRequest>,
) -> ApiReply<GeneratedWord> {
    reply(StatusCode::OK, engine.generate_word(&req.root, &req.scheme))
}

pub async fn handle_generate_family(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<GenerateFamilyRequest>,
) -> ApiReply<WordFamily> {
    reply(StatusCode::OK, engine.generate_family(&req.root))
}

pub async fn handle_generate_by_scheme(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<SchemeRequest>,
) -> ApiReply<PatternWords> {
    reply(StatusCode::OK, engine.generate_by_pattern(&req.scheme))
}
