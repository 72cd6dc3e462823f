use super::import::ImportReport;
use super::protocol::*;
use super::store::{DEFAULT_PAGE_SIZE, RootPage};
use super::types::Pattern;
use crate::engine::engine::MorphologyEngine;
use crate::engine::protocol::{ApiReply, ApiResponse, reply};

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

// --- Roots ---

pub async fn handle_list_roots(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Query(params): Query<ListRootsParams>,
) -> ApiReply<RootPage> {
    let page = engine.list_roots(
        params.search.as_deref(),
        params.page.unwrap_or(1),
        params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    (StatusCode::OK, Json(ApiResponse::ok(page)))
}

pub async fn handle_add_root(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<AddRootRequest>,
) -> ApiReply<RootInfo> {
    reply(StatusCode::CREATED, engine.add_root(&req.root))
}

pub async fn handle_get_root(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Path(root): Path<String>,
) -> ApiReply<RootInfo> {
    reply(StatusCode::OK, engine.lookup_root(&root))
}

pub async fn handle_delete_root(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Path(root): Path<String>,
) -> ApiReply<RootInfo> {
    reply(StatusCode::OK, engine.delete_root(&root))
}

pub async fn handle_analyze_root(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Path(root): Path<String>,
) -> ApiReply<RootInfo> {
    reply(StatusCode::OK, engine.analyze_root(&root))
}

/// Plain-text body, one root per line.
pub async fn handle_upload_roots(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    body: String,
) -> ApiReply<ImportReport> {
    import_reply(engine.import_roots(&body))
}

// --- Schemes ---

pub async fn handle_list_patterns(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
) -> ApiReply<Vec<Pattern>> {
    (StatusCode::OK, Json(ApiResponse::ok(engine.list_patterns())))
}

pub async fn handle_add_pattern(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Json(req): Json<AddPatternRequest>,
) -> ApiReply<Pattern> {
    reply(StatusCode::CREATED, engine.add_pattern(&req.name, &req.rule))
}

pub async fn handle_update_pattern(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Path(name): Path<String>,
    Json(req): Json<UpdatePatternRequest>,
) -> ApiReply<Pattern> {
    reply(StatusCode::OK, engine.update_pattern(&name, &req.rule))
}

pub async fn handle_delete_pattern(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Path(name): Path<String>,
) -> ApiReply<Pattern> {
    reply(StatusCode::OK, engine.delete_pattern(&name))
}

/// Plain-text body, one `name|rule` per line.
pub async fn handle_upload_patterns(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    body: String,
) -> ApiReply<ImportReport> {
    import_reply(engine.import_patterns(&body))
}

pub(crate) fn import_reply(report: ImportReport) -> ApiReply<ImportReport> {
    let message = format!(
        "{} imported, {} rejected",
        report.succeeded,
        report.failed.len()
    );
    (
        StatusCode::OK,
        Json(ApiResponse::ok_with_message(message, report)),
    )
}
