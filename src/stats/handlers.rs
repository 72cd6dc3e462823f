use super::types::Statistics;
use crate::engine::engine::MorphologyEngine;
use crate::engine::protocol::{ApiReply, ApiResponse};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

pub const ENDPOINT_STATISTICS: &str = "/api/statistics";

#[derive(Debug, Default, Deserialize)]
pub struct StatisticsParams {
    pub top: Option<usize>,
}

pub async fn handle_statistics(
    Extension(engine): Extension<Arc<MorphologyEngine>>,
    Query(params): Query<StatisticsParams>,
) -> ApiReply<Statistics> {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(engine.statistics(params.top))),
    )
}
