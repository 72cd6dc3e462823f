//! Response envelope shared by every endpoint.

use crate::error::MorphologyError;

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_HEALTH: &str = "/health";

/// `{success, message?, data?}` wrapper around every JSON response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

pub type ApiReply<T> = (StatusCode, Json<ApiResponse<T>>);

/// Maps an engine result onto the envelope, using `status` on success.
pub fn reply<T>(status: StatusCode, result: Result<T, MorphologyError>) -> ApiReply<T> {
    match result {
        Ok(data) => (status, Json(ApiResponse::ok(data))),
        Err(e) => error_reply(e),
    }
}

pub fn error_reply<T>(e: MorphologyError) -> ApiReply<T> {
    if e.is_expected() {
        tracing::debug!("Request rejected: {}", e);
    } else {
        tracing::error!("Request failed: {}", e);
    }
    (e.status_code(), Json(ApiResponse::error(e.to_string())))
}
