// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common types and errors used throughout the windns-api library

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::dnscmd::DnscmdExecutor;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// dnscmd command executor
    pub dnscmd: Arc<DnscmdExecutor>,
}

/// Plain message response, used for both successes and errors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("dnscmd failed: {0}")]
    DnscmdError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message),
            // Missing zones are reported by status alone
            ApiError::ZoneNotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            ApiError::DnscmdError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::InternalError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}
