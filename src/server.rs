// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP router
//!
//! Assembles the DNS routes, the operational endpoints (health, readiness,
//! metrics, API docs) and the not-found fallback into one axum router.

use axum::{
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dnscmd_types, metrics, middleware, records,
    types::{ApiError, AppState, MessageResponse},
    zones,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        zones::list_zones,
        zones::list_records,
        zones::zone_file,
        records::set_record,
        records::remove_record,
    ),
    components(
        schemas(
            dnscmd_types::Zone,
            dnscmd_types::Record,
            MessageResponse,
        )
    ),
    tags(
        (name = "zones", description = "Zone and record listing endpoints"),
        (name = "records", description = "Record mutation endpoints (read-write mode only)")
    ),
    info(
        title = "Windows DNS API",
        description = "HTTP API for a Windows DNS server, backed by dnscmd",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Readiness check response
#[derive(Serialize)]
struct ReadyResponse {
    ready: bool,
    checks: Vec<String>,
}

/// Welcome message
async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Win DNS API"))
}

/// Response for any route that did not match
async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Could not get the requested route.")),
    )
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint
async fn ready_check(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let mut checks = Vec::new();

    let ready = match state.dnscmd.info().await {
        Ok(_) => {
            checks.push("dnscmd_available: true".to_string());
            true
        }
        Err(e) => {
            warn!("dnscmd not ready: {}", e);
            checks.push(format!("dnscmd_error: {}", e));
            false
        }
    };

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadyResponse { ready, checks }))
}

/// Metrics endpoint for Prometheus scraping
async fn metrics_handler() -> Result<Response, ApiError> {
    let metrics_text = metrics::gather_metrics()
        .map_err(|e| ApiError::InternalError(format!("Failed to gather metrics: {}", e)))?;

    Ok((
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4")],
        metrics_text,
    )
        .into_response())
}

/// Build the application router
///
/// The set and remove routes exist only when `writable` is true; otherwise
/// those paths fall through to the not-found handler.
pub fn build_router(state: AppState, writable: bool) -> Router {
    let mut dns_routes = Router::new()
        .route("/dns/", get(zones::list_zones))
        .route("/dns/{zone_name}", get(zones::list_records))
        .route("/dns/{zone_name}/db.txt", get(zones::zone_file));

    if writable {
        dns_routes = dns_routes
            .route(
                "/dns/{zone_name}/{dns_type}/{node_name}/set/{ip_address}",
                post(records::set_record),
            )
            .route(
                "/dns/{zone_name}/{dns_type}/{node_name}/remove",
                delete(records::remove_record),
            );
    }

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/metrics", get(metrics_handler))
        .merge(dns_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(axum_middleware::from_fn(middleware::track_metrics))
        .layer(TraceLayer::new_for_http())
}
