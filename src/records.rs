// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNS record mutation API handlers
//!
//! This module implements the handlers that change the DNS server:
//! - Setting an A record (delete then add)
//! - Removing an A record
//!
//! Both are only routed when the server runs in read-write mode. All path
//! parameters are validated before dnscmd is started.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{error, info, warn};

use crate::{
    metrics,
    types::{ApiError, AppState, MessageResponse},
    validation,
};

/// Set (replace) an A record
///
/// A missing zone is not special-cased here: the delete step fails and its
/// error is returned as a 500.
#[utoipa::path(
    post,
    path = "/dns/{zone_name}/{dns_type}/{node_name}/set/{ip_address}",
    params(
        ("zone_name" = String, Path, description = "Zone name"),
        ("dns_type" = String, Path, description = "Record type, must be A"),
        ("node_name" = String, Path, description = "Node name within the zone"),
        ("ip_address" = String, Path, description = "IPv4 address")
    ),
    responses(
        (status = 200, description = "Record updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = MessageResponse),
        (status = 500, description = "dnscmd failed", body = MessageResponse)
    ),
    tag = "records"
)]
pub async fn set_record(
    State(state): State<AppState>,
    Path((zone_name, dns_type, node_name, ip_address)): Path<(String, String, String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!(
        "Setting {} record {} in zone {} to {}",
        dns_type, node_name, zone_name, ip_address
    );

    validation::validate_set_request(&zone_name, &dns_type, &node_name, &ip_address).map_err(
        |e| {
            warn!("Rejected set request: {}", e);
            metrics::record_record_operation("set", false);
            e
        },
    )?;

    state
        .dnscmd
        .set_record(&zone_name, &node_name, &dns_type, &ip_address)
        .await
        .map_err(|e| {
            error!("Failed to set {}.{}: {}", node_name, zone_name, e);
            metrics::record_record_operation("set", false);
            ApiError::DnscmdError(e.to_string())
        })?;

    info!("Record {}.{} set to {}", node_name, zone_name, ip_address);
    metrics::record_record_operation("set", true);

    Ok(Json(MessageResponse::new(format!(
        "The alias ('A') record '{}.{}' was successfully updated to '{}'.",
        node_name, zone_name, ip_address
    ))))
}

/// Remove an A record
#[utoipa::path(
    delete,
    path = "/dns/{zone_name}/{dns_type}/{node_name}/remove",
    params(
        ("zone_name" = String, Path, description = "Zone name"),
        ("dns_type" = String, Path, description = "Record type, must be A"),
        ("node_name" = String, Path, description = "Node name within the zone")
    ),
    responses(
        (status = 200, description = "Record removed", body = MessageResponse),
        (status = 400, description = "Invalid request", body = MessageResponse),
        (status = 500, description = "dnscmd failed", body = MessageResponse)
    ),
    tag = "records"
)]
pub async fn remove_record(
    State(state): State<AppState>,
    Path((zone_name, dns_type, node_name)): Path<(String, String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!(
        "Removing {} record {} from zone {}",
        dns_type, node_name, zone_name
    );

    validation::validate_remove_request(&zone_name, &dns_type, &node_name).map_err(|e| {
        warn!("Rejected remove request: {}", e);
        metrics::record_record_operation("remove", false);
        e
    })?;

    state
        .dnscmd
        .remove_record(&zone_name, &node_name, &dns_type)
        .await
        .map_err(|e| {
            error!("Failed to remove {}.{}: {}", node_name, zone_name, e);
            metrics::record_record_operation("remove", false);
            ApiError::DnscmdError(e.to_string())
        })?;

    info!("Record {}.{} removed", node_name, zone_name);
    metrics::record_record_operation("remove", true);

    Ok(Json(MessageResponse::new(format!(
        "The alias ('A') record '{}.{}' was successfully removed.",
        node_name, zone_name
    ))))
}
