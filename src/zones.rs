// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone listing API handlers
//!
//! This module implements the read-only HTTP handlers:
//! - Listing all zones
//! - Listing the records of a zone
//! - Rendering the records of a zone as a zone file
//!
//! Every request runs dnscmd afresh; nothing is cached.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::{error, info};

use crate::{
    dnscmd::DnscmdError,
    dnscmd_parser,
    dnscmd_types::{Record, Zone},
    metrics,
    types::{ApiError, AppState},
    zonefile,
};

/// Map a gateway error on the read path
///
/// A missing zone becomes a 404; anything else is passed through as a 500.
pub(crate) fn read_error(zone_name: &str, err: DnscmdError) -> ApiError {
    match err {
        DnscmdError::ZoneDoesNotExist { .. } => ApiError::ZoneNotFound(zone_name.to_string()),
        other => ApiError::DnscmdError(other.to_string()),
    }
}

/// Run `/EnumRecords` for a zone and parse the result
async fn fetch_records(state: &AppState, zone_name: &str) -> Result<Vec<Record>, ApiError> {
    let output = state.dnscmd.enum_records(zone_name).await.map_err(|e| {
        error!("dnscmd /EnumRecords failed for {}: {}", zone_name, e);
        read_error(zone_name, e)
    })?;

    let records = dnscmd_parser::parse_enum_records(&output);
    metrics::update_zone_records(zone_name, records.len());
    Ok(records)
}

/// List all zones
#[utoipa::path(
    get,
    path = "/dns/",
    responses(
        (status = 200, description = "List of zones", body = Vec<Zone>),
        (status = 500, description = "dnscmd failed")
    ),
    tag = "zones"
)]
pub async fn list_zones(State(state): State<AppState>) -> Result<Json<Vec<Zone>>, ApiError> {
    info!("Listing all zones");

    let output = state.dnscmd.enum_zones().await.map_err(|e| {
        error!("dnscmd /EnumZones failed: {}", e);
        ApiError::DnscmdError(e.to_string())
    })?;

    let zones = dnscmd_parser::parse_enum_zones(&output);

    info!("Found {} zones", zones.len());
    metrics::update_zones_listed(zones.len());

    Ok(Json(zones))
}

/// List the records of a zone
#[utoipa::path(
    get,
    path = "/dns/{zone_name}",
    params(
        ("zone_name" = String, Path, description = "Zone name")
    ),
    responses(
        (status = 200, description = "Records of the zone", body = Vec<Record>),
        (status = 404, description = "Zone does not exist"),
        (status = 500, description = "dnscmd failed")
    ),
    tag = "zones"
)]
pub async fn list_records(
    State(state): State<AppState>,
    Path(zone_name): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    info!("Listing records for zone: {}", zone_name);

    let records = fetch_records(&state, &zone_name).await?;

    info!("Found {} records in zone {}", records.len(), zone_name);
    Ok(Json(records))
}

/// Render the records of a zone as zone file text
#[utoipa::path(
    get,
    path = "/dns/{zone_name}/db.txt",
    params(
        ("zone_name" = String, Path, description = "Zone name")
    ),
    responses(
        (status = 200, description = "Zone file", body = String, content_type = "text/plain"),
        (status = 404, description = "Zone does not exist"),
        (status = 500, description = "dnscmd failed")
    ),
    tag = "zones"
)]
pub async fn zone_file(
    State(state): State<AppState>,
    Path(zone_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Rendering zone file for zone: {}", zone_name);

    let records = fetch_records(&state, &zone_name).await?;
    let text = zonefile::to_zone_file(&zone_name, &records);

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
