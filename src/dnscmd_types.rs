// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Data types for parsed dnscmd output
//!
//! This module defines the entities produced by the dnscmd output parsers
//! (`/EnumZones`, `/EnumRecords`). Field names on the wire match the JSON
//! shape existing Windows DNS API clients already consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Seconds between 1601-01-01T00:00:00Z and the Unix epoch
pub const WINDOWS_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

/// Aging value for records without an aging stamp
pub const AGING_NONE: i64 = 0;

/// Aging value for records whose aging stamp could not be decoded
pub const AGING_INVALID: i64 = -1;

/// A zone as listed by `dnscmd /EnumZones`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Zone {
    /// Zone name (e.g., "example.com", "_msdcs.corp.local")
    pub name: String,

    /// Zone type as reported by dnscmd (e.g., "Primary", "Secondary", "Cache")
    #[serde(rename = "Type")]
    pub zone_type: String,

    /// Storage backend (e.g., "AD-Domain", "File")
    pub storage: String,

    /// Trailing zone flags (e.g., "Update", "Sec", "Rev"), in listing order
    #[serde(default)]
    pub properties: Vec<String>,
}

/// A resource record as listed by `dnscmd /EnumRecords`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Owner name relative to the zone ("@" for the apex)
    pub name: String,

    /// Record type (e.g., "A", "NS", "SOA", "TXT")
    #[serde(rename = "Type")]
    pub record_type: String,

    /// Time-to-live in seconds
    #[serde(rename = "TTL")]
    pub ttl: u32,

    /// Record data; multi-token values are joined with single spaces
    pub value: String,

    /// Unix timestamp of the aging stamp, [`AGING_NONE`] or [`AGING_INVALID`]
    pub aging: i64,
}

impl Record {
    /// Aging stamp as a UTC timestamp, if the record carries a valid one
    pub fn aged_at(&self) -> Option<DateTime<Utc>> {
        match self.aging {
            AGING_NONE | AGING_INVALID => None,
            secs => DateTime::from_timestamp(secs, 0),
        }
    }
}

/// Convert dnscmd aging hours (since 1601-01-01) to a Unix timestamp
///
/// Returns `None` if the conversion overflows.
pub fn aging_hours_to_unix(hours: i64) -> Option<i64> {
    hours
        .checked_mul(3600)
        .and_then(|secs| secs.checked_sub(WINDOWS_EPOCH_OFFSET_SECS))
}
