// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Prometheus metrics for windns-api
//!
//! This module provides metrics for monitoring the Windows DNS API server:
//! - HTTP request metrics (count, duration, status codes)
//! - Record operation metrics (set, remove)
//! - dnscmd command execution metrics
//! - Zone and record counts from the most recent listings
//! - Listing lines the parser could not turn into zones or records

use lazy_static::lazy_static;
use prometheus::{
    opts, register_counter_vec, register_gauge, register_gauge_vec, register_histogram_vec,
    CounterVec, Encoder, Gauge, GaugeVec, HistogramVec, TextEncoder,
};

lazy_static! {
    /// HTTP request counter by method, path, and status code
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        opts!(
            "windns_http_requests_total",
            "Total number of HTTP requests processed"
        ),
        &["method", "path", "status"]
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric");

    /// HTTP request duration histogram
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "windns_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to create HTTP_REQUEST_DURATION_SECONDS metric");

    /// Record operations counter by operation type and result
    pub static ref RECORD_OPERATIONS_TOTAL: CounterVec = register_counter_vec!(
        opts!(
            "windns_record_operations_total",
            "Total number of record set/remove operations"
        ),
        &["operation", "result"]
    )
    .expect("Failed to create RECORD_OPERATIONS_TOTAL metric");

    /// dnscmd command counter by command and result
    pub static ref DNSCMD_COMMANDS_TOTAL: CounterVec = register_counter_vec!(
        opts!(
            "windns_dnscmd_commands_total",
            "Total number of dnscmd commands executed"
        ),
        &["command", "result"]
    )
    .expect("Failed to create DNSCMD_COMMANDS_TOTAL metric");

    /// dnscmd command duration histogram
    ///
    /// Every call starts a process and an RPC to the DNS service, and
    /// `/EnumRecords` on a large AD-integrated zone runs for tens of seconds.
    pub static ref DNSCMD_COMMAND_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "windns_dnscmd_command_duration_seconds",
        "dnscmd command execution duration in seconds",
        &["command"],
        vec![0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 15.0, 30.0, 60.0]
    )
    .expect("Failed to create DNSCMD_COMMAND_DURATION_SECONDS metric");

    /// Zones in the most recent `/EnumZones` listing, cache and AD partitions included
    pub static ref ZONES_LISTED: Gauge = register_gauge!(
        opts!(
            "windns_zones_listed",
            "Number of zones returned by the most recent dnscmd /EnumZones"
        )
    )
    .expect("Failed to create ZONES_LISTED metric");

    /// Records in the most recent `/EnumRecords` listing, per zone
    pub static ref ZONE_RECORDS: GaugeVec = register_gauge_vec!(
        opts!(
            "windns_zone_records",
            "Number of records returned by the most recent dnscmd /EnumRecords of a zone"
        ),
        &["zone"]
    )
    .expect("Failed to create ZONE_RECORDS metric");

    /// Listing lines dropped by the parser, by listing and reason
    pub static ref PARSE_LINES_DROPPED_TOTAL: CounterVec = register_counter_vec!(
        opts!(
            "windns_parse_lines_dropped_total",
            "Lines inside a dnscmd listing that did not yield a zone or record"
        ),
        &["listing", "reason"]
    )
    .expect("Failed to create PARSE_LINES_DROPPED_TOTAL metric");

    /// Application info metric
    pub static ref APP_INFO: CounterVec = register_counter_vec!(
        opts!(
            "windns_app_info",
            "Application information"
        ),
        &["version", "mode"]
    )
    .expect("Failed to create APP_INFO metric");
}

/// Initialize metrics with application info
pub fn init_metrics(writable: bool) {
    let mode = if writable { "read-write" } else { "read-only" };
    APP_INFO
        .with_label_values(&[env!("CARGO_PKG_VERSION"), mode])
        .inc();
}

/// Generate metrics output in Prometheus format
pub fn gather_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration);
}

/// Record a record set/remove operation
pub fn record_record_operation(operation: &str, success: bool) {
    let result = if success { "success" } else { "error" };
    RECORD_OPERATIONS_TOTAL
        .with_label_values(&[operation, result])
        .inc();
}

/// Record a dnscmd command execution
pub fn record_dnscmd_command(command: &str, success: bool, duration: f64) {
    let result = if success { "success" } else { "error" };
    DNSCMD_COMMANDS_TOTAL
        .with_label_values(&[command, result])
        .inc();
    DNSCMD_COMMAND_DURATION_SECONDS
        .with_label_values(&[command])
        .observe(duration);
}

/// Update the number of zones seen in the last listing
pub fn update_zones_listed(count: usize) {
    ZONES_LISTED.set(count as f64);
}

/// Update the number of records seen in the last listing of `zone`
pub fn update_zone_records(zone: &str, count: usize) {
    ZONE_RECORDS.with_label_values(&[zone]).set(count as f64);
}

/// Count a listing line the parser dropped
///
/// `listing` is `zones` or `records`; `reason` is `malformed` or
/// `orphan_continuation`.
pub fn record_dropped_line(listing: &str, reason: &str) {
    PARSE_LINES_DROPPED_TOTAL
        .with_label_values(&[listing, reason])
        .inc();
}
