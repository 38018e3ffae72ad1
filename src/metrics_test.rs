// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for metrics module

use super::metrics::*;

#[test]
fn test_init_metrics() {
    init_metrics(false);
    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("windns_app_info"));
    assert!(metrics.contains(env!("CARGO_PKG_VERSION")));
    assert!(metrics.contains("read-only"));
}

#[test]
fn test_init_metrics_read_write() {
    init_metrics(true);
    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("read-write"));
}

#[test]
fn test_record_http_request() {
    record_http_request("GET", "/dns/", 200, 0.123);
    record_http_request("POST", "/dns/corp.local/A/www/set/10.0.0.1", 200, 0.456);
    record_http_request("GET", "/dns/missing.zone", 404, 1.234);

    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("windns_http_requests_total"));
    assert!(metrics.contains("windns_http_request_duration_seconds"));
}

#[test]
fn test_record_record_operation() {
    record_record_operation("set", true);
    record_record_operation("remove", false);

    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("windns_record_operations_total"));
    assert!(metrics.contains("success"));
    assert!(metrics.contains("error"));
}

#[test]
fn test_record_dnscmd_command() {
    // Different durations land in different histogram buckets
    for duration in [0.001, 0.05, 0.5, 5.0, 20.0] {
        record_dnscmd_command("enumrecords", true, duration);
    }
    record_dnscmd_command("recorddelete", false, 0.2);

    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("windns_dnscmd_commands_total"));
    assert!(metrics.contains("windns_dnscmd_command_duration_seconds"));
    assert!(metrics.contains("enumrecords"));
}

#[test]
fn test_update_zones_listed() {
    update_zones_listed(0);
    update_zones_listed(42);

    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("windns_zones_listed"));
}

#[test]
fn test_update_zone_records() {
    update_zone_records("gauge.example", 17);

    assert_eq!(ZONE_RECORDS.with_label_values(&["gauge.example"]).get(), 17.0);
    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("windns_zone_records"));
    assert!(metrics.contains("zone=\"gauge.example\""));
}

#[test]
fn test_record_dropped_line() {
    let counter =
        PARSE_LINES_DROPPED_TOTAL.with_label_values(&["records", "orphan_continuation"]);
    let before = counter.get();

    record_dropped_line("records", "orphan_continuation");

    assert!(counter.get() >= before + 1.0);
    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("windns_parse_lines_dropped_total"));
}
