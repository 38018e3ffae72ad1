// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for dnscmd module

use super::dnscmd::*;
use super::test_support::FakeDnscmd;
use serial_test::serial;

#[test]
fn test_dnscmd_executor_creation() {
    let executor = DnscmdExecutor::new(None);
    assert_eq!(executor.dnscmd_path, "dnscmd.exe");

    let executor_custom = DnscmdExecutor::new(Some("C:\\Windows\\System32\\dnscmd.exe".to_string()));
    assert_eq!(executor_custom.dnscmd_path, "C:\\Windows\\System32\\dnscmd.exe");
}

#[test]
fn test_dnscmd_executor_clone() {
    let executor = DnscmdExecutor::new(Some("/custom/dnscmd".to_string()));
    let cloned = executor.clone();
    assert_eq!(cloned.dnscmd_path, "/custom/dnscmd");
}

#[test]
fn test_classify_exit_zone_does_not_exist() {
    let err = classify_exit("/EnumRecords", Some(9601), "Command failed:  DNS_ERROR_ZONE_DOES_NOT_EXIST");
    assert!(matches!(err, DnscmdError::ZoneDoesNotExist { .. }));
}

#[test]
fn test_classify_exit_other_code() {
    let err = classify_exit("/RecordDelete", Some(9714), "  Command failed:  DNS_ERROR_NAME_DOES_NOT_EXIST\n");
    match err {
        DnscmdError::CommandFailed { command, code, output } => {
            assert_eq!(command, "/RecordDelete");
            assert_eq!(code, 9714);
            assert_eq!(output, "Command failed:  DNS_ERROR_NAME_DOES_NOT_EXIST");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_classify_exit_without_code() {
    let err = classify_exit("/EnumZones", None, "");
    assert!(matches!(err, DnscmdError::Terminated { .. }));
}

#[test]
fn test_dnscmd_error_display() {
    let err = classify_exit("/RecordAdd", Some(1), "boom");
    assert_eq!(err.to_string(), "dnscmd /RecordAdd exited with status 1: boom");
}

#[tokio::test]
#[serial]
async fn test_missing_executable_is_spawn_error() {
    let executor = DnscmdExecutor::new(Some("/nonexistent/dnscmd".to_string()));
    let err = executor.enum_zones().await.unwrap_err();
    assert!(matches!(err, DnscmdError::Spawn { .. }));
}

#[tokio::test]
#[serial]
async fn test_enum_records_arguments() {
    let fake = FakeDnscmd::new("echo ok");
    let output = fake.executor().enum_records("corp.local").await.unwrap();
    assert_eq!(output.trim(), "ok");
    assert_eq!(fake.calls(), vec!["/EnumRecords corp.local @"]);
}

#[tokio::test]
#[serial]
async fn test_enum_zones_includes_stderr() {
    let fake = FakeDnscmd::new("echo out; echo err >&2");
    let output = fake.executor().enum_zones().await.unwrap();
    assert!(output.contains("out"));
    assert!(output.contains("err"));
}

#[tokio::test]
#[serial]
async fn test_enum_records_excludes_stderr_on_success() {
    let fake = FakeDnscmd::new("echo out; echo err >&2");
    let output = fake.executor().enum_records("corp.local").await.unwrap();
    assert!(output.contains("out"));
    assert!(!output.contains("err"));
}

#[tokio::test]
#[serial]
async fn test_failure_carries_output() {
    let fake = FakeDnscmd::new("echo 'Command failed:  ERROR_ACCESS_DENIED'; exit 5");
    let err = fake.executor().enum_records("corp.local").await.unwrap_err();
    match err {
        DnscmdError::CommandFailed { code, output, .. } => {
            assert_eq!(code, 5);
            assert!(output.contains("ERROR_ACCESS_DENIED"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_set_record_deletes_then_adds() {
    let fake = FakeDnscmd::new("exit 0");
    fake.executor()
        .set_record("corp.local", "www", "A", "10.0.0.5")
        .await
        .unwrap();
    assert_eq!(
        fake.calls(),
        vec![
            "/RecordDelete corp.local www A /f",
            "/RecordAdd corp.local www A 10.0.0.5",
        ]
    );
}

#[tokio::test]
#[serial]
async fn test_set_record_aborts_when_delete_fails() {
    let fake = FakeDnscmd::new("[ \"$1\" = /RecordDelete ] && exit 3\nexit 0");
    let err = fake
        .executor()
        .set_record("corp.local", "www", "A", "10.0.0.5")
        .await
        .unwrap_err();
    assert!(matches!(err, DnscmdError::CommandFailed { code: 3, .. }));
    assert_eq!(fake.calls(), vec!["/RecordDelete corp.local www A /f"]);
}

#[tokio::test]
#[serial]
async fn test_set_record_surfaces_add_failure() {
    let fake = FakeDnscmd::new("[ \"$1\" = /RecordAdd ] && exit 4\nexit 0");
    let err = fake
        .executor()
        .set_record("corp.local", "www", "A", "10.0.0.5")
        .await
        .unwrap_err();
    assert!(matches!(err, DnscmdError::CommandFailed { code: 4, .. }));
    assert_eq!(fake.calls().len(), 2);
}

#[tokio::test]
#[serial]
async fn test_remove_record_only_deletes() {
    let fake = FakeDnscmd::new("exit 0");
    fake.executor()
        .remove_record("corp.local", "www", "A")
        .await
        .unwrap();
    assert_eq!(fake.calls(), vec!["/RecordDelete corp.local www A /f"]);
}
