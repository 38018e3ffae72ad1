// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared helpers for unit tests
//!
//! Tests that need dnscmd run a small shell script in its place. The script
//! appends each invocation's arguments to `calls.log` next to itself, so a
//! test can check exactly which commands ran and in which order.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use crate::dnscmd::DnscmdExecutor;
use crate::types::AppState;

/// A stand-in dnscmd executable living in a temporary directory
pub struct FakeDnscmd {
    dir: TempDir,
    path: PathBuf,
}

impl FakeDnscmd {
    /// Create a fake dnscmd whose behaviour is the given `sh` snippet
    ///
    /// The snippet runs after the arguments have been logged and sees them
    /// as `$1`, `$2`, ...
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("dnscmd");
        let log = dir.path().join("calls.log");

        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\n{}\n",
            log.display(),
            body
        );
        fs::write(&path, script).expect("Failed to write fake dnscmd");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake dnscmd executable");

        Self { dir, path }
    }

    /// Executor pointing at this fake
    pub fn executor(&self) -> DnscmdExecutor {
        DnscmdExecutor::new(Some(self.path.display().to_string()))
    }

    /// Application state pointing at this fake
    pub fn state(&self) -> AppState {
        AppState {
            dnscmd: Arc::new(self.executor()),
        }
    }

    /// Argument lines of every invocation so far
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Sample `/EnumZones` output
pub const ENUM_ZONES_OUTPUT: &str = "\
Enumerated zone list:
\tZone count = 2

 Zone name                      Type       Storage         Properties

 _msdcs.corp.local              Primary    AD-Forest       Secure
 corp.local                     Primary    AD-Domain       Secure Aging

Command completed successfully.
";

/// Sample `/EnumRecords` output for corp.local
pub const ENUM_RECORDS_OUTPUT: &str = "\
Returned records:
@ 3600 NS\tdc1.corp.local.
dc1 [Aging:3679872] 1200 A\t10.0.0.10
\t[Aging:3679872] 1200 A\t10.0.0.11

Command completed successfully.
";

/// A fake dnscmd that prints canned output for the listing commands and
/// succeeds for everything else
pub fn listing_dnscmd() -> FakeDnscmd {
    FakeDnscmd::new(&format!(
        "case \"$1\" in\n  /EnumZones) cat <<'EOF'\n{}EOF\n  ;;\n  /EnumRecords) cat <<'EOF'\n{}EOF\n  ;;\nesac\nexit 0",
        ENUM_ZONES_OUTPUT, ENUM_RECORDS_OUTPUT
    ))
}
