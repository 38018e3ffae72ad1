// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! dnscmd command execution
//!
//! This module executes the Windows DNS server management tool (`dnscmd.exe`)
//! as a subprocess. Arguments are always passed as a fixed vector, never
//! through a shell, and the tool's text output is returned for parsing.

use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, error};

use crate::metrics;

/// Default dnscmd executable, resolved through `PATH`
pub const DEFAULT_DNSCMD_PATH: &str = "dnscmd.exe";

/// Exit code of `DNS_ERROR_ZONE_DOES_NOT_EXIST`
pub const ZONE_DOES_NOT_EXIST_EXIT_CODE: i32 = 9601;

/// dnscmd execution errors
#[derive(Debug, thiserror::Error)]
pub enum DnscmdError {
    #[error("dnscmd {command} failed: zone does not exist")]
    ZoneDoesNotExist { command: String },

    #[error("dnscmd {command} exited with status {code}: {output}")]
    CommandFailed {
        command: String,
        code: i32,
        output: String,
    },

    #[error("dnscmd {command} was terminated before completing")]
    Terminated { command: String },

    #[error("Failed to execute dnscmd {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Map a non-zero exit of `command` to an error
pub(crate) fn classify_exit(command: &str, code: Option<i32>, output: &str) -> DnscmdError {
    match code {
        Some(ZONE_DOES_NOT_EXIST_EXIT_CODE) => DnscmdError::ZoneDoesNotExist {
            command: command.to_string(),
        },
        Some(code) => DnscmdError::CommandFailed {
            command: command.to_string(),
            code,
            output: output.trim().to_string(),
        },
        None => DnscmdError::Terminated {
            command: command.to_string(),
        },
    }
}

/// dnscmd command executor
#[derive(Debug, Clone)]
pub struct DnscmdExecutor {
    pub(crate) dnscmd_path: String,
}

impl DnscmdExecutor {
    /// Create a new dnscmd executor
    ///
    /// # Arguments
    /// * `dnscmd_path` - Path to the dnscmd binary (default: "dnscmd.exe")
    pub fn new(dnscmd_path: Option<String>) -> Self {
        Self {
            dnscmd_path: dnscmd_path.unwrap_or_else(|| DEFAULT_DNSCMD_PATH.to_string()),
        }
    }

    /// Execute a dnscmd command
    ///
    /// # Arguments
    /// * `args` - Command arguments (e.g., &["/EnumRecords", "example.com", "@"])
    /// * `include_stderr` - Append stderr to the returned text
    ///
    /// # Returns
    /// The output text from dnscmd on success
    ///
    /// # Errors
    /// Returns an error if dnscmd cannot be started or exits non-zero
    async fn execute(&self, args: &[&str], include_stderr: bool) -> Result<String, DnscmdError> {
        debug!("Executing dnscmd command: {} {:?}", self.dnscmd_path, args);

        let start = Instant::now();
        let command = args.first().copied().unwrap_or("unknown");
        let metric_label = command.trim_start_matches('/').to_lowercase();

        let output = Command::new(&self.dnscmd_path)
            .args(args)
            .output()
            .await
            .map_err(|source| {
                error!("Failed to start dnscmd {}: {}", command, source);
                metrics::record_dnscmd_command(&metric_label, false, start.elapsed().as_secs_f64());
                DnscmdError::Spawn {
                    command: command.to_string(),
                    source,
                }
            })?;

        let duration = start.elapsed().as_secs_f64();

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if include_stderr || !output.status.success() {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        if !output.status.success() {
            error!(
                "dnscmd {} failed with status {:?}: {}",
                command,
                output.status.code(),
                text.trim()
            );
            metrics::record_dnscmd_command(&metric_label, false, duration);
            return Err(classify_exit(command, output.status.code(), &text));
        }

        debug!("dnscmd command output: {}", text);
        metrics::record_dnscmd_command(&metric_label, true, duration);
        Ok(text)
    }

    /// Get server information (`dnscmd /Info`)
    pub async fn info(&self) -> Result<String, DnscmdError> {
        self.execute(&["/Info"], false).await
    }

    /// List zones (`dnscmd /EnumZones`), stdout and stderr combined
    pub async fn enum_zones(&self) -> Result<String, DnscmdError> {
        self.execute(&["/EnumZones"], true).await
    }

    /// List all records of a zone (`dnscmd /EnumRecords <zone> @`)
    pub async fn enum_records(&self, zone_name: &str) -> Result<String, DnscmdError> {
        self.execute(&["/EnumRecords", zone_name, "@"], false).await
    }

    /// Delete all records of a type at a node, without confirmation
    pub async fn record_delete(
        &self,
        zone_name: &str,
        node_name: &str,
        record_type: &str,
    ) -> Result<String, DnscmdError> {
        self.execute(
            &["/RecordDelete", zone_name, node_name, record_type, "/f"],
            false,
        )
        .await
    }

    /// Add a record
    pub async fn record_add(
        &self,
        zone_name: &str,
        node_name: &str,
        record_type: &str,
        value: &str,
    ) -> Result<String, DnscmdError> {
        self.execute(
            &["/RecordAdd", zone_name, node_name, record_type, value],
            false,
        )
        .await
    }

    /// Replace the records of a type at a node with a single value
    ///
    /// Runs delete then add as two separate commands. This is not atomic:
    /// if the delete fails the add is never attempted, and concurrent
    /// callers can interleave between the two steps.
    pub async fn set_record(
        &self,
        zone_name: &str,
        node_name: &str,
        record_type: &str,
        value: &str,
    ) -> Result<String, DnscmdError> {
        let deleted = self.record_delete(zone_name, node_name, record_type).await?;
        let added = self
            .record_add(zone_name, node_name, record_type, value)
            .await?;
        Ok(format!("{}{}", deleted, added))
    }

    /// Remove all records of a type at a node
    pub async fn remove_record(
        &self,
        zone_name: &str,
        node_name: &str,
        record_type: &str,
    ) -> Result<String, DnscmdError> {
        self.record_delete(zone_name, node_name, record_type).await
    }
}
