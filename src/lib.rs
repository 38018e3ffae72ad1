// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! windns-api - HTTP API for a Windows DNS server via dnscmd
//!
//! A lightweight library that exposes the zones and records of a Windows DNS
//! server over HTTP by running the `dnscmd` management tool and parsing its
//! text output.
//!
//! # Features
//!
//! - List zones and the records of a zone as JSON
//! - Render a zone as BIND-style zone file text
//! - Set and remove A records (read-write mode only)
//! - Strict validation of every value passed to dnscmd
//! - Prometheus metrics integration
//!
//! # Usage
//!
//! This crate can be used as both a library and a standalone binary:
//!
//! ## As a Library
//!
//! ### Using the dnscmd Executor
//!
//! ```rust,no_run
//! use windns_api::{dnscmd_parser, DnscmdExecutor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let executor = DnscmdExecutor::new(None);
//!
//!     let output = executor.enum_zones().await?;
//!     for zone in dnscmd_parser::parse_enum_zones(&output) {
//!         println!("{} ({})", zone.name, zone.zone_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Using Shared Types (for API clients)
//!
//! ```rust
//! use windns_api::Record;
//!
//! let json = r#"[{"Name":"www","Type":"A","TTL":3600,"Value":"192.0.2.1","Aging":0}]"#;
//! let records: Vec<Record> = serde_json::from_str(json).unwrap();
//! assert_eq!(records[0].value, "192.0.2.1");
//! ```
//!
//! ## As a Binary
//!
//! ```bash
//! windns-api --rw --addr :3111
//! windns-to-bind http://dns01:3111 corp.local > db.corp.local
//! ```

pub mod config;
pub mod dnscmd;
pub mod dnscmd_parser;
pub mod dnscmd_types;
pub mod metrics;
pub mod middleware;
pub mod records;
pub mod server;
pub mod service;
pub mod types;
pub mod validation;
pub mod zonefile;
pub mod zones;

// Re-export commonly used types

// dnscmd executor
pub use dnscmd::{DnscmdError, DnscmdExecutor};

// Parsed entities
pub use dnscmd_types::{Record, Zone};

// Error types
pub use types::{ApiError, AppState, MessageResponse};

// Server assembly
pub use config::Config;
pub use server::build_router;
pub use service::ServiceHost;

// Test modules
// Modules that drive a fake dnscmd shell script only build on Unix
#[cfg(all(test, unix))]
mod test_support;

#[cfg(all(test, unix))]
mod dnscmd_test;
#[cfg(test)]
mod metrics_test;
