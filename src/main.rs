// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Windows DNS API Server
//!
//! A lightweight HTTP API server in front of a Windows DNS server:
//! - Lists zones and records by running `dnscmd /EnumZones` and `/EnumRecords`
//! - Renders zones as zone file text
//! - Sets and removes A records when started in read-write mode
//!
//! The server must run on the DNS host (or a host with the DNS management
//! tools installed) under an account allowed to run dnscmd.

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use windns_api::{config::Config, metrics, service::ServiceHost};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::parse();

    info!("starting windns api server v{}", env!("CARGO_PKG_VERSION"));

    // initialize metrics
    metrics::init_metrics(config.writable);

    info!("dnscmd path: {}", config.dnscmd);
    if config.writable {
        warn!("read-write mode is enabled - set and remove endpoints are exposed");
    } else {
        info!("read-only mode");
    }

    let host = ServiceHost::start(&config)
        .await
        .context("failed to start server")?;

    host.run_until_signal().await.context("server error")?;

    Ok(())
}
