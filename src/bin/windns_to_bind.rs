// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Export zones from a Windows DNS API server
//!
//! With only a server URL, prints the zone listing. With zone names, prints a
//! BIND-style zone file for each zone.

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;

use windns_api::{
    dnscmd_types::{Record, Zone},
    zonefile::{to_zone_file, to_zone_list},
};

#[derive(Debug, Parser)]
#[command(name = "windns-to-bind", version, about)]
struct Args {
    /// Base URL of the API server (e.g., http://dns01:3111)
    server_url: String,

    /// Zones to export; lists all zones when omitted
    zones: Vec<String>,
}

async fn fetch_zones(client: &reqwest::Client, base: &str) -> Result<Vec<Zone>> {
    client
        .get(format!("{}/dns/", base))
        .send()
        .await
        .context("failed to reach server")?
        .error_for_status()
        .context("zone listing failed")?
        .json()
        .await
        .context("invalid zone listing")
}

async fn fetch_records(client: &reqwest::Client, base: &str, zone: &str) -> Result<Vec<Record>> {
    client
        .get(format!("{}/dns/{}", base, zone))
        .send()
        .await
        .with_context(|| format!("failed to reach server for zone {}", zone))?
        .error_for_status()
        .with_context(|| format!("record listing failed for zone {}", zone))?
        .json()
        .await
        .with_context(|| format!("invalid record listing for zone {}", zone))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let base = args.server_url.trim_end_matches('/');

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .user_agent(concat!("windns-to-bind/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build http client")?;

    if args.zones.is_empty() {
        let zones = fetch_zones(&client, base).await?;
        print!("{}", to_zone_list(&zones));
        return Ok(());
    }

    for zone in &args.zones {
        let records = fetch_records(&client, base, zone).await?;
        print!("{}", to_zone_file(zone, &records));
    }

    Ok(())
}
