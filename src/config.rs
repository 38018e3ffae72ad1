// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Server configuration
//!
//! Every option can be given as a command-line flag or through the matching
//! environment variable.

use clap::Parser;

use crate::dnscmd::DEFAULT_DNSCMD_PATH;

/// Default listen address: all interfaces, port 3111
pub const DEFAULT_LISTEN_ADDR: &str = ":3111";

/// HTTP API for a Windows DNS server, backed by dnscmd
#[derive(Debug, Clone, Parser)]
#[command(name = "windns-api", version, about)]
pub struct Config {
    /// Enable read-write mode (i.e., allow set and remove)
    #[arg(long = "rw", env = "WINDNS_RW")]
    pub writable: bool,

    /// HTTP service address; ":port" listens on all interfaces
    #[arg(long, env = "WINDNS_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub addr: String,

    /// Path to the dnscmd executable
    #[arg(long, env = "WINDNS_DNSCMD", default_value = DEFAULT_DNSCMD_PATH)]
    pub dnscmd: String,
}

impl Config {
    /// Address to bind, with a bare `:port` expanded to all interfaces
    pub fn listen_addr(&self) -> String {
        if self.addr.starts_with(':') {
            format!("0.0.0.0{}", self.addr)
        } else {
            self.addr.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            writable: false,
            addr: DEFAULT_LISTEN_ADDR.to_string(),
            dnscmd: DEFAULT_DNSCMD_PATH.to_string(),
        }
    }
}
