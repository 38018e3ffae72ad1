// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Text rendering of zones and records
//!
//! Produces BIND-style zone file text from parsed `/EnumRecords` output and
//! a fixed-width listing of zones.

use std::fmt::Write;

use crate::dnscmd_types::{Record, Zone};

/// Render the records of `zone_name` as zone file text
///
/// # Examples
///
/// ```rust
/// use windns_api::{dnscmd_types::Record, zonefile::to_zone_file};
///
/// let records = vec![Record {
///     name: "www".to_string(),
///     record_type: "A".to_string(),
///     ttl: 3600,
///     value: "192.0.2.1".to_string(),
///     aging: 0,
/// }];
/// let text = to_zone_file("example.com", &records);
/// assert!(text.starts_with("$ORIGIN example.com.\n"));
/// ```
pub fn to_zone_file(zone_name: &str, records: &[Record]) -> String {
    let mut zone_file = format!("$ORIGIN {}.\n", zone_name);

    for record in records {
        // Writing into a String cannot fail
        let _ = writeln!(
            zone_file,
            "{:<30} {:>6}  {:<10} {}",
            record.name, record.ttl, record.record_type, record.value
        );
    }

    zone_file
}

/// Render a fixed-width listing of zones, one per line
pub fn to_zone_list(zones: &[Zone]) -> String {
    let mut listing = String::new();

    for zone in zones {
        let _ = writeln!(
            listing,
            "{:<50} {:<15} {:<15} [{}]",
            zone.name,
            zone.zone_type,
            zone.storage,
            zone.properties.join(" ")
        );
    }

    listing
}
