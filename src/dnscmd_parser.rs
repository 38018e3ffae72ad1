// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! dnscmd output parser
//!
//! This module turns the tabular text printed by `dnscmd /EnumZones` and
//! `dnscmd /EnumRecords` into [`Zone`] and [`Record`] values.
//!
//! Both listings are framed the same way: a header line opens the listing,
//! a sentinel line closes it, and everything in between is one entity per
//! line. The framing is tracked by an explicit [`ScanState`] rather than
//! loose booleans. Parsing never fails: lines that do not have the expected
//! shape are dropped and counted in `windns_parse_lines_dropped_total`.
//!
//! # Examples
//!
//! ```rust
//! use windns_api::dnscmd_parser::parse_enum_records;
//!
//! let output = "Returned records:\nwww 3600 A\t192.0.2.1\n\t3600 A\t192.0.2.2\n\nCommand completed successfully.\n";
//! let records = parse_enum_records(output);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].name, "www");
//! ```

use nom::{
    bytes::complete::tag,
    combinator::{all_consuming, rest},
    sequence::preceded,
    IResult,
};
use std::str::SplitWhitespace;
use tracing::debug;

use crate::{
    dnscmd_types::{aging_hours_to_unix, Record, Zone, AGING_INVALID, AGING_NONE},
    metrics,
};

/// Line that closes both listings
pub const COMPLETION_SENTINEL: &str = "Command completed successfully.";

/// Prefix of the column header that opens the `/EnumZones` listing
pub const ZONE_LISTING_HEADER: &str = " Zone name";

/// Line that opens the `/EnumRecords` listing
pub const RECORD_LISTING_HEADER: &str = "Returned records:";

// ========== Listing Scanner ==========

/// Position of the scanner relative to a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Before the header line
    #[default]
    SeekingHeader,
    /// Between the header and the closing line
    InsideListing,
    /// After the closing line; a new header opens another listing
    Done,
}

/// How a listing is opened and closed
#[derive(Clone, Copy)]
pub struct ListingFrame {
    opens: fn(&str) -> bool,
    closes: fn(&str) -> bool,
}

fn opens_zone_listing(line: &str) -> bool {
    line.starts_with(ZONE_LISTING_HEADER)
}

fn closes_zone_listing(line: &str) -> bool {
    line == COMPLETION_SENTINEL
}

fn opens_record_listing(line: &str) -> bool {
    line == RECORD_LISTING_HEADER
}

fn closes_record_listing(line: &str) -> bool {
    line.is_empty() || line == COMPLETION_SENTINEL
}

/// `/EnumZones`: opened by the column header, closed by the sentinel
pub const ZONE_LISTING: ListingFrame = ListingFrame {
    opens: opens_zone_listing,
    closes: closes_zone_listing,
};

/// `/EnumRecords`: opened by `Returned records:`, closed by a blank line or the sentinel
pub const RECORD_LISTING: ListingFrame = ListingFrame {
    opens: opens_record_listing,
    closes: closes_record_listing,
};

impl ScanState {
    /// Advance past `line`, returning the new state and whether `line` is listing content
    ///
    /// Header and closing lines are never content.
    pub fn advance(self, line: &str, frame: &ListingFrame) -> (ScanState, bool) {
        match self {
            ScanState::SeekingHeader | ScanState::Done => {
                if (frame.opens)(line) {
                    (ScanState::InsideListing, false)
                } else {
                    (self, false)
                }
            }
            ScanState::InsideListing => {
                if (frame.closes)(line) {
                    (ScanState::Done, false)
                } else {
                    (ScanState::InsideListing, true)
                }
            }
        }
    }
}

/// Yield the content lines of every listing in `output`
pub fn listing_lines<'a>(
    output: &'a str,
    frame: ListingFrame,
) -> impl Iterator<Item = &'a str> + 'a {
    output
        .lines()
        .scan(ScanState::default(), move |state, line| {
            let (next, is_content) = state.advance(line, &frame);
            *state = next;
            Some(is_content.then_some(line))
        })
        .flatten()
}

// ========== Zone Listing ==========

/// Parse one `/EnumZones` row: name, type, storage, then any property flags
fn parse_zone_line(line: &str) -> Option<Zone> {
    let mut fields = line.split_whitespace();
    let name = fields.next()?;
    let zone_type = fields.next()?;
    let storage = fields.next()?;

    Some(Zone {
        name: name.to_string(),
        zone_type: zone_type.to_string(),
        storage: storage.to_string(),
        properties: fields.map(str::to_string).collect(),
    })
}

/// Parse `dnscmd /EnumZones` output
///
/// # Examples
///
/// ```rust
/// use windns_api::dnscmd_parser::parse_enum_zones;
///
/// let output = " Zone name  Type  Storage  Properties\n\n example.com  Primary  File  Update\n\nCommand completed successfully.\n";
/// let zones = parse_enum_zones(output);
/// assert_eq!(zones.len(), 1);
/// assert_eq!(zones[0].properties, vec!["Update"]);
/// ```
pub fn parse_enum_zones(output: &str) -> Vec<Zone> {
    listing_lines(output, ZONE_LISTING)
        .filter_map(|line| {
            let zone = parse_zone_line(line);
            if zone.is_none() && !line.trim().is_empty() {
                debug!("Dropping malformed zone line: {:?}", line);
                metrics::record_dropped_line("zones", "malformed");
            }
            zone
        })
        .collect()
}

// ========== Record Listing ==========

/// Match `[Aging:<inner>` once the field's closing `]` is stripped
///
/// `<inner>` runs to the end of the field and may itself contain `]`.
fn aging_stamp(input: &str) -> IResult<&str, &str> {
    all_consuming(preceded(tag("[Aging:"), rest))(input)
}

/// Decode an aging field
///
/// Returns `None` if `field` is not an aging stamp at all. A stamp whose
/// inner value is not an integer decodes to [`AGING_INVALID`].
pub(crate) fn parse_aging(field: &str) -> Option<i64> {
    let (_, hours) = aging_stamp(field.strip_suffix(']')?).ok()?;
    Some(
        hours
            .parse::<i64>()
            .ok()
            .and_then(aging_hours_to_unix)
            .unwrap_or(AGING_INVALID),
    )
}

/// Parse the fields following the owner name: `[aging] ttl type value...`
fn parse_record_fields(name: String, fields: SplitWhitespace<'_>) -> Option<Record> {
    let mut fields = fields.peekable();

    let aging = match fields.peek().and_then(|field| parse_aging(field)) {
        Some(aging) => {
            fields.next();
            aging
        }
        None => AGING_NONE,
    };

    let ttl = fields.next()?.parse::<u32>().unwrap_or(0);
    let record_type = fields.next()?.to_string();
    let value = fields.collect::<Vec<_>>().join(" ");
    if value.is_empty() {
        return None;
    }

    Some(Record {
        name,
        record_type,
        ttl,
        value,
        aging,
    })
}

/// Parse `dnscmd /EnumRecords` output
///
/// A line starting with a tab has no owner name and belongs to the most
/// recently named record. Such a line appearing before any named line is
/// dropped.
pub fn parse_enum_records(output: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut previous_name: Option<String> = None;

    for line in listing_lines(output, RECORD_LISTING) {
        let mut fields = line.split_whitespace();

        let name = if line.starts_with('\t') {
            match &previous_name {
                Some(name) => name.clone(),
                None => {
                    debug!("Dropping continuation line before any named record: {:?}", line);
                    metrics::record_dropped_line("records", "orphan_continuation");
                    continue;
                }
            }
        } else {
            match fields.next() {
                Some(name) => {
                    previous_name = Some(name.to_string());
                    name.to_string()
                }
                None => continue,
            }
        };

        match parse_record_fields(name, fields) {
            Some(record) => records.push(record),
            None => {
                debug!("Dropping malformed record line: {:?}", line);
                metrics::record_dropped_line("records", "malformed");
            }
        }
    }

    records
}
