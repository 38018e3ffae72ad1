// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Input validation for record mutations
//!
//! Every path parameter that ends up on a dnscmd command line is checked
//! here first. Nothing is escaped: values outside the whitelist are rejected.

use crate::types::ApiError;

/// The only record type that can be set or removed
pub const MUTABLE_RECORD_TYPE: &str = "A";

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// Validate the record type path segment
pub fn validate_record_type(record_type: &str) -> Result<(), ApiError> {
    if record_type != MUTABLE_RECORD_TYPE {
        return Err(ApiError::InvalidRequest(format!(
            "You specified an invalid record type ('{}'). Currently, only the 'A' (alias) record type is supported.  e.g. /dns/my.zone/A/..",
            record_type
        )));
    }
    Ok(())
}

/// Validate a zone name: letters, digits, dashes and dots only
pub fn validate_zone_name(zone_name: &str) -> Result<(), ApiError> {
    if !is_valid_name(zone_name) {
        return Err(ApiError::InvalidRequest(format!(
            "Invalid zone name ('{}'). Zone names can only contain letters, numbers, dashes (-), and dots (.).",
            zone_name
        )));
    }
    Ok(())
}

/// Validate a node name: letters, digits, dashes and dots only
pub fn validate_node_name(node_name: &str) -> Result<(), ApiError> {
    if !is_valid_name(node_name) {
        return Err(ApiError::InvalidRequest(format!(
            "Invalid node name ('{}'). Node names can only contain letters, numbers, dashes (-), and dots (.).",
            node_name
        )));
    }
    Ok(())
}

/// One dotted-quad octet: 1-3 digits, no leading zero, at most 255
fn is_valid_octet(octet: &str) -> bool {
    if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if octet.len() > 1 && octet.starts_with('0') {
        return false;
    }
    octet.parse::<u16>().map_or(false, |value| value <= 255)
}

/// Validate an IPv4 address in dotted-quad form
pub fn validate_ipv4(ip_address: &str) -> Result<(), ApiError> {
    let octets: Vec<&str> = ip_address.split('.').collect();
    if octets.len() != 4 || !octets.iter().all(|octet| is_valid_octet(octet)) {
        return Err(ApiError::InvalidRequest(format!(
            "Invalid IP address ('{}'). Currently, only IPv4 addresses are accepted.",
            ip_address
        )));
    }
    Ok(())
}

/// Validate the parameters of a set request, in path order after the type check
pub fn validate_set_request(
    zone_name: &str,
    record_type: &str,
    node_name: &str,
    ip_address: &str,
) -> Result<(), ApiError> {
    validate_record_type(record_type)?;
    validate_zone_name(zone_name)?;
    validate_node_name(node_name)?;
    validate_ipv4(ip_address)
}

/// Validate the parameters of a remove request
pub fn validate_remove_request(
    zone_name: &str,
    record_type: &str,
    node_name: &str,
) -> Result<(), ApiError> {
    validate_record_type(record_type)?;
    validate_zone_name(zone_name)?;
    validate_node_name(node_name)
}
