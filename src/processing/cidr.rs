//! IPv4 CIDR calculation.
//!
//! Like [`super::ipv4_subnet`] but reports wildcard mask, address and subnet counts relative
//! to the classful default, and the route in CIDR notation.

use super::subnet::AddressRange;
use crate::error::Result;
use crate::models::{legacy_default_prefix, parse_ipv4, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Result of an IPv4 CIDR calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4CidrResult {
    pub ip_address: Ipv4Addr,
    pub prefix: u8,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub network_id: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub range: AddressRange,
    pub max_addresses: u64,
    /// Subnets of this size inside the classful network, `None` when not applicable.
    pub max_subnets: Option<u64>,
    pub cidr_notation: String,
    pub route: Ipv4,
}

/// Where a prefix cuts inside a single octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OctetBlock {
    /// 1-based position of the octet.
    pub octet_index: u8,
    pub octet_value: u8,
    pub block_size: u16,
    pub start: u8,
    pub end: u8,
    /// Prefix is a multiple of 8.
    pub on_octet_boundary: bool,
}

/// Calculate CIDR facts for `address` with a prefix of `prefix` bits.
///
/// # Examples
/// ```
/// use subnet_calc::processing::ipv4_cidr;
/// let result = ipv4_cidr("172.0.0.1", 24).unwrap();
/// assert_eq!(result.max_subnets, Some(256));
/// assert_eq!(result.route.to_string(), "172.0.0.0/24");
/// ```
pub fn ipv4_cidr(address: &str, prefix: u8) -> Result<Ipv4CidrResult> {
    let addr = parse_ipv4(address).inspect_err(|e| log::warn!("ipv4_cidr: {e}"))?;
    let cidr = Ipv4::from_parts(addr, prefix).inspect_err(|e| log::warn!("ipv4_cidr: {e}"))?;

    let mask = cidr.netmask();
    let route = cidr.network();
    let max_subnets = legacy_default_prefix(addr.octets()[0])
        .filter(|&default| prefix >= default)
        .map(|default| 1u64 << (prefix - default));

    let result = Ipv4CidrResult {
        ip_address: addr,
        prefix,
        subnet_mask: Ipv4Addr::from(mask),
        wildcard_mask: Ipv4Addr::from(!mask),
        network_id: cidr.lo(),
        broadcast_address: cidr.hi(),
        range: AddressRange::new(cidr.lo(), cidr.hi()),
        max_addresses: cidr.size(),
        max_subnets,
        cidr_notation: format!("/{prefix}"),
        route,
    };
    log::debug!(
        "ipv4_cidr({cidr}) route={} max_subnets={:?}",
        result.route,
        result.max_subnets
    );
    Ok(result)
}

/// Octet block containing `address` for a prefix.
///
/// The octet shown is the one right after a byte-aligned prefix, or the one the prefix
/// cuts through; /32 shows the last octet with a block of one.
pub fn octet_block(address: &str, prefix: u8) -> Result<OctetBlock> {
    let addr = parse_ipv4(address)?;
    let cidr = Ipv4::from_parts(addr, prefix)?;

    let index = usize::from((cidr.mask / 8).min(3));
    let block_size: u16 = match cidr.mask {
        32 => 1,
        m if m % 8 == 0 => 256,
        m => 1 << (8 - m % 8),
    };
    let octet_value = addr.octets()[index];
    let start = u16::from(octet_value) / block_size * block_size;
    let end = start + block_size - 1;

    Ok(OctetBlock {
        octet_index: index as u8 + 1,
        octet_value,
        block_size,
        start: start as u8,
        end: end as u8,
        on_octet_boundary: cidr.mask % 8 == 0,
    })
}
