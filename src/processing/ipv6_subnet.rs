//! IPv6 subnet calculation over 128-bit integers.

use crate::error::{CalcError, Result};
use crate::models::ipv6::{self, MAX_LENGTH};
use serde::Serialize;

/// Totals below this are shown as a plain number, otherwise as a power of two.
const LITERAL_TOTAL_LIMIT: u128 = 10_000;

/// Result of an IPv6 subnet calculation. Addresses are in compressed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6SubnetResult {
    pub ip_address: String,
    pub prefix: u8,
    pub expanded_ip: String,
    pub network_address: String,
    pub gateway: String,
    pub range_start: String,
    pub range_end: String,
    /// Exact number of addresses, in decimal.
    pub total_addresses: String,
    pub total_addresses_formatted: String,
}

fn host_mask_for(host_bits: u32) -> u128 {
    // host_bits < 128 because the prefix is at least 1
    (1u128 << host_bits) - 1
}

/// Calculate network, gateway and range for an IPv6 `address` with `prefix` bits (1-128).
///
/// # Examples
/// ```
/// use subnet_calc::processing::ipv6_subnet;
/// let result = ipv6_subnet("2001:270:faff::1", 64).unwrap();
/// assert_eq!(result.network_address, "2001:270:faff::");
/// assert_eq!(result.total_addresses_formatted, "2^64");
/// ```
pub fn ipv6_subnet(address: &str, prefix: u8) -> Result<Ipv6SubnetResult> {
    if !(1..=MAX_LENGTH).contains(&prefix) {
        let err = CalcError::InvalidPrefixLength {
            prefix,
            min: 1,
            max: MAX_LENGTH,
        };
        log::warn!("ipv6_subnet: {err}");
        return Err(err);
    }
    let expanded = ipv6::expand(address).inspect_err(|e| log::warn!("ipv6_subnet: {e}"))?;
    let value = ipv6::to_integer(&expanded)?;

    let host_bits = u32::from(MAX_LENGTH - prefix);
    let host_mask = host_mask_for(host_bits);
    let net_mask = u128::MAX ^ host_mask;

    let network = value & net_mask;
    let range_end = network | host_mask;
    let gateway = network.checked_add(1).ok_or_else(|| {
        CalcError::FormatOverflow(format!("gateway after {}", ipv6::compress_integer(network)))
    })?;

    let total = 1u128 << host_bits;
    let total_addresses_formatted = if total < LITERAL_TOTAL_LIMIT {
        total.to_string()
    } else {
        format!("2^{host_bits}")
    };

    let network_address = ipv6::compress(&ipv6::from_integer(network))?;
    let result = Ipv6SubnetResult {
        ip_address: address.to_string(),
        prefix,
        expanded_ip: expanded,
        range_start: network_address.clone(),
        network_address,
        gateway: ipv6::compress(&ipv6::from_integer(gateway))?,
        range_end: ipv6::compress(&ipv6::from_integer(range_end))?,
        total_addresses: total.to_string(),
        total_addresses_formatted,
    };
    log::debug!(
        "ipv6_subnet({address}/{prefix}) network={} end={} total={}",
        result.network_address,
        result.range_end,
        result.total_addresses_formatted
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_ipv6_subnet_64() {
        let r = ipv6_subnet("2001:270:faff::1", 64).unwrap();
        assert_eq!(r.expanded_ip, "2001:0270:faff:0000:0000:0000:0000:0001");
        assert_eq!(r.network_address, "2001:270:faff::");
        assert_eq!(r.range_start, "2001:270:faff::");
        assert_eq!(r.gateway, "2001:270:faff::1");
        assert_eq!(r.range_end, "2001:270:faff:0:ffff:ffff:ffff:ffff");
        assert_eq!(r.total_addresses, "18446744073709551616");
        assert_eq!(r.total_addresses_formatted, "2^64");
    }

    #[test]
    fn test_ipv6_subnet_small_totals() {
        let r = ipv6_subnet("2001:db8::abcd", 120).unwrap();
        assert_eq!(r.network_address, "2001:db8::ab00");
        assert_eq!(r.range_end, "2001:db8::abff");
        assert_eq!(r.total_addresses, "256");
        assert_eq!(r.total_addresses_formatted, "256");

        // 2^13 = 8192 is still below the literal limit, 2^14 is not
        assert_eq!(
            ipv6_subnet("2001:db8::1", 115).unwrap().total_addresses_formatted,
            "8192"
        );
        assert_eq!(
            ipv6_subnet("2001:db8::1", 114).unwrap().total_addresses_formatted,
            "2^14"
        );
    }

    #[test]
    fn test_ipv6_subnet_prefix_1() {
        let r = ipv6_subnet("8000::1", 1).unwrap();
        assert_eq!(r.network_address, "8000::");
        assert_eq!(r.range_end, "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(r.total_addresses, (1u128 << 127).to_string());
        assert_eq!(r.total_addresses_formatted, "2^127");
    }

    #[test]
    fn test_ipv6_subnet_prefix_128() {
        let r = ipv6_subnet("2001:db8::5", 128).unwrap();
        assert_eq!(r.network_address, "2001:db8::5");
        assert_eq!(r.range_end, "2001:db8::5");
        assert_eq!(r.gateway, "2001:db8::6");
        assert_eq!(r.total_addresses, "1");
    }

    #[test]
    fn test_ipv6_subnet_gateway_overflow() {
        let err = ipv6_subnet("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff", 128).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatOverflow);
    }

    #[test]
    fn test_ipv6_subnet_invalid() {
        assert_eq!(
            ipv6_subnet("2001:db8::1::1", 64).unwrap_err().kind(),
            ErrorKind::InvalidAddressFormat
        );
        assert_eq!(
            ipv6_subnet("2001:db8::1", 0).unwrap_err().kind(),
            ErrorKind::InvalidPrefixLength
        );
        assert_eq!(
            ipv6_subnet("2001:db8::1", 129).unwrap_err().kind(),
            ErrorKind::InvalidPrefixLength
        );
    }

    #[test]
    fn test_ipv6_subnet_invariants() {
        for prefix in 1..=MAX_LENGTH {
            let r = ipv6_subnet("2001:db8:85a3::8a2e:370:7334", prefix).unwrap();
            let network = ipv6::to_integer(&r.network_address).unwrap();
            let end = ipv6::to_integer(&r.range_end).unwrap();
            let host_mask = host_mask_for(u32::from(MAX_LENGTH - prefix));
            assert_eq!(network & host_mask, 0);
            assert_eq!(end, network | host_mask);
            assert_eq!(ipv6::to_integer(&r.gateway).unwrap(), network + 1);
        }
    }
}
