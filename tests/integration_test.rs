//! Integration tests for subnet-calc
//!
//! These tests exercise the public entry points end to end.

use std::net::Ipv4Addr;
use subnet_calc::models::{compress, expand, ipv6};
use subnet_calc::{
    ipv4_cidr, ipv4_subnet, ipv6_subnet, legacy_class_defaults, validate_ipv4, validate_ipv6,
    ErrorKind, LegacyClass,
};

#[test]
fn test_ipv4_subnet_workflow() {
    assert!(validate_ipv4("192.168.0.1"));

    let result = ipv4_subnet("192.168.0.1", 24).expect("valid subnet");
    assert_eq!(result.network_id, Some(Ipv4Addr::new(192, 168, 0, 0)));
    assert_eq!(result.broadcast_address, Some(Ipv4Addr::new(192, 168, 0, 255)));
    assert_eq!(result.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
    assert_eq!(
        result.usable_range.map(|r| r.to_string()).as_deref(),
        Some("192.168.0.2 - 192.168.0.254")
    );
    assert_eq!(result.usable_count, 253);
}

#[test]
fn test_ipv4_subnet_no_usable_hosts() {
    for prefix in [31, 32] {
        for address in ["10.0.0.0", "192.168.7.9", "255.255.255.255"] {
            let result = ipv4_subnet(address, prefix).expect("valid subnet");
            assert_eq!(result.usable_count, 0, "{address}/{prefix}");
            assert_eq!(result.network_id, None, "{address}/{prefix}");
            assert_eq!(result.broadcast_address, None, "{address}/{prefix}");
        }
    }
}

#[test]
fn test_ipv4_total_count_matches_prefix() {
    for prefix in 0..=32u8 {
        let result = ipv4_subnet("203.0.113.9", prefix).expect("valid subnet");
        assert_eq!(result.total_ip_count, 1u64 << (32 - prefix));
    }
}

#[test]
fn test_ipv4_cidr_workflow() {
    let result = ipv4_cidr("172.0.0.1", 24).expect("valid cidr");
    assert_eq!(result.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
    assert_eq!(result.network_id, Ipv4Addr::new(172, 0, 0, 0));
    assert_eq!(result.max_subnets, Some(256));
    assert_eq!(result.route.to_string(), "172.0.0.0/24");
    assert_eq!(result.cidr_notation, "/24");
}

#[test]
fn test_class_defaults_seed_calculator() {
    for class in LegacyClass::ALL {
        let defaults = legacy_class_defaults(class);
        let address = defaults.example_address.to_string();
        let result = ipv4_subnet(&address, defaults.default_prefix).expect("valid subnet");
        assert_eq!(LegacyClass::of(result.ip_address), class);
    }
}

#[test]
fn test_invalid_input_is_reported() {
    assert!(!validate_ipv4("1.2.3.04"));
    assert_eq!(
        ipv4_subnet("1.2.3.04", 24).unwrap_err().kind(),
        ErrorKind::InvalidAddressFormat
    );
    assert_eq!(
        ipv4_cidr("1.2.3.4", 33).unwrap_err().kind(),
        ErrorKind::InvalidPrefixLength
    );
    assert!(!validate_ipv6("2001:db8:::1"));
    assert_eq!(
        ipv6_subnet("2001:db8:::1", 64).unwrap_err().kind(),
        ErrorKind::InvalidAddressFormat
    );
    assert_eq!(
        ipv6_subnet("2001:db8::1", 0).unwrap_err().kind(),
        ErrorKind::InvalidPrefixLength
    );
}

#[test]
fn test_ipv6_codec() {
    let expanded = expand("2001:270:faff::1").expect("valid address");
    assert_eq!(expanded, "2001:0270:faff:0000:0000:0000:0000:0001");
    assert_eq!(compress(&expanded).unwrap(), "2001:270:faff::1");

    let value = ipv6::to_integer(&expanded).unwrap();
    assert_eq!(ipv6::from_integer(value), expanded);
}

#[test]
fn test_ipv6_subnet_workflow() {
    assert!(validate_ipv6("2001:270:faff::1"));
    let result = ipv6_subnet("2001:270:faff::1", 64).expect("valid subnet");
    assert_eq!(result.network_address, "2001:270:faff::");
    assert_eq!(result.gateway, "2001:270:faff::1");
    assert_eq!(result.range_end, "2001:270:faff:0:ffff:ffff:ffff:ffff");
    assert_eq!(result.total_addresses_formatted, "2^64");
}

#[test]
fn test_ipv6_canonical_form_is_stable() {
    for text in ["2001:DB8:0:0:8:800:200C:417A", "ff01::101", "::", "::ffff:192.0.2.1"] {
        let expanded = expand(text).unwrap();
        assert_eq!(expand(&compress(&expanded).unwrap()).unwrap(), expanded);
    }
}
