//! IPv4 and IPv6 subnet calculators.
//!
//! Turns a textual address plus a prefix length into subnet mask, network and broadcast
//! addresses, host ranges, wildcard masks and, for IPv6, canonical expanded and compressed
//! forms. All calculations are pure functions returning [`Result`] with a [`CalcError`].
//!
//! ```
//! let subnet = subnet_calc::ipv4_subnet("192.168.0.1", 24).unwrap();
//! assert_eq!(subnet.usable_count, 253);
//!
//! let v6 = subnet_calc::ipv6_subnet("2001:270:faff::1", 64).unwrap();
//! assert_eq!(v6.gateway, "2001:270:faff::1");
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, ErrorKind, Result};
pub use models::{validate_ipv4, validate_ipv6, ClassDefaults, LegacyClass};
pub use processing::{
    ipv4_cidr, ipv4_subnet, ipv6_subnet, Ipv4CidrResult, Ipv4SubnetResult, Ipv6SubnetResult,
};

/// Example address and default prefix for a legacy class.
pub fn legacy_class_defaults(class: LegacyClass) -> ClassDefaults {
    class.defaults()
}
