//! Address models and codecs.
//!
//! - [`Ipv4`] and the IPv4 codec (strict parsing, integer packing, prefix masks)
//! - the IPv6 codec (validation, expansion, RFC 5952 compression, `u128` packing)
//! - [`LegacyClass`] metadata for classful addressing

mod class;
pub mod ipv4;
pub mod ipv6;

// Re-export public types
pub use class::{legacy_default_prefix, ClassDefaults, ClassInfo, LegacyClass};
pub use ipv4::{
    get_cidr_mask, parse_ipv4, validate_ipv4, wildcard_mask, Ipv4,
};
pub use ipv6::{compress, compress_integer, expand, parse_groups, validate_ipv6};
