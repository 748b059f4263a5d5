//! IPv6 address codec.
//!
//! Text is tokenized group by group instead of matched against one large pattern: the
//! input is split at the single `::` marker (if any), each side is split on `:`, and every
//! explicit group is checked for 1-4 hex digits. A trailing dotted quad counts as two
//! groups. The parsed form is `[u16; 8]`, which converts to and from `u128`.

use super::ipv4::parse_ipv4;
use crate::error::{CalcError, Result};
use itertools::Itertools;

/// Number of 16-bit groups in an IPv6 address.
pub const GROUPS: usize = 8;
/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// Parse IPv6 text into its eight 16-bit groups.
pub fn parse_groups(text: &str) -> Result<[u16; GROUPS]> {
    let err = || CalcError::address(text);
    if text.is_empty() {
        return Err(err());
    }

    let explicit = match text.split_once("::") {
        Some((left, right)) => {
            let head = tokenize(left, false).ok_or_else(err)?;
            let tail = tokenize(right, true).ok_or_else(err)?;
            // "::" stands for at least one zero group
            if head.len() + tail.len() > GROUPS - 1 {
                return Err(err());
            }
            let missing = GROUPS - head.len() - tail.len();
            head.into_iter()
                .chain(std::iter::repeat(0).take(missing))
                .chain(tail)
                .collect::<Vec<u16>>()
        }
        None => tokenize(text, true).ok_or_else(err)?,
    };

    explicit.try_into().map_err(|_| err())
}

/// Split one side of an address into groups. An empty side has no groups.
fn tokenize(side: &str, quad_allowed: bool) -> Option<Vec<u16>> {
    let mut groups = Vec::with_capacity(GROUPS);
    if side.is_empty() {
        return Some(groups);
    }
    let pieces: Vec<&str> = side.split(':').collect();
    let last = pieces.len() - 1;
    for (i, piece) in pieces.iter().enumerate() {
        if i == last && quad_allowed && piece.contains('.') {
            let quad = parse_ipv4(piece).ok()?.octets();
            groups.push(u16::from_be_bytes([quad[0], quad[1]]));
            groups.push(u16::from_be_bytes([quad[2], quad[3]]));
        } else {
            groups.push(parse_hex_group(piece)?);
        }
        if groups.len() > GROUPS {
            return None;
        }
    }
    Some(groups)
}

fn parse_hex_group(piece: &str) -> Option<u16> {
    if piece.is_empty() || piece.len() > 4 || !piece.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(piece, 16).ok()
}

/// Check whether `text` is a valid IPv6 literal.
///
/// # Examples
/// ```
/// use subnet_calc::models::validate_ipv6;
/// assert!(validate_ipv6("2001:db8::1"));
/// assert!(validate_ipv6("::ffff:192.0.2.1"));
/// assert!(!validate_ipv6("2001:db8::1::2"));
/// ```
pub fn validate_ipv6(text: &str) -> bool {
    parse_groups(text).is_ok()
}

fn join_expanded(groups: &[u16]) -> String {
    groups.iter().map(|g| format!("{g:04x}")).join(":")
}

fn join_stripped(groups: &[u16]) -> String {
    groups.iter().map(|g| format!("{g:x}")).join(":")
}

/// Expand IPv6 text to eight zero-padded lowercase groups.
///
/// # Examples
/// ```
/// use subnet_calc::models::expand;
/// assert_eq!(
///     expand("2001:270:faff::1").unwrap(),
///     "2001:0270:faff:0000:0000:0000:0000:0001"
/// );
/// ```
pub fn expand(text: &str) -> Result<String> {
    Ok(join_expanded(&parse_groups(text)?))
}

/// Concatenate the groups of an address into one 128-bit number.
pub fn to_integer(text: &str) -> Result<u128> {
    let groups = parse_groups(text)?;
    Ok(groups
        .iter()
        .fold(0u128, |acc, &group| (acc << 16) | u128::from(group)))
}

fn groups_from_integer(value: u128) -> [u16; GROUPS] {
    let mut groups = [0u16; GROUPS];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = (value >> (16 * (GROUPS - 1 - i))) as u16;
    }
    groups
}

/// Render a 128-bit number as eight expanded groups.
pub fn from_integer(value: u128) -> String {
    join_expanded(&groups_from_integer(value))
}

/// Longest run of zero groups with at least two members, as `(start, len)`.
/// The leftmost run wins a tie.
fn longest_zero_run(groups: &[u16; GROUPS]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start: Option<usize> = None;
    for i in 0..=GROUPS {
        if i < GROUPS && groups[i] == 0 {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            let len = i - start;
            if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((start, len));
            }
        }
    }
    best
}

/// Compress groups to the RFC 5952 text form.
pub fn compress_groups(groups: &[u16; GROUPS]) -> String {
    match longest_zero_run(groups) {
        Some((start, len)) => format!(
            "{}::{}",
            join_stripped(&groups[..start]),
            join_stripped(&groups[start + len..])
        ),
        None => join_stripped(groups),
    }
}

/// Compress an (expanded) IPv6 address to its RFC 5952 shortest form.
///
/// # Examples
/// ```
/// use subnet_calc::models::compress;
/// assert_eq!(
///     compress("2001:0270:faff:0000:0000:0000:0000:0001").unwrap(),
///     "2001:270:faff::1"
/// );
/// ```
pub fn compress(expanded: &str) -> Result<String> {
    Ok(compress_groups(&parse_groups(expanded)?))
}

/// Compress a 128-bit number straight to text.
pub fn compress_integer(value: u128) -> String {
    compress_groups(&groups_from_integer(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ipv6_accepts() {
        for good in [
            "::",
            "::1",
            "1::",
            "2001:db8::1",
            "2001:270:faff::1",
            "2001:0db8:0000:0000:0000:ff00:0042:8329",
            "FE80::0202:B3FF:FE1E:8329",
            "1:2:3:4:5:6:7::",
            "::2:3:4:5:6:7:8",
            "::ffff:192.0.2.128",
            "64:ff9b::192.0.2.33",
            "1:2:3:4:5:6:1.2.3.4",
        ] {
            assert!(validate_ipv6(good), "{good:?} should be valid");
        }
    }

    #[test]
    fn test_validate_ipv6_rejects() {
        for bad in [
            "",
            ":",
            ":::",
            "1:::2",
            "1::2::3",
            "1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4:5:6:7:8::",
            "::1:2:3:4:5:6:7:8",
            ":1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:",
            "12345::1",
            "g::1",
            "2001:db8::1 ",
            "fe80::1%eth0",
            "::1.2.3.4:5",
            "1.2.3.4::",
            "::ffff:1.2.3.256",
            "::ffff:01.2.3.4",
            "1:2:3:4:5:6:7:1.2.3.4",
            "192.168.0.1",
        ] {
            assert!(!validate_ipv6(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_expand() {
        assert_eq!(
            expand("2001:270:faff::1").unwrap(),
            "2001:0270:faff:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            expand("::").unwrap(),
            "0000:0000:0000:0000:0000:0000:0000:0000"
        );
        assert_eq!(
            expand("FE80::B3FF:1").unwrap(),
            "fe80:0000:0000:0000:0000:0000:b3ff:0001"
        );
        assert_eq!(
            expand("::ffff:192.0.2.128").unwrap(),
            "0000:0000:0000:0000:0000:ffff:c000:0280"
        );
        assert!(expand("2001:db8::1::2").is_err());
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(to_integer("::1").unwrap(), 1);
        assert_eq!(to_integer("::").unwrap(), 0);
        assert_eq!(
            to_integer("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff").unwrap(),
            u128::MAX
        );
        assert_eq!(
            to_integer("2001:db8::").unwrap(),
            0x2001_0db8_0000_0000_0000_0000_0000_0000
        );
        assert_eq!(
            from_integer(0x2001_0db8_0000_0000_0000_0000_0000_0001),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            from_integer(u128::MAX),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_compress() {
        assert_eq!(
            compress("2001:0270:faff:0000:0000:0000:0000:0001").unwrap(),
            "2001:270:faff::1"
        );
        assert_eq!(
            compress("0000:0000:0000:0000:0000:0000:0000:0000").unwrap(),
            "::"
        );
        assert_eq!(
            compress("0000:0000:0000:0000:0000:0000:0000:0001").unwrap(),
            "::1"
        );
        assert_eq!(
            compress("2001:0270:faff:0000:0000:0000:0000:0000").unwrap(),
            "2001:270:faff::"
        );
    }

    #[test]
    fn test_compress_single_zero_group_kept() {
        assert_eq!(
            compress("2001:0db8:0000:0001:0001:0001:0001:0001").unwrap(),
            "2001:db8:0:1:1:1:1:1"
        );
    }

    #[test]
    fn test_compress_leftmost_run_wins_tie() {
        assert_eq!(
            compress("2001:0db8:0000:0000:0001:0000:0000:0001").unwrap(),
            "2001:db8::1:0:0:1"
        );
        // longer run on the right beats a shorter one on the left
        assert_eq!(
            compress("2001:0000:0000:0001:0000:0000:0000:0001").unwrap(),
            "2001:0:0:1::1"
        );
    }

    #[test]
    fn test_compress_integer() {
        assert_eq!(compress_integer(0), "::");
        assert_eq!(compress_integer(u128::MAX), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(
            compress_integer(0x2001_0270_faff_0000_ffff_ffff_ffff_ffff),
            "2001:270:faff:0:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_expand_compress_expand_is_stable() {
        for text in [
            "::",
            "::1",
            "1::",
            "2001:270:faff::1",
            "2001:db8:0:0:1:0:0:1",
            "fe80::b3ff:fe1e:8329",
            "::ffff:10.0.0.1",
            "1:2:3:4:5:6:7:8",
            "1:0:0:0:1:0:0:0",
        ] {
            let expanded = expand(text).unwrap();
            let compressed = compress(&expanded).unwrap();
            assert_eq!(expand(&compressed).unwrap(), expanded, "{text}");
        }
    }
}
