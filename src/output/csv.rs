//! CSV output formatting for calculation results.
//!
//! Each result becomes a list of `"label","value"` rows, quoted and right-aligned like a
//! spreadsheet export.

use crate::config::{LABEL_WIDTH, VALUE_WIDTH};
use crate::models::{ClassDefaults, ClassInfo};
use crate::processing::{Ipv4CidrResult, Ipv4SubnetResult, Ipv6SubnetResult, OctetBlock, SubnetKind};

use super::terminal::{format_count, format_field, or_not_applicable, NOT_APPLICABLE};

/// One labelled value of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
}

impl ReportRow {
    fn new<T: ToString>(label: &'static str, value: T) -> ReportRow {
        ReportRow {
            label,
            value: value.to_string(),
        }
    }
}

/// Rows for an IPv4 subnet result.
pub fn subnet_rows(r: &Ipv4SubnetResult) -> Vec<ReportRow> {
    let usable_range = match (r.classification, r.usable_range) {
        (SubnetKind::PointToPoint, _) => "point-to-point".to_string(),
        (SubnetKind::Loopback, _) => "loopback".to_string(),
        (SubnetKind::Standard, range) => or_not_applicable(range),
    };
    vec![
        ReportRow::new("ip_address", r.ip_address),
        ReportRow::new("prefix", format!("/{}", r.prefix)),
        ReportRow::new("type", r.classification),
        ReportRow::new("subnet_mask", r.subnet_mask),
        ReportRow::new("network_id", or_not_applicable(r.network_id)),
        ReportRow::new("broadcast", or_not_applicable(r.broadcast_address)),
        ReportRow::new("gateway", or_not_applicable(r.first_host)),
        ReportRow::new("last_host", or_not_applicable(r.last_host)),
        ReportRow::new("total_ips", format_count(r.total_ip_count)),
        ReportRow::new("host_range", r.host_range),
        ReportRow::new("usable_range", usable_range),
        ReportRow::new("usable_count", format_count(r.usable_count)),
    ]
}

/// Rows for an IPv4 CIDR result and its octet block.
pub fn cidr_rows(r: &Ipv4CidrResult, block: &OctetBlock) -> Vec<ReportRow> {
    let max_subnets = r
        .max_subnets
        .map(format_count)
        .unwrap_or_else(|| NOT_APPLICABLE.to_string());
    vec![
        ReportRow::new("ip_address", r.ip_address),
        ReportRow::new("cidr_notation", &r.cidr_notation),
        ReportRow::new("subnet_mask", r.subnet_mask),
        ReportRow::new("wildcard_mask", r.wildcard_mask),
        ReportRow::new("max_subnets", max_subnets),
        ReportRow::new("max_addresses", format_count(r.max_addresses)),
        ReportRow::new("route", r.route),
        ReportRow::new("range", r.range),
        ReportRow::new("octet", block.octet_index),
        ReportRow::new("block_size", block.block_size),
        ReportRow::new(
            "octet_block",
            format!("{}..{} (value {})", block.start, block.end, block.octet_value),
        ),
    ]
}

/// Rows for an IPv6 subnet result.
pub fn ipv6_rows(r: &Ipv6SubnetResult) -> Vec<ReportRow> {
    vec![
        ReportRow::new("ip_address", &r.ip_address),
        ReportRow::new("prefix", format!("/{}", r.prefix)),
        ReportRow::new("expanded", &r.expanded_ip),
        ReportRow::new("network", &r.network_address),
        ReportRow::new("gateway", &r.gateway),
        ReportRow::new("range", format!("{} ~ {}", r.range_start, r.range_end)),
        ReportRow::new("total_addresses", &r.total_addresses),
        ReportRow::new("total", &r.total_addresses_formatted),
    ]
}

/// Rows for a legacy class.
pub fn class_rows(defaults: &ClassDefaults, info: &ClassInfo) -> Vec<ReportRow> {
    vec![
        ReportRow::new("class", info.class),
        ReportRow::new("range", format!("{} ~ {}", info.range.0, info.range.1)),
        ReportRow::new("default_mask", or_not_applicable(info.default_mask)),
        ReportRow::new("hosts", info.approx_hosts.unwrap_or(NOT_APPLICABLE)),
        ReportRow::new("usage", info.usage),
        ReportRow::new("leading_bits", info.leading_bits),
        ReportRow::new("example_address", defaults.example_address),
        ReportRow::new("default_prefix", format!("/{}", defaults.default_prefix)),
    ]
}

/// Render rows as CSV text with a header line.
pub fn render_rows(rows: &[ReportRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row("field", "value"));
    for row in rows {
        lines.push(format_row(row.label, &row.value));
    }
    lines.join("\n")
}

fn format_row(label: &str, value: &str) -> String {
    format!(
        "{label},{value}",
        label = format_field(label, LABEL_WIDTH),
        value = format_field(value, VALUE_WIDTH),
    )
}
