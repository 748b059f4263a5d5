//! Output formatting for calculation results.
//!
//! This module handles formatting results for the command line:
//! - [`csv`] - quoted `"label","value"` rows
//! - [`json`] - pretty-printed JSON
//! - [`terminal`] - field, count and placeholder helpers

mod csv;
mod json;
mod terminal;

pub use csv::{cidr_rows, class_rows, ipv6_rows, render_rows, subnet_rows, ReportRow};
pub use json::{error_json, to_json, CidrReport, ClassReport};
pub use terminal::{format_count, format_field, or_not_applicable, NOT_APPLICABLE};
