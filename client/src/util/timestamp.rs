//! Timestamp display helpers.
//!
//! The API emits RFC 3339 timestamps, sometimes without an offset. Naive
//! timestamps are read as UTC. Unparseable values are shown verbatim.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    OffsetDateTime::parse(raw, &Rfc3339).ok().or_else(|| {
        PrimitiveDateTime::parse(
            raw,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
        )
        .ok()
        .map(PrimitiveDateTime::assume_utc)
    })
}

/// `2025-03-01 14:05`, or the raw value.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|ts| ts.format(format_description!("[year]-[month]-[day] [hour]:[minute]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `2025-03-01`, or the raw value.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|ts| ts.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}
