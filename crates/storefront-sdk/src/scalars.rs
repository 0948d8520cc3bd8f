//! Codecs for the custom scalars of the Storefront wire format.
//!
//! Every conversion here is pure and total-or-failing: a malformed input
//! yields `None` and the caller decides how loudly to fail. Money amounts
//! are parsed with a fixed `.` decimal separator so values survive hosts
//! configured with comma-decimal locales.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use url::Url;

// Consumers compare and compute with decoded money values; re-export the
// decimal type so they don't need their own `rust_decimal` dependency.
pub use rust_decimal::Decimal;

/// An opaque, server-issued object identifier.
///
/// The client never interprets the contents; equality and hashing are by
/// the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Id {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Parse a strict ISO-8601 timestamp, normalized to UTC.
pub fn parse_date_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a decimal money amount from its wire string.
///
/// `Decimal::from_str` only ever accepts `.` as the separator, so the
/// host locale cannot corrupt amounts: `"19,99"` fails instead of
/// misparsing.
pub fn parse_money(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw).ok()
}

/// Parse an absolute URL.
pub fn parse_url(raw: &str) -> Option<Url> {
    Url::parse(raw).ok()
}
