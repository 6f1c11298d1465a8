// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Duration parsing and formatting for Go-style duration strings.
//!
//! Command-line durations such as `--healthcheck-sync-period` use the Go
//! duration syntax (`"30s"`, `"1m30s"`, `"1.5h"`, `"500ms"`). The same syntax is
//! used when a [`MetaDuration`] is serialized, which keeps controller
//! configuration compatible with the Kubernetes `metav1.Duration` wire form.

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ConfigError;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Fraction digits beyond this precision cannot change a nanosecond total.
const MAX_FRACTION_DENOMINATOR: u128 = 10_u128.pow(20);

/// Parse a Go-style duration string into a Rust `Duration`.
///
/// A duration is a sequence of decimal numbers, each with an optional fraction
/// and a unit suffix. Supported units: `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`.
/// The bare string `"0"` is accepted without a unit.
///
/// # Examples
///
/// ```
/// use shoot_dns_service::duration::parse_go_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_go_duration("30s").unwrap(), Duration::from_secs(30));
/// assert_eq!(parse_go_duration("1m30s").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_go_duration("1.5h").unwrap(), Duration::from_secs(5400));
/// assert!(parse_go_duration("10").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDuration`] if the string is empty, negative,
/// has a missing or unknown unit, or overflows `u64` nanoseconds.
pub fn parse_go_duration(input: &str) -> Result<Duration, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::invalid_duration(input, "duration cannot be empty"));
    }
    if trimmed == "0" {
        return Ok(Duration::ZERO);
    }
    if trimmed.starts_with('-') {
        return Err(ConfigError::invalid_duration(
            input,
            "negative durations are not supported",
        ));
    }

    let mut rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if rest.is_empty() {
        return Err(ConfigError::invalid_duration(input, "missing value"));
    }

    let mut total_nanos: u128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);

        let scale = unit_scale(unit).ok_or_else(|| {
            if unit.is_empty() {
                ConfigError::invalid_duration(input, "missing unit (ns, us, ms, s, m or h)")
            } else {
                ConfigError::invalid_duration(input, format!("unknown unit '{unit}'"))
            }
        })?;

        let nanos = component_nanos(number, scale)
            .ok_or_else(|| ConfigError::invalid_duration(input, format!("invalid number '{number}'")))?;
        total_nanos = total_nanos
            .checked_add(nanos)
            .ok_or_else(|| ConfigError::invalid_duration(input, "duration is too large"))?;

        rest = next;
    }

    let nanos = u64::try_from(total_nanos)
        .map_err(|_| ConfigError::invalid_duration(input, "duration is too large"))?;
    Ok(Duration::from_nanos(nanos))
}

fn unit_scale(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Convert one `<number><unit>` component into nanoseconds, truncating any
/// sub-nanosecond fraction.
fn component_nanos(number: &str, scale: u128) -> Option<u128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(scale)?;

    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for digit in fraction.bytes().map(|b| u128::from(b - b'0')) {
        if denominator >= MAX_FRACTION_DENOMINATOR {
            break;
        }
        numerator = numerator * 10 + digit;
        denominator *= 10;
    }
    nanos = nanos.checked_add(numerator * scale / denominator)?;

    Some(nanos)
}

/// Format a `Duration` the way Go prints durations.
///
/// Durations below one second use the largest fitting sub-second unit
/// (`"500ms"`, `"1.5µs"`); longer ones are printed as hours, minutes and
/// seconds (`"30s"`, `"1m30s"`, `"1h0m0s"`). Zero is `"0s"`.
#[must_use]
pub fn format_go_duration(duration: Duration) -> String {
    let total = duration.as_nanos();
    if total == 0 {
        return "0s".to_string();
    }

    if total < NANOS_PER_SECOND {
        let (scale, unit) = if total < NANOS_PER_MICRO {
            (1, "ns")
        } else if total < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        return format!("{}{unit}", format_scaled(total, scale));
    }

    let hours = total / NANOS_PER_HOUR;
    let minutes = (total % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    let seconds = total % NANOS_PER_MINUTE;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&format!("{}s", format_scaled(seconds, NANOS_PER_SECOND)));
    out
}

/// Render `value / scale` with the fractional part trimmed of trailing zeros.
fn format_scaled(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }

    let width = scale.to_string().len() - 1;
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// A `Duration` wrapper that serializes as a Go duration string.
///
/// This is the configuration-side representation of a sync period, compatible
/// with the Kubernetes `metav1.Duration` type used by controller configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetaDuration(pub Duration);

impl MetaDuration {
    /// The wrapped duration.
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }
}

impl From<Duration> for MetaDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<MetaDuration> for Duration {
    fn from(duration: MetaDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for MetaDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_go_duration(self.0))
    }
}

impl FromStr for MetaDuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_go_duration(s).map(Self)
    }
}

impl Serialize for MetaDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MetaDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for MetaDuration {
    fn schema_name() -> Cow<'static, str> {
        "Duration".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "description": "Duration in Go syntax, e.g. \"30s\" or \"1m30s\""
        })
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod duration_tests;
