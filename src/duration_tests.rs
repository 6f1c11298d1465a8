// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for Go-style duration parsing and formatting

#[cfg(test)]
mod tests {
    use super::super::{format_go_duration, parse_go_duration, MetaDuration};
    use crate::errors::ConfigError;
    use std::time::Duration;

    // ========================================================================
    // Parsing
    // ========================================================================

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_go_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_go_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_go_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(
            parse_go_duration("250ms").unwrap(),
            Duration::from_millis(250)
        );
        assert_eq!(parse_go_duration("10us").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_go_duration("10µs").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_go_duration("7ns").unwrap(), Duration::from_nanos(7));
    }

    #[test]
    fn test_parse_composite_duration() {
        assert_eq!(
            parse_go_duration("1h30m").unwrap(),
            Duration::from_secs(5400),
            "1h30m should be 5400 seconds"
        );
        assert_eq!(
            parse_go_duration("1m30s500ms").unwrap(),
            Duration::from_millis(90_500)
        );
    }

    #[test]
    fn test_parse_fractional_duration() {
        assert_eq!(parse_go_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_go_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_go_duration("1.s").unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn test_parse_zero_and_sign() {
        assert_eq!(parse_go_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_go_duration("0s").unwrap(), Duration::ZERO);
        assert_eq!(parse_go_duration("+5s").unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        for input in ["", "10", "10x", "-5s", "s", "1..5s", ".s", "+"] {
            let err = parse_go_duration(input).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidDuration { .. }),
                "'{input}' should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_error_mentions_unit() {
        let err = parse_go_duration("10x").unwrap_err();
        assert!(err.to_string().contains("unknown unit 'x'"));

        let err = parse_go_duration("10").unwrap_err();
        assert!(err.to_string().contains("missing unit"));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = parse_go_duration("9999999999999h").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    #[test]
    fn test_format_go_duration() {
        assert_eq!(format_go_duration(Duration::ZERO), "0s");
        assert_eq!(format_go_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_go_duration(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_go_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_go_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_go_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_go_duration(Duration::from_nanos(1500)), "1.5µs");
        assert_eq!(format_go_duration(Duration::from_nanos(42)), "42ns");
    }

    #[test]
    fn test_format_output_parses_back() {
        for secs in [1, 59, 61, 3599, 3601, 86_400] {
            let duration = Duration::from_secs(secs);
            assert_eq!(
                parse_go_duration(&format_go_duration(duration)).unwrap(),
                duration
            );
        }
    }

    // ========================================================================
    // MetaDuration
    // ========================================================================

    #[test]
    fn test_meta_duration_serializes_as_string() {
        let value = MetaDuration(Duration::from_secs(30));
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"30s\"");

        let parsed: MetaDuration = serde_json::from_str("\"1m30s\"").unwrap();
        assert_eq!(parsed.duration(), Duration::from_secs(90));
    }

    #[test]
    fn test_meta_duration_rejects_bad_string() {
        let result: Result<MetaDuration, _> = serde_json::from_str("\"soon\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_meta_duration_conversions() {
        let duration = Duration::from_secs(5);
        let meta = MetaDuration::from(duration);
        assert_eq!(Duration::from(meta), duration);
        assert_eq!("5s".parse::<MetaDuration>().unwrap(), meta);
        assert_eq!(meta.to_string(), "5s");
    }
}
