// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for option completion error types.

#[cfg(test)]
mod tests {
    use crate::errors::ConfigError;

    #[test]
    fn test_invalid_secret_reference_error() {
        let error = ConfigError::InvalidSecretReference {
            value: "bad-format".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "invalid format for remote-default-domain-secret: bad-format (expected '<namespace>/<name>')"
        );
    }

    #[test]
    fn test_invalid_duration_error() {
        let error = ConfigError::invalid_duration("10x", "unknown unit 'x'");

        assert_eq!(error.to_string(), "invalid duration '10x': unknown unit 'x'");
    }

    #[test]
    fn test_unknown_controller_error() {
        let error = ConfigError::UnknownController {
            name: "nope".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "cannot disable unknown controller 'nope' (--disable-controllers)"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = ConfigError::InvalidSecretReference {
            value: "a".to_string(),
        };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            ConfigError::InvalidSecretReference {
                value: "b".to_string()
            }
        );
    }
}
