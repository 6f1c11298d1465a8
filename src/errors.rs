// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for option completion.
//!
//! Every error here is raised while turning command-line input into a
//! validated configuration and is fatal to process startup. The messages echo
//! the offending input so the flag can be corrected directly.

use thiserror::Error;

/// Errors that can occur while completing command-line options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A secret reference did not have the `<namespace>/<name>` shape
    ///
    /// Returned when `--remote-default-domain-secret` is non-empty and does not
    /// split into exactly two parts on `/`.
    #[error("invalid format for remote-default-domain-secret: {value} (expected '<namespace>/<name>')")]
    InvalidSecretReference {
        /// The raw flag value as supplied by the user
        value: String,
    },

    /// A duration flag could not be parsed
    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration {
        /// The raw flag value as supplied by the user
        value: String,
        /// What is wrong with it
        reason: String,
    },

    /// A controller named in `--disable-controllers` is not registered
    #[error("cannot disable unknown controller '{name}' (--disable-controllers)")]
    UnknownController {
        /// The unknown controller name
        name: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid_duration(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
