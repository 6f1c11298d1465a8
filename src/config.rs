// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Controller configuration types.
//!
//! These are the configuration objects owned by the controllers. The completed
//! command-line options are applied into them (see [`crate::options`]) before
//! the controllers are registered with the manager.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DNS_CLASS, DEFAULT_HEALTH_CHECK_SYNC_PERIOD_SECS, NAMESPACED_NAME_SEPARATOR,
};
use crate::duration::MetaDuration;
use crate::errors::ConfigError;

/// Reference to a namespaced Kubernetes object, such as a `Secret`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub struct NamespacedName {
    /// Namespace of the referenced object
    pub namespace: String,
    /// Name of the referenced object
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse a `<namespace>/<name>` reference.
    ///
    /// The value must split on `/` into exactly two parts. Empty parts are not
    /// rejected, so `"ns/"` and `"/"` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSecretReference`] when the value contains
    /// no `/` or more than one.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = value.split(NAMESPACED_NAME_SEPARATOR).collect();
        match parts.as_slice() {
            [namespace, name] => Ok(Self::new(*namespace, *name)),
            _ => Err(ConfigError::InvalidSecretReference {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NAMESPACED_NAME_SEPARATOR}{}", self.namespace, self.name)
    }
}

/// Configuration of the DNS service controllers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DnsControllerConfig {
    /// Identifier of the current (seed) cluster
    #[serde(default)]
    pub seed_id: String,

    /// DNS class used to filter DNS source resources in shoot clusters
    pub dns_class: String,

    /// Manage `DNSProvider` resources in the control plane
    #[serde(default)]
    pub manage_dns_providers: bool,

    /// Replicate `DNSProvider` resources from the shoot cluster to the seed cluster
    #[serde(default)]
    pub replicate_dns_providers: bool,

    /// Enable DNS activation of the shoot DNS owner
    #[serde(default)]
    pub owner_dns_activation: bool,

    /// Secret holding the default 'external' `DNSProvider` credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_default_domain_secret: Option<NamespacedName>,
}

impl Default for DnsControllerConfig {
    fn default() -> Self {
        Self {
            seed_id: String::new(),
            dns_class: DEFAULT_DNS_CLASS.to_string(),
            manage_dns_providers: false,
            replicate_dns_providers: false,
            owner_dns_activation: false,
            remote_default_domain_secret: None,
        }
    }
}

/// Configuration of the health check controller.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckConfig {
    /// How often the health checks are re-evaluated
    pub sync_period: MetaDuration,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            sync_period: MetaDuration(Duration::from_secs(DEFAULT_HEALTH_CHECK_SYNC_PERIOD_SECS)),
        }
    }
}

/// All controller configuration handed to the manager.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    pub dns: DnsControllerConfig,
    pub health_check: HealthCheckConfig,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
