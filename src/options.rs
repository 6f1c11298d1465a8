// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line option groups and their completed configurations.
//!
//! Each option group is a raw holder populated by `clap`. Calling
//! [`Completer::complete`] validates the raw values once and returns an
//! immutable configuration; only the completed form can be applied into the
//! controller configuration. A configuration therefore cannot be obtained
//! without a successful completion.
//!
//! ## Example
//!
//! ```rust
//! use shoot_dns_service::config::DnsControllerConfig;
//! use shoot_dns_service::options::{Completer, DnsServiceOptions};
//!
//! let options = DnsServiceOptions {
//!     remote_default_domain_secret: "kube-system/my-secret".to_string(),
//!     ..Default::default()
//! };
//!
//! let config = options.complete().unwrap();
//! let mut target = DnsControllerConfig::default();
//! config.apply(&mut target);
//!
//! let secret = target.remote_default_domain_secret.unwrap();
//! assert_eq!(secret.namespace, "kube-system");
//! assert_eq!(secret.name, "my-secret");
//! ```

use clap::{ArgAction, Args};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{DnsControllerConfig, HealthCheckConfig, NamespacedName};
use crate::constants::{
    DEFAULT_DNS_CLASS, DEFAULT_HEALTH_CHECK_SYNC_PERIOD, DEFAULT_HEALTH_CHECK_SYNC_PERIOD_SECS,
    FLAG_DNS_CLASS, FLAG_HEALTH_CHECK_SYNC_PERIOD, FLAG_MANAGE_DNS_PROVIDERS,
    FLAG_OWNER_DNS_ACTIVATION, FLAG_REMOTE_DEFAULT_DOMAIN_SECRET, FLAG_REPLICATE_DNS_PROVIDERS,
    FLAG_SEED_ID,
};
use crate::duration::{parse_go_duration, MetaDuration};
use crate::errors::ConfigError;

/// Validates a raw option group and produces its completed form.
pub trait Completer {
    /// The validated, immutable configuration.
    type Completed;

    /// Validate the current option values and derive the completed configuration.
    ///
    /// Calling this again re-validates and returns a fresh configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a raw value is malformed.
    fn complete(&self) -> Result<Self::Completed, ConfigError>;
}

/// Options related to the DNS service.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct DnsServiceOptions {
    /// ID of the current cluster
    #[arg(long = FLAG_SEED_ID, default_value = "")]
    pub seed_id: String,

    /// DNS class used to filter DNS source resources in shoot clusters
    #[arg(long = FLAG_DNS_CLASS, default_value = DEFAULT_DNS_CLASS)]
    pub dns_class: String,

    /// Enables management of DNSProviders in control plane (must only be enabled if Gardenlet has disabled it)
    #[arg(
        long = FLAG_MANAGE_DNS_PROVIDERS,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub manage_dns_providers: bool,

    /// Enables replication of DNSProviders from shoot cluster to seed cluster
    #[arg(
        long = FLAG_REPLICATE_DNS_PROVIDERS,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub replicate_dns_providers: bool,

    /// Enables DNS activation of the shootdns DNSOwner
    #[arg(
        long = FLAG_OWNER_DNS_ACTIVATION,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub owner_dns_activation: bool,

    /// Secret ('<namespace>/<name>') for the default 'external' DNSProvider
    #[arg(long = FLAG_REMOTE_DEFAULT_DOMAIN_SECRET, default_value = "")]
    pub remote_default_domain_secret: String,
}

impl Default for DnsServiceOptions {
    fn default() -> Self {
        Self {
            seed_id: String::new(),
            dns_class: DEFAULT_DNS_CLASS.to_string(),
            manage_dns_providers: false,
            replicate_dns_providers: false,
            owner_dns_activation: false,
            remote_default_domain_secret: String::new(),
        }
    }
}

impl Completer for DnsServiceOptions {
    type Completed = DnsServiceConfig;

    fn complete(&self) -> Result<DnsServiceConfig, ConfigError> {
        let remote_default_domain_secret = if self.remote_default_domain_secret.is_empty() {
            None
        } else {
            let secret = NamespacedName::parse(&self.remote_default_domain_secret)?;
            if secret.namespace.is_empty() || secret.name.is_empty() {
                warn!(
                    value = %self.remote_default_domain_secret,
                    flag = FLAG_REMOTE_DEFAULT_DOMAIN_SECRET,
                    "Secret reference has an empty namespace or name"
                );
            }
            Some(secret)
        };

        let config = DnsServiceConfig {
            seed_id: self.seed_id.clone(),
            dns_class: self.dns_class.clone(),
            manage_dns_providers: self.manage_dns_providers,
            replicate_dns_providers: self.replicate_dns_providers,
            owner_dns_activation: self.owner_dns_activation,
            remote_default_domain_secret,
        };
        debug!(config = ?config, "Completed DNS service options");
        Ok(config)
    }
}

/// Validated configuration of the DNS service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsServiceConfig {
    seed_id: String,
    dns_class: String,
    manage_dns_providers: bool,
    replicate_dns_providers: bool,
    owner_dns_activation: bool,
    remote_default_domain_secret: Option<NamespacedName>,
}

impl DnsServiceConfig {
    #[must_use]
    pub fn seed_id(&self) -> &str {
        &self.seed_id
    }

    #[must_use]
    pub fn dns_class(&self) -> &str {
        &self.dns_class
    }

    #[must_use]
    pub fn manage_dns_providers(&self) -> bool {
        self.manage_dns_providers
    }

    #[must_use]
    pub fn replicate_dns_providers(&self) -> bool {
        self.replicate_dns_providers
    }

    #[must_use]
    pub fn owner_dns_activation(&self) -> bool {
        self.owner_dns_activation
    }

    /// The parsed secret reference, absent when the flag was empty.
    #[must_use]
    pub fn remote_default_domain_secret(&self) -> Option<&NamespacedName> {
        self.remote_default_domain_secret.as_ref()
    }

    /// Copy this configuration into the DNS controller configuration,
    /// overwriting all six fields.
    pub fn apply(&self, target: &mut DnsControllerConfig) {
        target.seed_id.clone_from(&self.seed_id);
        target.dns_class.clone_from(&self.dns_class);
        target.manage_dns_providers = self.manage_dns_providers;
        target.replicate_dns_providers = self.replicate_dns_providers;
        target.owner_dns_activation = self.owner_dns_activation;
        target
            .remote_default_domain_secret
            .clone_from(&self.remote_default_domain_secret);
    }
}

/// Options for health checks.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct HealthOptions {
    /// Sync period for the health check controller
    #[arg(
        long = FLAG_HEALTH_CHECK_SYNC_PERIOD,
        default_value = DEFAULT_HEALTH_CHECK_SYNC_PERIOD,
        value_parser = parse_go_duration
    )]
    pub health_check_sync_period: Duration,
}

impl Default for HealthOptions {
    fn default() -> Self {
        Self {
            health_check_sync_period: Duration::from_secs(DEFAULT_HEALTH_CHECK_SYNC_PERIOD_SECS),
        }
    }
}

impl Completer for HealthOptions {
    type Completed = HealthConfig;

    fn complete(&self) -> Result<HealthConfig, ConfigError> {
        Ok(HealthConfig {
            health_check_sync_period: MetaDuration(self.health_check_sync_period),
        })
    }
}

/// Validated configuration of the health check controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthConfig {
    health_check_sync_period: MetaDuration,
}

impl HealthConfig {
    #[must_use]
    pub fn health_check_sync_period(&self) -> MetaDuration {
        self.health_check_sync_period
    }

    /// Copy the sync period into the health check configuration.
    pub fn apply_health_check_config(&self, target: &mut HealthCheckConfig) {
        target.sync_period = self.health_check_sync_period;
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
