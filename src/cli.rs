// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Top-level command line.
//!
//! [`Cli`] aggregates every option group. [`Cli::complete`] completes all of
//! them in one step and [`StartupConfig::controllers`] applies the result into
//! the controller configuration and activates the enabled controllers.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::config::ControllerConfig;
use crate::errors::ConfigError;
use crate::manager::ControllerSet;
use crate::options::{Completer, DnsServiceConfig, DnsServiceOptions, HealthConfig, HealthOptions};
use crate::switches::{ControllerSwitches, SwitchConfig, SwitchOptions};

/// Command line of the shoot DNS service extension.
#[derive(Parser, Clone, Debug, Default, PartialEq, Eq)]
#[command(
    name = "shoot-dns-service",
    version,
    about = "Shoot DNS service extension controllers"
)]
pub struct Cli {
    #[command(flatten)]
    pub dns: DnsServiceOptions,

    #[command(flatten)]
    pub health: HealthOptions,

    #[command(flatten)]
    pub switches: SwitchOptions,
}

impl Cli {
    /// Complete every option group.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] raised by an option group.
    pub fn complete(&self, switches: &ControllerSwitches) -> Result<StartupConfig, ConfigError> {
        Ok(StartupConfig {
            dns: self.dns.complete()?,
            health: self.health.complete()?,
            switches: self.switches.complete(switches)?,
        })
    }
}

/// All completed option groups.
#[derive(Clone, Debug)]
pub struct StartupConfig {
    pub dns: DnsServiceConfig,
    pub health: HealthConfig,
    pub switches: SwitchConfig,
}

impl StartupConfig {
    /// Controller configuration with both completed configs applied.
    #[must_use]
    pub fn controller_config(&self) -> ControllerConfig {
        let mut config = ControllerConfig::default();
        self.dns.apply(&mut config.dns);
        self.health.apply_health_check_config(&mut config.health_check);
        config
    }

    /// Activate the enabled controllers against the applied configuration.
    ///
    /// # Errors
    ///
    /// Propagates the first controller activation error.
    pub fn controllers(&self) -> Result<ControllerSet> {
        let mut controllers = ControllerSet::new(self.controller_config());
        self.switches.add_to_manager(&mut controllers)?;
        info!(
            count = controllers.controllers().len(),
            "Controllers added to manager"
        );
        Ok(controllers)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
