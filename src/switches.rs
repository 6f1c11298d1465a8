// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Controller switches.
//!
//! A switch pairs a controller name with its activation function. The
//! registry built by [`controller_switches`] is immutable and passed
//! explicitly through startup. [`SwitchOptions`] carries the
//! `--disable-controllers` flag; completing it against the registry yields a
//! [`SwitchConfig`] that decides enablement and activates the enabled
//! controllers.

use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info};

use crate::constants::FLAG_DISABLE_CONTROLLERS;
use crate::controllers::{healthcheck, lifecycle, replication};
use crate::errors::ConfigError;
use crate::manager::Manager;

/// Activation function of a controller.
pub type AddToManagerFn = fn(&mut dyn Manager) -> Result<()>;

/// A named controller and its activation function.
#[derive(Clone, Copy)]
pub struct ControllerSwitch {
    name: &'static str,
    add_to_manager: AddToManagerFn,
}

impl ControllerSwitch {
    #[must_use]
    pub const fn new(name: &'static str, add_to_manager: AddToManagerFn) -> Self {
        Self {
            name,
            add_to_manager,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the activation function.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the controller raises.
    pub fn add_to_manager(&self, mgr: &mut dyn Manager) -> Result<()> {
        (self.add_to_manager)(mgr)
    }
}

impl fmt::Debug for ControllerSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerSwitch")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable collection of controller switches.
#[derive(Clone, Debug)]
pub struct ControllerSwitches {
    switches: Vec<ControllerSwitch>,
}

impl ControllerSwitches {
    #[must_use]
    pub fn new(switches: Vec<ControllerSwitch>) -> Self {
        Self { switches }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControllerSwitch> {
        self.switches.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.switches.iter().map(ControllerSwitch::name).collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ControllerSwitch> {
        self.switches.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}

/// The switches for the shoot DNS service controllers: lifecycle,
/// replication and health check, in that order.
#[must_use]
pub fn controller_switches() -> ControllerSwitches {
    ControllerSwitches::new(vec![
        ControllerSwitch::new(lifecycle::NAME, lifecycle::add_to_manager),
        ControllerSwitch::new(replication::NAME, replication::add_to_manager),
        ControllerSwitch::new(healthcheck::NAME, healthcheck::add_to_manager),
    ])
}

/// Options selecting which controllers run.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitchOptions {
    /// Comma-separated list of controllers to disable
    #[arg(long = FLAG_DISABLE_CONTROLLERS, value_delimiter = ',')]
    pub disable_controllers: Vec<String>,
}

impl SwitchOptions {
    /// Resolve the disabled controller names against the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownController`] for a name that is not registered.
    pub fn complete(&self, switches: &ControllerSwitches) -> Result<SwitchConfig, ConfigError> {
        let mut disabled = BTreeSet::new();
        for name in self.disable_controllers.iter().map(|n| n.trim()) {
            if name.is_empty() {
                continue;
            }
            if switches.get(name).is_none() {
                return Err(ConfigError::UnknownController {
                    name: name.to_string(),
                });
            }
            disabled.insert(name.to_string());
        }

        Ok(SwitchConfig {
            switches: switches.clone(),
            disabled,
        })
    }
}

/// Completed controller selection.
///
/// Every registered controller is enabled unless it was disabled.
#[derive(Clone, Debug)]
pub struct SwitchConfig {
    switches: ControllerSwitches,
    disabled: BTreeSet<String>,
}

impl SwitchConfig {
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.switches.get(name).is_some() && !self.disabled.contains(name)
    }

    /// Enabled switches in registry order.
    pub fn enabled(&self) -> impl Iterator<Item = &ControllerSwitch> {
        self.switches
            .iter()
            .filter(move |s| !self.disabled.contains(s.name()))
    }

    /// Activate every enabled controller in registry order.
    ///
    /// # Errors
    ///
    /// Stops at the first activation failure and returns it with the
    /// controller name attached.
    pub fn add_to_manager(&self, mgr: &mut dyn Manager) -> Result<()> {
        for switch in self.switches.iter() {
            if self.disabled.contains(switch.name()) {
                debug!(controller = switch.name(), "Controller disabled");
                continue;
            }
            info!(controller = switch.name(), "Activating controller");
            switch
                .add_to_manager(mgr)
                .with_context(|| format!("failed to add controller '{}'", switch.name()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "switches_tests.rs"]
mod switches_tests;
