// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Controller manager.
//!
//! Controller activation functions receive a [`Manager`]: it gives read access
//! to the applied [`ControllerConfig`] and accepts controller registrations.
//! [`ControllerSet`] is the in-memory registration target; [`ControllerManager`]
//! couples it with a Kubernetes client and runs until the process is asked to
//! shut down.

use anyhow::{bail, Context, Result};
use kube::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ControllerConfig;

/// A controller as registered by its activation function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerRegistration {
    /// Unique controller name
    pub name: String,
    /// Kind of the resource the controller watches
    pub watches: String,
    /// Extension type filter, if the controller only handles one type
    pub extension_type: Option<String>,
    /// Periodic resync interval, if any
    pub sync_period: Option<Duration>,
}

impl ControllerRegistration {
    pub fn new(name: impl Into<String>, watches: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            watches: watches.into(),
            extension_type: None,
            sync_period: None,
        }
    }

    #[must_use]
    pub fn with_extension_type(mut self, extension_type: impl Into<String>) -> Self {
        self.extension_type = Some(extension_type.into());
        self
    }

    #[must_use]
    pub fn with_sync_period(mut self, sync_period: Duration) -> Self {
        self.sync_period = Some(sync_period);
        self
    }
}

impl fmt::Display for ControllerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (watches {}", self.name, self.watches)?;
        if let Some(extension_type) = &self.extension_type {
            write!(f, ", type {extension_type}")?;
        }
        write!(f, ")")
    }
}

/// The manager-like collaborator handed to controller activation functions.
pub trait Manager {
    /// Controller configuration the completed options were applied into.
    fn config(&self) -> &ControllerConfig;

    /// Register a controller.
    ///
    /// # Errors
    ///
    /// Implementations reject registrations they cannot accept, such as a
    /// duplicate controller name.
    fn add_controller(&mut self, registration: ControllerRegistration) -> Result<()>;
}

/// In-memory set of registered controllers.
#[derive(Clone, Debug, Default)]
pub struct ControllerSet {
    config: ControllerConfig,
    controllers: Vec<ControllerRegistration>,
}

impl ControllerSet {
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            controllers: Vec::new(),
        }
    }

    /// Registered controllers, in registration order.
    #[must_use]
    pub fn controllers(&self) -> &[ControllerRegistration] {
        &self.controllers
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ControllerRegistration> {
        self.controllers.iter().find(|c| c.name == name)
    }
}

impl Manager for ControllerSet {
    fn config(&self) -> &ControllerConfig {
        &self.config
    }

    fn add_controller(&mut self, registration: ControllerRegistration) -> Result<()> {
        if self.get(&registration.name).is_some() {
            bail!("controller '{}' is already registered", registration.name);
        }
        debug!(controller = %registration, "Registered controller");
        self.controllers.push(registration);
        Ok(())
    }
}

/// Runs the registered controllers against a Kubernetes cluster.
pub struct ControllerManager {
    client: Client,
    controllers: ControllerSet,
}

impl ControllerManager {
    #[must_use]
    pub fn new(client: Client, controllers: ControllerSet) -> Self {
        Self {
            client,
            controllers,
        }
    }

    #[must_use]
    pub fn controllers(&self) -> &ControllerSet {
        &self.controllers
    }

    /// Verify API server connectivity, then run until SIGINT or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the API server cannot be reached or the signal
    /// handlers cannot be installed.
    pub async fn run(self) -> Result<()> {
        let version = self
            .client
            .apiserver_version()
            .await
            .context("failed to reach the Kubernetes API server")?;
        info!(
            version = %version.git_version,
            platform = %version.platform,
            "Connected to Kubernetes API server"
        );

        for controller in self.controllers.controllers() {
            info!(controller = %controller, "Controller active");
        }

        wait_for_shutdown().await?;
        info!("Stopping all controllers...");
        Ok(())
    }
}

/// Wait for SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for SIGINT")?;
                info!("Received SIGINT, initiating graceful shutdown...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM (pod termination), initiating graceful shutdown...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .context("failed to listen for SIGINT")?;
        info!("Received SIGINT, initiating graceful shutdown...");
    }
    Ok(())
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
