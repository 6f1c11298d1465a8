// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Health check controller registration.

use anyhow::{bail, Result};
use tracing::info;

use crate::constants::{EXTENSION_TYPE, HEALTH_CHECK_CONTROLLER_NAME, KIND_EXTENSION};
use crate::manager::{ControllerRegistration, Manager};

/// Name of the health check controller.
pub const NAME: &str = HEALTH_CHECK_CONTROLLER_NAME;

/// Register the health check controller with the manager, using the applied
/// sync period.
///
/// # Errors
///
/// Returns an error if the sync period is zero, and propagates the manager's
/// registration error.
pub fn add_to_manager(mgr: &mut dyn Manager) -> Result<()> {
    let sync_period = mgr.config().health_check.sync_period;
    if sync_period.duration().is_zero() {
        bail!("health check sync period must be greater than zero");
    }
    info!(sync_period = %sync_period, "Adding health check controller");

    mgr.add_controller(
        ControllerRegistration::new(NAME, KIND_EXTENSION)
            .with_extension_type(EXTENSION_TYPE)
            .with_sync_period(sync_period.duration()),
    )
}
