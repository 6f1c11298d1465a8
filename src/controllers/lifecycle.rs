// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Lifecycle controller for `shoot-dns-service` extensions.

use anyhow::Result;
use tracing::info;

use crate::constants::{EXTENSION_TYPE, KIND_EXTENSION, LIFECYCLE_CONTROLLER_NAME};
use crate::manager::{ControllerRegistration, Manager};

/// Name of the lifecycle controller.
pub const NAME: &str = LIFECYCLE_CONTROLLER_NAME;

/// Register the lifecycle controller with the manager.
///
/// # Errors
///
/// Propagates the manager's registration error.
pub fn add_to_manager(mgr: &mut dyn Manager) -> Result<()> {
    let dns = &mgr.config().dns;
    info!(
        seed_id = %dns.seed_id,
        dns_class = %dns.dns_class,
        manage_dns_providers = dns.manage_dns_providers,
        owner_dns_activation = dns.owner_dns_activation,
        "Adding lifecycle controller"
    );

    mgr.add_controller(
        ControllerRegistration::new(NAME, KIND_EXTENSION).with_extension_type(EXTENSION_TYPE),
    )
}
