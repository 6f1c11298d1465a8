// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Replication controller for `DNSProvider` resources.

use anyhow::Result;
use tracing::info;

use crate::constants::{KIND_DNS_PROVIDER, REPLICATION_CONTROLLER_NAME};
use crate::manager::{ControllerRegistration, Manager};

/// Name of the replication controller.
pub const NAME: &str = REPLICATION_CONTROLLER_NAME;

/// Register the replication controller with the manager.
///
/// # Errors
///
/// Propagates the manager's registration error.
pub fn add_to_manager(mgr: &mut dyn Manager) -> Result<()> {
    let dns = &mgr.config().dns;
    info!(
        replicate_dns_providers = dns.replicate_dns_providers,
        remote_default_domain_secret = ?dns.remote_default_domain_secret.as_ref().map(ToString::to_string),
        "Adding DNSProvider replication controller"
    );

    mgr.add_controller(ControllerRegistration::new(NAME, KIND_DNS_PROVIDER))
}
