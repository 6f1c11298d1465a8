// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the shoot DNS service extension.
//!
//! This module contains flag names, defaults and controller identities used
//! throughout the codebase. Constants are organized by category for easy maintenance.

// ============================================================================
// Extension Constants
// ============================================================================

/// Extension type handled by this extension
pub const EXTENSION_TYPE: &str = "shoot-dns-service";

/// Kind name for the `Extension` resource reconciled by the lifecycle and health check controllers
pub const KIND_EXTENSION: &str = "Extension";

/// Kind name for the `DNSProvider` resource handled by the replication controller
pub const KIND_DNS_PROVIDER: &str = "DNSProvider";

// ============================================================================
// Controller Names
// ============================================================================

/// Name of the lifecycle controller switch
pub const LIFECYCLE_CONTROLLER_NAME: &str = "shoot_dns_service_lifecycle_controller";

/// Name of the DNS provider replication controller switch
pub const REPLICATION_CONTROLLER_NAME: &str = "shoot_dns_service_replication_controller";

/// Name of the health check controller switch
pub const HEALTH_CHECK_CONTROLLER_NAME: &str = "healthcheck_controller";

// ============================================================================
// Flag Names
// ============================================================================

pub const FLAG_SEED_ID: &str = "seed-id";
pub const FLAG_DNS_CLASS: &str = "dns-class";
pub const FLAG_MANAGE_DNS_PROVIDERS: &str = "manage-dns-providers";
pub const FLAG_REPLICATE_DNS_PROVIDERS: &str = "replicate-dns-providers";
pub const FLAG_OWNER_DNS_ACTIVATION: &str = "enable-owner-dns-activation";
pub const FLAG_REMOTE_DEFAULT_DOMAIN_SECRET: &str = "remote-default-domain-secret";
pub const FLAG_HEALTH_CHECK_SYNC_PERIOD: &str = "healthcheck-sync-period";
pub const FLAG_DISABLE_CONTROLLERS: &str = "disable-controllers";

// ============================================================================
// Defaults
// ============================================================================

/// Default DNS class used to filter DNS source resources in shoot clusters
pub const DEFAULT_DNS_CLASS: &str = "garden";

/// Default sync period for the health check controller (30 seconds)
pub const DEFAULT_HEALTH_CHECK_SYNC_PERIOD_SECS: u64 = 30;

/// Default sync period as it appears on the command line
pub const DEFAULT_HEALTH_CHECK_SYNC_PERIOD: &str = "30s";

/// Separator between namespace and name in a secret reference
pub const NAMESPACED_NAME_SEPARATOR: char = '/';

// ============================================================================
// Runtime Constants
// ============================================================================

/// Number of worker threads for Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 2;

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";
