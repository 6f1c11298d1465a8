// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Sub-controllers of the shoot DNS service extension.
//!
//! Each sub-controller exposes a `NAME` and an `add_to_manager` activation
//! function. Activation only registers the controller with the [`Manager`];
//! which controllers are activated is decided by
//! [`crate::switches::SwitchConfig`].
//!
//! - [`lifecycle`] - Handles `Extension` resources of type `shoot-dns-service`
//! - [`replication`] - Replicates `DNSProvider` resources from shoot to seed
//! - [`healthcheck`] - Periodically evaluates extension health
//!
//! [`Manager`]: crate::manager::Manager

pub mod healthcheck;
pub mod lifecycle;
pub mod replication;
