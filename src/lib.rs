// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Shoot DNS service extension - options and controller switches
//!
//! This library turns the command-line options of the shoot DNS service
//! extension into validated controller configuration, and provides the
//! registry of sub-controllers the extension can run.
//!
//! ## Overview
//!
//! Startup follows three phases:
//!
//! 1. **Parse** - `clap` populates the raw option groups ([`options`], [`switches`])
//! 2. **Complete** - each group is validated once into an immutable configuration
//! 3. **Apply** - completed configurations are copied into the controller
//!    configuration ([`config`]) and the enabled controllers are activated
//!    against a [`manager::Manager`]
//!
//! ## Modules
//!
//! - [`cli`] - Top-level command line aggregating all option groups
//! - [`options`] - DNS service and health check options and their completed forms
//! - [`config`] - Controller configuration types the options are applied into
//! - [`switches`] - Controller switch registry and `--disable-controllers`
//! - [`controllers`] - Lifecycle, replication and health check activation
//! - [`manager`] - Controller registration and the process-level manager
//! - [`duration`] - Go-style duration parsing and formatting
//! - [`errors`] - Option completion errors
//!
//! ## Example
//!
//! ```rust
//! use clap::Parser;
//! use shoot_dns_service::cli::Cli;
//! use shoot_dns_service::switches::controller_switches;
//!
//! let cli = Cli::try_parse_from([
//!     "shoot-dns-service",
//!     "--seed-id=aws-eu1",
//!     "--remote-default-domain-secret=garden/default-domain",
//! ])
//! .unwrap();
//!
//! let startup = cli.complete(&controller_switches()).unwrap();
//! let controllers = startup.controllers().unwrap();
//! assert_eq!(controllers.controllers().len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod controllers;
pub mod duration;
pub mod errors;
pub mod manager;
pub mod options;
pub mod switches;
