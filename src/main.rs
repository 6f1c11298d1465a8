// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use shoot_dns_service::{
    cli::Cli,
    constants::{LOG_FORMAT_ENV, TOKIO_WORKER_THREADS},
    manager::ControllerManager,
    switches::controller_switches,
};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Parse before starting the runtime so --help and flag errors exit early
    let cli = Cli::parse();

    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name("shoot-dns-service")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    // Initialize logging with custom format
    // Format: timestamp file:line LEVEL message
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Respects RUST_LOG_FORMAT environment variable for output format (text or json)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    info!("Starting shoot DNS service extension");
    debug!(options = ?cli, "Parsed command line");

    // Validation errors are fatal: never run with unvalidated configuration
    let startup = cli
        .complete(&controller_switches())
        .context("failed to complete command-line options")?;
    let controllers = startup.controllers()?;

    debug!("Initializing Kubernetes client");
    let client = Client::try_default()
        .await
        .context("failed to create Kubernetes client")?;

    ControllerManager::new(client, controllers).run().await
}
