// ABOUTME: Calorie Craft HTTP service binary
// ABOUTME: Serves health, nutrition target estimation, and profile intake endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calorie Craft Server Binary
//!
//! Reads `ServerConfig` from the environment, applies command-line overrides, and serves
//! until Ctrl+C or SIGTERM.

use anyhow::Result;
use calorie_craft::{config::ServerConfig, logging, server};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "calorie-craft-server")]
#[command(about = "Calorie Craft - nutrition target estimation and profile intake service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;
    info!("Starting Calorie Craft server");

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
