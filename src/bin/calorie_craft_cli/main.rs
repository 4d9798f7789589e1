// ABOUTME: Calorie Craft CLI - onboarding wizard and quick target estimates from the terminal
// ABOUTME: Dispatches the estimate and onboard subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate daily targets
//! calorie-craft estimate --weight 70 --activity moderate --goal maintain
//!
//! # Same, as JSON
//! calorie-craft estimate --weight 70 --activity moderate --goal maintain --json
//!
//! # Run the three-step onboarding wizard and submit the profile
//! calorie-craft onboard --server-url http://127.0.0.1:8081
//!
//! # Run the wizard without submitting
//! calorie-craft onboard --dry-run
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use calorie_craft::logging::LoggingConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "calorie-craft",
    about = "Calorie Craft onboarding CLI",
    long_about = "Collects your profile in three steps, computes daily calorie and macro targets, and submits the profile to the Calorie Craft service."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (written to stderr)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate daily calorie and macronutrient targets
    Estimate {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Activity level (sedentary, light, moderate, active, `very_active`)
        #[arg(long, default_value = "moderate")]
        activity: String,

        /// Goal (lose, maintain, gain)
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the interactive onboarding wizard
    Onboard {
        /// Profile service URL (defaults to `CALORIE_CRAFT_SERVER_URL`)
        #[arg(long)]
        server_url: Option<String>,

        /// Compute targets without submitting the profile
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    match cli.command {
        Command::Estimate {
            weight,
            activity,
            goal,
            json,
        } => commands::estimate::run(weight, &activity, &goal, json)?,
        Command::Onboard {
            server_url,
            dry_run,
        } => commands::onboard::run(server_url, dry_run).await?,
    }

    Ok(())
}
