// ABOUTME: Interactive onboarding command
// ABOUTME: Runs the wizard on stdin/stdout and submits the profile unless --dry-run is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;

use anyhow::Result;
use calorie_craft::config::{ClientConfig, NutritionConfig};
use calorie_craft::onboarding::{OnboardingSession, OnboardingWizard, SessionOutcome};
use calorie_craft::submission::{HttpProfileSubmitter, ProfileSubmitter};
use tracing::info;

use crate::helpers::display::{display_banner, display_completed, display_receipt};

/// Run the onboarding wizard
pub async fn run(server_url: Option<String>, dry_run: bool) -> Result<()> {
    let mut client_config = ClientConfig::from_env()?;
    if let Some(url) = server_url {
        client_config.server_url = url.trim_end_matches('/').to_owned();
    }

    let wizard = OnboardingWizard::with_config(NutritionConfig::load()?);
    let http_submitter = HttpProfileSubmitter::new(&client_config);
    let submitter: Option<&dyn ProfileSubmitter> = if dry_run {
        None
    } else {
        info!(url = %http_submitter.profiles_url(), "Profiles will be submitted");
        Some(&http_submitter)
    };

    display_banner();

    let stdin = io::stdin();
    let session = OnboardingSession::new(stdin.lock(), io::stdout(), wizard);
    match session.run(submitter).await? {
        SessionOutcome::Submitted(receipt) => display_receipt(&receipt),
        SessionOutcome::Completed { profile, targets } => display_completed(&profile, &targets),
        SessionOutcome::Aborted => println!("\nOnboarding cancelled."),
    }

    Ok(())
}
