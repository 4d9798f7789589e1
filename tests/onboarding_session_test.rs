// ABOUTME: Integration tests for the interactive onboarding session
// ABOUTME: Drives the prompt loop with scripted input and a recording profile submitter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use calorie_craft::constants::{messages, service_names};
use calorie_craft::errors::{AppError, AppResult};
use calorie_craft::intelligence::{estimate_for_profile, NutritionConfig};
use calorie_craft::models::{Goal, Profile, ProfileReceipt};
use calorie_craft::onboarding::{OnboardingSession, OnboardingWizard, SessionOutcome};
use calorie_craft::submission::ProfileSubmitter;
use chrono::Utc;
use helpers::test_utils::script;
use uuid::Uuid;

/// Records submitted profiles; fails the first `failures` attempts
struct RecordingSubmitter {
    submitted: Mutex<Vec<Profile>>,
    failures: Mutex<u32>,
}

impl RecordingSubmitter {
    fn new(failures: u32) -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            failures: Mutex::new(failures),
        }
    }
}

#[async_trait]
impl ProfileSubmitter for RecordingSubmitter {
    async fn submit(&self, profile: &Profile) -> AppResult<ProfileReceipt> {
        {
            let mut failures = self.failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(AppError::external_unavailable(
                    service_names::PROFILE_SERVICE,
                ));
            }
        }

        self.submitted.lock().unwrap().push(profile.clone());
        Ok(ProfileReceipt {
            profile_id: Uuid::new_v4(),
            received_at: Utc::now(),
            targets: estimate_for_profile(profile, &NutritionConfig::default())?,
            message: messages::PROFILE_CREATED.to_owned(),
        })
    }
}

async fn run_script(
    lines: &[&str],
    submitter: Option<&dyn ProfileSubmitter>,
) -> (SessionOutcome, String) {
    let input = Cursor::new(script(lines));
    let mut output = Vec::new();
    let wizard = OnboardingWizard::with_config(NutritionConfig::default());

    let outcome = OnboardingSession::new(input, &mut output, wizard)
        .run(submitter)
        .await
        .unwrap();

    (outcome, String::from_utf8(output).unwrap())
}

const HAPPY_PATH: &[&str] = &["30", "1", "180", "70", "3", "2", "submit"];

#[tokio::test]
async fn test_happy_path_submits_profile() {
    let submitter = RecordingSubmitter::new(0);

    let (outcome, output) = run_script(HAPPY_PATH, Some(&submitter)).await;

    let SessionOutcome::Submitted(receipt) = outcome else {
        panic!("expected submission, got {outcome:?}");
    };
    assert_eq!(receipt.targets.daily_calories, 2604);
    assert_eq!(submitter.submitted.lock().unwrap().len(), 1);

    assert!(output.contains("Step 1 of 3: Personal Information"));
    assert!(output.contains("33% Complete"));
    assert!(output.contains("67% Complete"));
    assert!(output.contains("100% Complete"));
    assert!(output.contains("Daily Calories: 2604"));
    assert!(output.contains("Goal: maintain weight"));
    assert!(output.contains(messages::PROFILE_CREATED));
}

#[tokio::test]
async fn test_dry_run_completes_without_submitter() {
    let (outcome, _) = run_script(HAPPY_PATH, None).await;

    let SessionOutcome::Completed { profile, targets } = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert!((profile.weight_kg() - 70.0).abs() < f64::EPSILON);
    assert_eq!(targets.daily_fat, 87);
}

#[tokio::test]
async fn test_missing_field_repeats_step() {
    // Weight left blank on the first pass
    let lines = [
        "30", "male", "180", "", // blocked
        "", "", "", "70", // existing values kept, weight filled in
        "moderate", "maintain", "submit",
    ];

    let (outcome, output) = run_script(&lines, None).await;

    assert!(matches!(outcome, SessionOutcome::Completed { .. }));
    assert!(output.contains(messages::MISSING_PERSONAL_INFO));
    assert!(output.contains("Age [30]: "));
}

#[tokio::test]
async fn test_back_returns_to_previous_step_with_values() {
    let lines = [
        "30", "male", "180", "70", // step 1
        "back", // abandon step 2
        "", "", "", "80", // step 1 again, change weight
        "moderate", "lose", "submit",
    ];

    let (outcome, output) = run_script(&lines, None).await;

    let SessionOutcome::Completed { profile, targets } = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert!((profile.weight_kg() - 80.0).abs() < f64::EPSILON);
    assert_eq!(profile.goal(), Goal::Lose);
    assert_eq!(targets.daily_protein, 160);
    assert!(output.contains("Weight (kg) [70]: "));
}

#[tokio::test]
async fn test_back_from_review_allows_goal_change() {
    let lines = [
        "30", "male", "180", "70", "moderate", "maintain", // to review
        "back", "", "gain", // goals again, keep activity, change goal
        "submit",
    ];

    let (outcome, _) = run_script(&lines, None).await;

    let SessionOutcome::Completed { profile, targets } = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(profile.goal(), Goal::Gain);
    assert_eq!(targets.daily_calories, 3125);
}

#[tokio::test]
async fn test_failed_submission_can_be_retried() {
    let submitter = RecordingSubmitter::new(1);
    let lines = ["30", "male", "180", "70", "moderate", "maintain", "submit", "submit"];

    let (outcome, output) = run_script(&lines, Some(&submitter)).await;

    assert!(matches!(outcome, SessionOutcome::Submitted(_)));
    assert!(output.contains("Profile service is unreachable"));
    assert_eq!(submitter.submitted.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_end_of_input_aborts() {
    let (outcome, _) = run_script(&["30", "male"], None).await;
    assert_eq!(outcome, SessionOutcome::Aborted);
}

#[tokio::test]
async fn test_end_of_input_on_review_aborts_without_submitting() {
    let submitter = RecordingSubmitter::new(0);
    let lines = ["30", "male", "180", "70", "moderate", "maintain"];

    let (outcome, _) = run_script(&lines, Some(&submitter)).await;

    assert_eq!(outcome, SessionOutcome::Aborted);
    assert!(submitter.submitted.lock().unwrap().is_empty());
}
