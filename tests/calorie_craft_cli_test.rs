// ABOUTME: Integration tests for the calorie-craft CLI binary
// ABOUTME: Tests command structure, estimate output, and dry-run onboarding over stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the calorie-craft binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Stdio};

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_calorie-craft"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"], None);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("estimate"));
    assert!(stdout.contains("onboard"));
}

#[test]
fn test_estimate_text_output() {
    let (exit_code, stdout, _stderr) = run_cli(
        &["estimate", "--weight", "70", "--activity", "moderate", "--goal", "maintain"],
        None,
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Daily Calories: 2604"));
    assert!(stdout.contains("Protein: 140g"));
    assert!(stdout.contains("Carbohydrates: 315g"));
    assert!(stdout.contains("Fat: 87g"));
}

#[test]
fn test_estimate_json_output() {
    let (exit_code, stdout, _stderr) = run_cli(
        &["estimate", "--weight", "50", "--activity", "sedentary", "--goal", "lose", "--json"],
        None,
    );

    assert_eq!(exit_code, 0);
    let body: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["dailyCalories"], 1152);
    assert_eq!(body["dailyCarbs"], 103);
    assert_eq!(body["carbDeficit"], false);
}

#[test]
fn test_estimate_rejects_non_positive_weight() {
    let (exit_code, _stdout, stderr) = run_cli(&["estimate", "--weight", "0"], None);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Weight must be a positive number"));
}

#[test]
fn test_estimate_rejects_weight_above_limit() {
    let (exit_code, stdout, stderr) = run_cli(&["estimate", "--weight", "1e300"], None);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Weight must be at most 500 kg"));
}

#[test]
fn test_onboard_dry_run_over_stdin() {
    let (exit_code, stdout, _stderr) = run_cli(
        &["onboard", "--dry-run"],
        Some("30\nmale\n180\n70\nmoderate\nmaintain\nsubmit\n"),
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Step 3 of 3: Your Personalized Plan"));
    assert!(stdout.contains("Dry run: profile was not submitted."));
}

#[test]
fn test_onboard_closed_stdin_cancels() {
    let (exit_code, stdout, _stderr) = run_cli(&["onboard", "--dry-run"], Some(""));

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Onboarding cancelled."));
}
