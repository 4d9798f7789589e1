// ABOUTME: Integration tests for the nutrition estimator formula
// ABOUTME: Checks the target relations across every activity/goal combination and the edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calorie_craft::errors::ErrorCode;
use calorie_craft::intelligence::{
    estimate_daily_targets, estimate_daily_targets_with_config, estimate_for_profile,
    round_half_up, NutritionConfig,
};
use calorie_craft::models::{ActivityLevel, Goal, Profile, Sex};

const ACTIVITY_FACTORS: [(ActivityLevel, f64); 5] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::Light, 1.375),
    (ActivityLevel::Moderate, 1.55),
    (ActivityLevel::Active, 1.725),
    (ActivityLevel::VeryActive, 1.9),
];

const GOAL_FACTORS: [(Goal, f64); 3] = [(Goal::Lose, 0.8), (Goal::Maintain, 1.0), (Goal::Gain, 1.2)];

#[test]
fn test_targets_follow_formula_for_all_selections() {
    let config = NutritionConfig::default();

    for weight in [45.0, 62.5, 70.0, 88.8, 120.0] {
        for (activity, am) in ACTIVITY_FACTORS {
            for (goal, gm) in GOAL_FACTORS {
                let targets =
                    estimate_daily_targets_with_config(weight, activity, goal, &config).unwrap();

                let calories = round_half_up(weight * 24.0 * am * gm);
                let protein = round_half_up(weight * 2.0);
                let fat = round_half_up(calories as f64 * 0.3 / 9.0);
                let carbs =
                    round_half_up((calories as f64 - protein as f64 * 4.0 - fat as f64 * 9.0) / 4.0);

                assert_eq!(targets.daily_calories, calories, "{weight} {activity} {goal}");
                assert_eq!(targets.daily_protein, protein);
                assert_eq!(targets.daily_fat, fat);
                assert_eq!(targets.daily_carbs, carbs);
            }
        }
    }
}

#[test]
fn test_reference_scenarios() {
    let t = estimate_daily_targets(70.0, ActivityLevel::Moderate, Goal::Maintain).unwrap();
    assert_eq!(
        (t.daily_calories, t.daily_protein, t.daily_carbs, t.daily_fat),
        (2604, 140, 315, 87)
    );

    let t = estimate_daily_targets(50.0, ActivityLevel::Sedentary, Goal::Lose).unwrap();
    assert_eq!(
        (t.daily_calories, t.daily_protein, t.daily_carbs, t.daily_fat),
        (1152, 100, 103, 38)
    );
}

#[test]
fn test_unrecognized_values_match_moderate_maintain() {
    let config = NutritionConfig::default();
    let fallback = estimate_daily_targets_with_config(
        64.0,
        ActivityLevel::from_str_lossy("ultra"),
        Goal::from_str_lossy("shred"),
        &config,
    )
    .unwrap();
    let reference =
        estimate_daily_targets_with_config(64.0, ActivityLevel::Moderate, Goal::Maintain, &config)
            .unwrap();

    assert_eq!(fallback, reference);
}

#[test]
fn test_estimation_is_idempotent() {
    let first = estimate_daily_targets(77.3, ActivityLevel::Active, Goal::Gain).unwrap();
    let second = estimate_daily_targets(77.3, ActivityLevel::Active, Goal::Gain).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_age_sex_height_do_not_affect_targets() {
    let config = NutritionConfig::default();
    let a = Profile::new(25, Sex::Female, 160.0, 70.0, ActivityLevel::Light, Goal::Lose).unwrap();
    let b = Profile::new(70, Sex::Male, 195.0, 70.0, ActivityLevel::Light, Goal::Lose).unwrap();

    assert_eq!(
        estimate_for_profile(&a, &config).unwrap(),
        estimate_for_profile(&b, &config).unwrap()
    );
}

#[test]
fn test_negative_carbs_preserved() {
    let mut config = NutritionConfig::default();
    config.goal_factors.lose = 0.2;

    let targets =
        estimate_daily_targets_with_config(100.0, ActivityLevel::Sedentary, Goal::Lose, &config)
            .unwrap();

    assert_eq!(targets.daily_carbs, -99);
    assert!(targets.has_carb_deficit());
}

#[test]
fn test_invalid_weights_refused() {
    for weight in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let err = estimate_daily_targets(weight, ActivityLevel::Moderate, Goal::Maintain)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
