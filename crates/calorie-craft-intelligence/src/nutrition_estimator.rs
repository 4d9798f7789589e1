// ABOUTME: Daily calorie and macronutrient target estimation from weight, activity, and goal
// ABOUTME: Pure, deterministic calculation; age, sex and height deliberately do not participate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Estimator
//!
//! Maps `(weight, activity level, goal)` to integer daily targets:
//!
//! ```text
//! calories = round(weight * 24 * activity_multiplier * goal_multiplier)
//! protein  = round(weight * 2)
//! fat      = round(calories * 0.30 / 9)
//! carbs    = round((calories - protein * 4 - fat * 9) / 4)
//! ```
//!
//! Each output is rounded on its own (half-up), so macro calories need not add up to the
//! calorie target exactly. Carbohydrates absorb the remainder and may go negative under
//! aggressive configurations; the value is kept as computed and flagged.

use calorie_craft_core::constants::limits;
use calorie_craft_core::errors::{AppError, AppResult};
use calorie_craft_core::models::{ActivityLevel, Goal, NutritionTargets, Profile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::NutritionConfig;

/// Intermediate values of the calorie calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieBreakdown {
    /// `weight * base_kcal_per_kg`, before any multiplier
    pub base_calories: f64,
    /// Multiplier applied for the activity level
    pub activity_multiplier: f64,
    /// Multiplier applied for the goal
    pub goal_multiplier: f64,
}

impl CalorieBreakdown {
    /// Unrounded calorie target
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.base_calories * self.activity_multiplier * self.goal_multiplier
    }
}

/// Round to the nearest integer, sending exact halves toward positive infinity
///
/// `-2.5` rounds to `-2`, unlike `f64::round` which rounds halves away from zero.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i64
}

fn ensure_weight(weight_kg: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(
            "Weight must be a positive number of kilograms",
        ));
    }
    if weight_kg > limits::MAX_WEIGHT_KG {
        return Err(AppError::out_of_range(format!(
            "Weight must be at most {} kg",
            limits::MAX_WEIGHT_KG
        )));
    }
    Ok(())
}

/// Compute the calorie breakdown without rounding
///
/// # Errors
///
/// Returns an error if weight is not a positive, finite number or exceeds the accepted maximum
pub fn calorie_breakdown(
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    config: &NutritionConfig,
) -> AppResult<CalorieBreakdown> {
    ensure_weight(weight_kg)?;

    if activity_level == ActivityLevel::Unrecognized {
        debug!(
            fallback = config.activity_factors.fallback,
            "Unrecognized activity level, using fallback multiplier"
        );
    }
    if goal == Goal::Unrecognized {
        debug!(
            fallback = config.goal_factors.fallback,
            "Unrecognized goal, using fallback multiplier"
        );
    }

    Ok(CalorieBreakdown {
        base_calories: weight_kg * config.macronutrients.base_kcal_per_kg,
        activity_multiplier: config.activity_factors.factor_for(activity_level),
        goal_multiplier: config.goal_factors.factor_for(goal),
    })
}

/// Estimate daily targets with an explicit configuration
///
/// # Errors
///
/// Returns an error if weight is not a positive, finite number or exceeds the accepted maximum
pub fn estimate_daily_targets_with_config(
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    config: &NutritionConfig,
) -> AppResult<NutritionTargets> {
    let breakdown = calorie_breakdown(weight_kg, activity_level, goal, config)?;
    let macros = &config.macronutrients;

    let calories = round_half_up(breakdown.calories());
    let protein = round_half_up(weight_kg * macros.protein_g_per_kg);
    let fat = round_half_up(calories as f64 * macros.fat_calorie_share / macros.fat_kcal_per_g);
    let remaining_kcal = (protein as f64).mul_add(
        -macros.protein_kcal_per_g,
        (fat as f64).mul_add(-macros.fat_kcal_per_g, calories as f64),
    );
    let carbs = round_half_up(remaining_kcal / macros.carbs_kcal_per_g);

    let targets = NutritionTargets {
        daily_calories: calories,
        daily_protein: protein,
        daily_carbs: carbs,
        daily_fat: fat,
    };

    if targets.has_carb_deficit() {
        warn!(
            weight_kg,
            activity_level = %activity_level,
            goal = %goal,
            daily_carbs = carbs,
            "Protein and fat exceed the calorie target; carbohydrate target is negative"
        );
    }

    Ok(targets)
}

/// Estimate daily targets using the global configuration
///
/// # Errors
///
/// Returns an error if weight is not a positive, finite number or exceeds the accepted maximum
pub fn estimate_daily_targets(
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
) -> AppResult<NutritionTargets> {
    estimate_daily_targets_with_config(weight_kg, activity_level, goal, NutritionConfig::global())
}

/// Estimate daily targets for a completed profile
///
/// Only weight, activity level and goal are read.
///
/// # Errors
///
/// Returns an error if the profile's weight is rejected by the estimator
pub fn estimate_for_profile(
    profile: &Profile,
    config: &NutritionConfig,
) -> AppResult<NutritionTargets> {
    estimate_daily_targets_with_config(
        profile.weight_kg(),
        profile.activity_level(),
        profile.goal(),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_craft_core::errors::ErrorCode;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(102.5), 103);
        assert_eq!(round_half_up(315.25), 315);
        assert_eq!(round_half_up(86.8), 87);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_moderate_maintain_70kg() {
        let targets = estimate_daily_targets_with_config(
            70.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
            &NutritionConfig::default(),
        )
        .unwrap();

        assert_eq!(
            targets,
            NutritionTargets {
                daily_calories: 2604,
                daily_protein: 140,
                daily_carbs: 315,
                daily_fat: 87,
            }
        );
    }

    #[test]
    fn test_sedentary_lose_50kg() {
        let targets = estimate_daily_targets_with_config(
            50.0,
            ActivityLevel::Sedentary,
            Goal::Lose,
            &NutritionConfig::default(),
        )
        .unwrap();

        assert_eq!(targets.daily_calories, 1152);
        assert_eq!(targets.daily_protein, 100);
        assert_eq!(targets.daily_fat, 38);
        assert_eq!(targets.daily_carbs, 103);
    }

    #[test]
    fn test_rejects_invalid_weight() {
        let config = NutritionConfig::default();
        for weight in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = estimate_daily_targets_with_config(
                weight,
                ActivityLevel::Light,
                Goal::Gain,
                &config,
            )
            .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_rejects_weight_above_limit() {
        let config = NutritionConfig::default();
        for weight in [limits::MAX_WEIGHT_KG + 0.5, 1e300, f64::MAX] {
            let err = estimate_daily_targets_with_config(
                weight,
                ActivityLevel::Moderate,
                Goal::Maintain,
                &config,
            )
            .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        }

        let at_limit = estimate_daily_targets_with_config(
            limits::MAX_WEIGHT_KG,
            ActivityLevel::Moderate,
            Goal::Maintain,
            &config,
        )
        .unwrap();
        assert_eq!(at_limit.daily_protein, 1000);
    }

    #[test]
    fn test_breakdown_exposes_multipliers() {
        let breakdown = calorie_breakdown(
            80.0,
            ActivityLevel::VeryActive,
            Goal::Gain,
            &NutritionConfig::default(),
        )
        .unwrap();
        assert!((breakdown.base_calories - 1920.0).abs() < 1e-9);
        assert!((breakdown.activity_multiplier - 1.9).abs() < f64::EPSILON);
        assert!((breakdown.goal_multiplier - 1.2).abs() < f64::EPSILON);
    }
}
