// ABOUTME: One-shot target estimation command
// ABOUTME: Parses activity and goal leniently and prints targets as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use calorie_craft::intelligence::estimate_daily_targets_with_config;
use calorie_craft::intelligence::NutritionConfig;
use calorie_craft::models::{ActivityLevel, Goal};
use serde_json::json;
use tracing::info;

use crate::helpers::display::display_targets;

/// Estimate and print daily targets
pub fn run(weight: f64, activity: &str, goal: &str, as_json: bool) -> Result<()> {
    let config = NutritionConfig::load()?;
    let activity_level = ActivityLevel::from_str_lossy(activity);
    let goal = Goal::from_str_lossy(goal);

    info!(weight, activity_level = %activity_level, goal = %goal, "Estimating targets");
    let targets = estimate_daily_targets_with_config(weight, activity_level, goal, &config)?;

    if as_json {
        let body = json!({
            "dailyCalories": targets.daily_calories,
            "dailyProtein": targets.daily_protein,
            "dailyCarbs": targets.daily_carbs,
            "dailyFat": targets.daily_fat,
            "carbDeficit": targets.has_carb_deficit(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        display_targets(&targets);
    }

    Ok(())
}
