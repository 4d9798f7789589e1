// ABOUTME: Daily nutrition target model derived from an onboarding profile
// ABOUTME: Integer calories and macro grams, serialized with the form's camelCase names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily calorie and macronutrient targets
///
/// Values are rounded independently, so macro calories will not always sum exactly to
/// `daily_calories`. Carbohydrates are the remainder after protein and fat and are not
/// clamped: a negative value is reported through [`Self::has_carb_deficit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargets {
    /// Energy target (kcal/day)
    pub daily_calories: i64,
    /// Protein target (g/day)
    pub daily_protein: i64,
    /// Carbohydrate target (g/day)
    pub daily_carbs: i64,
    /// Fat target (g/day)
    pub daily_fat: i64,
}

impl NutritionTargets {
    /// Whether protein and fat alone exceed the calorie target
    #[must_use]
    pub const fn has_carb_deficit(&self) -> bool {
        self.daily_carbs < 0
    }
}
