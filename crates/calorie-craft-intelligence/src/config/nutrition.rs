// ABOUTME: Nutrition estimation configuration: multiplier tables and macro split constants
// ABOUTME: Defaults match the onboarding formula; NUTRITION_* env vars override, then validate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Estimation Configuration
//!
//! Every constant used by the estimator lives here so it can be inspected and tuned
//! without touching the calculation:
//!
//! - base energy per kilogram of body weight (24 kcal/kg)
//! - activity multipliers, with a fallback for unrecognized levels (1.55)
//! - goal multipliers, with a fallback for unrecognized goals (1.0)
//! - protein per kilogram (2 g/kg), fat share of calories (30%)
//! - energy density of each macronutrient (4/4/9 kcal per gram)

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use calorie_craft_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition estimation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Activity level multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Goal multipliers
    pub goal_factors: GoalFactorsConfig,
    /// Base energy and macronutrient split
    pub macronutrients: MacronutrientConfig,
}

/// Activity multipliers applied to the base calorie estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (physical job / twice daily): 1.9
    pub very_active: f64,
    /// Applied to unrecognized activity levels: 1.55
    pub fallback: f64,
}

/// Goal multipliers applied after the activity multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFactorsConfig {
    /// Weight loss: 0.8
    pub lose: f64,
    /// Maintenance: 1.0
    pub maintain: f64,
    /// Weight gain: 1.2
    pub gain: f64,
    /// Applied to unrecognized goals: 1.0
    pub fallback: f64,
}

/// Base energy and macronutrient split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Base energy per kilogram of body weight (kcal/kg): 24
    pub base_kcal_per_kg: f64,
    /// Protein per kilogram of body weight (g/kg): 2.0
    pub protein_g_per_kg: f64,
    /// Share of calories from fat (0-1): 0.3
    pub fat_calorie_share: f64,
    /// Protein energy density (kcal/g): 4
    pub protein_kcal_per_g: f64,
    /// Carbohydrate energy density (kcal/g): 4
    pub carbs_kcal_per_g: f64,
    /// Fat energy density (kcal/g): 9
    pub fat_kcal_per_g: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
            fallback: 1.55,
        }
    }
}

impl Default for GoalFactorsConfig {
    fn default() -> Self {
        Self {
            lose: 0.8,
            maintain: 1.0,
            gain: 1.2,
            fallback: 1.0,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            base_kcal_per_kg: 24.0,
            protein_g_per_kg: 2.0,
            fat_calorie_share: 0.3,
            protein_kcal_per_g: 4.0,
            carbs_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level, falling back for `Unrecognized`
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::Unrecognized => self.fallback,
        }
    }
}

impl GoalFactorsConfig {
    /// Multiplier for a goal, falling back for `Unrecognized`
    #[must_use]
    pub const fn factor_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => self.lose,
            Goal::Maintain => self.maintain,
            Goal::Gain => self.gain,
            Goal::Unrecognized => self.fallback,
        }
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from `NUTRITION_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a multiplier or energy density is not strictly positive, or
    /// the fat share is outside (0, 1)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.activity_factors;
        let activity = [
            a.sedentary,
            a.light,
            a.moderate,
            a.active,
            a.very_active,
            a.fallback,
        ];
        if !activity.iter().all(|f| f.is_finite() && *f > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity multipliers must be positive",
            ));
        }

        let g = &self.goal_factors;
        if ![g.lose, g.maintain, g.gain, g.fallback]
            .iter()
            .all(|f| f.is_finite() && *f > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "goal multipliers must be positive",
            ));
        }

        let m = &self.macronutrients;
        if !(m.base_kcal_per_kg.is_finite() && m.base_kcal_per_kg > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "base_kcal_per_kg must be positive",
            ));
        }
        if !(m.protein_g_per_kg.is_finite() && m.protein_g_per_kg >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_g_per_kg must not be negative",
            ));
        }
        if !(m.fat_calorie_share > 0.0 && m.fat_calorie_share < 1.0) {
            return Err(ConfigError::InvalidRange(
                "fat_calorie_share must be between 0 and 1",
            ));
        }
        if ![m.protein_kcal_per_g, m.carbs_kcal_per_g, m.fat_kcal_per_g]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "macronutrient energy densities must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply a single override
    fn apply_var<T: FromStr, F>(lookup: &F, name: &str, target: &mut T) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let a = &mut self.activity_factors;
        Self::apply_var(lookup, "NUTRITION_ACTIVITY_SEDENTARY", &mut a.sedentary)?;
        Self::apply_var(lookup, "NUTRITION_ACTIVITY_LIGHT", &mut a.light)?;
        Self::apply_var(lookup, "NUTRITION_ACTIVITY_MODERATE", &mut a.moderate)?;
        Self::apply_var(lookup, "NUTRITION_ACTIVITY_ACTIVE", &mut a.active)?;
        Self::apply_var(lookup, "NUTRITION_ACTIVITY_VERY_ACTIVE", &mut a.very_active)?;
        Self::apply_var(lookup, "NUTRITION_ACTIVITY_FALLBACK", &mut a.fallback)?;

        let g = &mut self.goal_factors;
        Self::apply_var(lookup, "NUTRITION_GOAL_LOSE", &mut g.lose)?;
        Self::apply_var(lookup, "NUTRITION_GOAL_MAINTAIN", &mut g.maintain)?;
        Self::apply_var(lookup, "NUTRITION_GOAL_GAIN", &mut g.gain)?;
        Self::apply_var(lookup, "NUTRITION_GOAL_FALLBACK", &mut g.fallback)?;

        let m = &mut self.macronutrients;
        Self::apply_var(lookup, "NUTRITION_BASE_KCAL_PER_KG", &mut m.base_kcal_per_kg)?;
        Self::apply_var(lookup, "NUTRITION_PROTEIN_G_PER_KG", &mut m.protein_g_per_kg)?;
        Self::apply_var(lookup, "NUTRITION_FAT_CALORIE_SHARE", &mut m.fat_calorie_share)?;
        Self::apply_var(lookup, "NUTRITION_PROTEIN_KCAL_PER_G", &mut m.protein_kcal_per_g)?;
        Self::apply_var(lookup, "NUTRITION_CARBS_KCAL_PER_G", &mut m.carbs_kcal_per_g)?;
        Self::apply_var(lookup, "NUTRITION_FAT_KCAL_PER_G", &mut m.fat_kcal_per_g)?;

        Ok(self)
    }
}
