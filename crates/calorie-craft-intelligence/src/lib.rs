// ABOUTME: Nutrition estimation engine for Calorie Craft
// ABOUTME: Extracted from the main crate so the pure calculation has no server dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Craft Intelligence
//!
//! Daily calorie and macronutrient target estimation, plus the configuration it reads.

/// Nutrition configuration (multiplier tables, macro split, env overrides)
pub mod config;

/// Daily target estimation
pub mod nutrition_estimator;

pub use config::{ConfigError, NutritionConfig};
pub use nutrition_estimator::{
    calorie_breakdown, estimate_daily_targets, estimate_daily_targets_with_config,
    estimate_for_profile, round_half_up, CalorieBreakdown,
};
