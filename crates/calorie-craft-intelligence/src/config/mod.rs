// ABOUTME: Configuration module for calorie-craft-intelligence crate
// ABOUTME: Re-exports nutrition configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Nutrition estimation constants and overrides
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, GoalFactorsConfig, MacronutrientConfig, NutritionConfig,
};
