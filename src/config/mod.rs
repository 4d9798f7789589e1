// ABOUTME: Configuration management module for server and client settings
// ABOUTME: Re-exports environment configuration and the nutrition estimator configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Calorie Craft
//!
//! - **Environment**: server bind settings and client endpoint from environment variables
//! - **Nutrition**: estimator tables, re-exported from `calorie-craft-intelligence`

/// Environment and server configuration
pub mod environment;

pub use calorie_craft_intelligence::config::{ConfigError, NutritionConfig};
pub use environment::{ClientConfig, Environment, LogLevel, ServerConfig};
