// ABOUTME: Main library entry point for Calorie Craft
// ABOUTME: Onboarding wizard, profile submission, and the nutrition target HTTP service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Craft
//!
//! Multi-step onboarding for a nutrition-tracking application. A three-step wizard collects
//! biometrics, activity level and goal, computes daily calorie and macronutrient targets,
//! and submits the finished profile to the profile service.
//!
//! ## Architecture
//!
//! - **Onboarding**: wizard state machine and interactive session
//! - **Submission**: `ProfileSubmitter` contract and its HTTP client
//! - **Routes / Server**: axum service for estimation and profile intake
//! - **Config / Logging**: environment-driven settings and tracing setup
//!
//! Domain models and the estimator live in `calorie-craft-core` and
//! `calorie-craft-intelligence`; both are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_craft::models::{ActivityLevel, Goal};
//! use calorie_craft::intelligence::estimate_daily_targets;
//!
//! let targets = estimate_daily_targets(70.0, ActivityLevel::Moderate, Goal::Maintain)?;
//! assert_eq!(targets.daily_calories, 2604);
//! # Ok::<(), calorie_craft::errors::AppError>(())
//! ```

/// Environment-driven server and client configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request spans)
pub mod middleware;

/// Onboarding wizard and interactive session
pub mod onboarding;

/// `HTTP` route handlers
pub mod routes;

/// HTTP service assembly
pub mod server;

/// Profile submission contract and HTTP client
pub mod submission;

pub use calorie_craft_core::{constants, errors, models};
pub use calorie_craft_intelligence as intelligence;
