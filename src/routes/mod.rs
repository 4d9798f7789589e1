// ABOUTME: Route module organization for the Calorie Craft HTTP service
// ABOUTME: Health, nutrition target estimation, and profile intake routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Calorie Craft service
//!
//! Each domain module holds route definitions and thin handlers that delegate to the
//! estimator in `calorie-craft-intelligence`.

use axum::extract::rejection::JsonRejection;
use calorie_craft_core::errors::{AppError, ErrorCode};

/// Health check and readiness routes
pub mod health;
/// Nutrition target estimation routes
pub mod nutrition;
/// Profile intake routes
pub mod profiles;

/// Health route handlers
pub use health::HealthRoutes;
/// Nutrition estimation route handlers
pub use nutrition::{NutritionRoutes, NutritionTargetsRequest, NutritionTargetsResponse};
/// Profile intake route handlers
pub use profiles::ProfileRoutes;

/// Map a JSON extractor rejection onto the unified error envelope
///
/// Body that parses but fails validation is `INVALID_INPUT`; anything unparseable is
/// `INVALID_FORMAT`.
pub(crate) fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => AppError::invalid_input(e.body_text()),
        other => AppError::new(ErrorCode::InvalidFormat, other.body_text()),
    }
}
