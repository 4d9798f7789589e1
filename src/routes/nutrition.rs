// ABOUTME: Nutrition target estimation endpoint
// ABOUTME: Computes daily calorie and macro targets from weight, activity level, and goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use calorie_craft_core::constants::endpoints;
use calorie_craft_core::errors::AppError;
use calorie_craft_core::models::{ActivityLevel, Goal, NutritionTargets};
use calorie_craft_intelligence::{
    calorie_breakdown, estimate_daily_targets_with_config, CalorieBreakdown,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::server::ServerResources;

/// Estimation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargetsRequest {
    /// Body weight in kilograms
    pub weight: f64,
    /// Activity level; unknown strings fall back to the default multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal; unknown strings fall back to the default multiplier
    pub goal: Goal,
}

/// Estimation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargetsResponse {
    /// Rounded daily targets
    #[serde(flatten)]
    pub targets: NutritionTargets,
    /// Protein and fat exceed the calorie target
    pub carb_deficit: bool,
    /// Unrounded intermediate values
    pub breakdown: CalorieBreakdown,
}

/// Nutrition estimation routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the estimation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::NUTRITION_TARGETS, post(Self::handle_estimate))
            .with_state(resources)
    }

    /// Handle target estimation
    async fn handle_estimate(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<NutritionTargetsRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload.map_err(super::rejection_to_error)?;
        let config = &resources.nutrition_config;

        let targets = estimate_daily_targets_with_config(
            request.weight,
            request.activity_level,
            request.goal,
            config,
        )?;
        let breakdown =
            calorie_breakdown(request.weight, request.activity_level, request.goal, config)?;

        debug!(
            weight = request.weight,
            activity_level = %request.activity_level,
            goal = %request.goal,
            daily_calories = targets.daily_calories,
            "Estimated nutrition targets"
        );

        let response = NutritionTargetsResponse {
            targets,
            carb_deficit: targets.has_carb_deficit(),
            breakdown,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
