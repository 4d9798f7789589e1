// ABOUTME: Profile intake endpoint receiving completed onboarding profiles
// ABOUTME: Re-validates the profile, recomputes targets server-side, and acknowledges with a receipt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile intake
//!
//! Targets sent by the client are never trusted; they are recomputed from the profile.
//! Nothing is stored, the receipt is the whole contract.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use calorie_craft_core::constants::{endpoints, messages};
use calorie_craft_core::errors::AppError;
use calorie_craft_core::models::{Profile, ProfileReceipt};
use calorie_craft_intelligence::estimate_for_profile;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::server::ServerResources;

/// Profile intake routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create the profile intake routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::PROFILES, post(Self::handle_create_profile))
            .with_state(resources)
    }

    /// Handle profile submission
    async fn handle_create_profile(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Profile>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(profile) = payload.map_err(super::rejection_to_error)?;
        let targets = estimate_for_profile(&profile, &resources.nutrition_config)?;

        let receipt = ProfileReceipt {
            profile_id: Uuid::new_v4(),
            received_at: Utc::now(),
            targets,
            message: messages::PROFILE_CREATED.to_owned(),
        };

        info!(
            profile_id = %receipt.profile_id,
            activity_level = %profile.activity_level(),
            goal = %profile.goal(),
            daily_calories = targets.daily_calories,
            "Profile accepted"
        );

        Ok((StatusCode::CREATED, Json(receipt)).into_response())
    }
}
