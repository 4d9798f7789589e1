// ABOUTME: Test fixtures for profiles, routers, and scripted wizard input
// ABOUTME: Shared by the route, session, and submission integration tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use calorie_craft::config::ServerConfig;
use calorie_craft::intelligence::NutritionConfig;
use calorie_craft::models::{ActivityLevel, Goal, Profile, Sex};
use calorie_craft::server::{build_router, ServerResources};

/// 30 year old, 180 cm, 70 kg, moderate activity, maintain
pub fn sample_profile() -> Profile {
    Profile::new(
        30,
        Sex::Male,
        180.0,
        70.0,
        ActivityLevel::Moderate,
        Goal::Maintain,
    )
    .unwrap()
}

/// JSON body of [`sample_profile`] as the browser form sends it
pub fn sample_profile_json() -> serde_json::Value {
    serde_json::json!({
        "age": 30,
        "sex": "male",
        "height": 180,
        "weight": 70,
        "activityLevel": "moderate",
        "goal": "maintain"
    })
}

/// Full application router with default estimator tables
pub fn test_router() -> axum::Router {
    test_router_with(NutritionConfig::default())
}

/// Full application router with a custom estimator configuration
pub fn test_router_with(config: NutritionConfig) -> axum::Router {
    build_router(
        &ServerConfig::default(),
        Arc::new(ServerResources::new(config)),
    )
}

/// Join scripted answers into stdin-style input, one per line
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
