// ABOUTME: HTTP integration tests for the nutrition target estimation endpoint
// ABOUTME: Covers the reference scenarios, fallback multipliers, carb deficit flag, and error envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use calorie_craft::intelligence::NutritionConfig;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{test_router, test_router_with};
use serde_json::json;

const TARGETS: &str = "/api/nutrition/targets";

#[tokio::test]
async fn test_moderate_maintain_reference_values() {
    let response = AxumTestRequest::post(TARGETS)
        .json(&json!({"weight": 70, "activityLevel": "moderate", "goal": "maintain"}))
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["dailyCalories"], 2604);
    assert_eq!(body["dailyProtein"], 140);
    assert_eq!(body["dailyCarbs"], 315);
    assert_eq!(body["dailyFat"], 87);
    assert_eq!(body["carbDeficit"], false);
    assert_eq!(body["breakdown"]["baseCalories"], 1680.0);
    assert_eq!(body["breakdown"]["activityMultiplier"], 1.55);
}

#[tokio::test]
async fn test_sedentary_lose_reference_values() {
    let response = AxumTestRequest::post(TARGETS)
        .json(&json!({"weight": 50, "activityLevel": "sedentary", "goal": "lose"}))
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["dailyCalories"], 1152);
    assert_eq!(body["dailyProtein"], 100);
    assert_eq!(body["dailyCarbs"], 103);
    assert_eq!(body["dailyFat"], 38);
}

#[tokio::test]
async fn test_unknown_activity_and_goal_use_fallbacks() {
    let response = AxumTestRequest::post(TARGETS)
        .json(&json!({"weight": 70, "activityLevel": "marathoner", "goal": "bulk"}))
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["dailyCalories"], 2604);
    assert_eq!(body["breakdown"]["goalMultiplier"], 1.0);
}

#[tokio::test]
async fn test_carb_deficit_flagged_not_clamped() {
    let mut config = NutritionConfig::default();
    config.goal_factors.lose = 0.2;

    let response = AxumTestRequest::post(TARGETS)
        .json(&json!({"weight": 100, "activityLevel": "sedentary", "goal": "lose"}))
        .send(test_router_with(config))
        .await;

    assert_eq!(response.status(), 200);

    // 100 * 24 * 1.2 * 0.2 = 576 kcal; protein alone is 800 kcal
    let body: serde_json::Value = response.json();
    assert_eq!(body["dailyCalories"], 576);
    assert_eq!(body["dailyProtein"], 200);
    assert_eq!(body["dailyFat"], 19);
    assert_eq!(body["dailyCarbs"], -99);
    assert_eq!(body["carbDeficit"], true);
}

#[tokio::test]
async fn test_non_positive_weight_rejected() {
    let response = AxumTestRequest::post(TARGETS)
        .json(&json!({"weight": 0, "activityLevel": "moderate", "goal": "maintain"}))
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_missing_field_rejected_with_envelope() {
    let response = AxumTestRequest::post(TARGETS)
        .json(&json!({"activityLevel": "moderate", "goal": "maintain"}))
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["message"].as_str().unwrap().contains("weight"));
}

#[tokio::test]
async fn test_malformed_json_is_invalid_format() {
    let response = AxumTestRequest::post(TARGETS)
        .raw_body("application/json", "{\"weight\": ")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_get_not_allowed() {
    let response = AxumTestRequest::get(TARGETS).send(test_router()).await;
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_weight_above_limit_rejected() {
    for weight in [500.5, 1e300] {
        let response = AxumTestRequest::post(TARGETS)
            .json(&json!({"weight": weight, "activityLevel": "moderate", "goal": "maintain"}))
            .send(test_router())
            .await;

        assert_eq!(response.status(), 400);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
        assert!(body["error"]["message"].as_str().unwrap().contains("500"));
    }
}
