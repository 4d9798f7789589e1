// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for endpoints, ports, wizard steps, and user-facing notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Application constants grouped by domain.

/// Service identifiers used in logs
pub mod service_names {
    /// HTTP service name
    pub const CALORIE_CRAFT_SERVER: &str = "calorie-craft-server";
    /// Command-line client name
    pub const CALORIE_CRAFT_CLI: &str = "calorie-craft";
    /// Name used when reporting profile service failures
    pub const PROFILE_SERVICE: &str = "Profile service";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// Nutrition target estimation endpoint
    pub const NUTRITION_TARGETS: &str = "/api/nutrition/targets";
    /// Profile intake endpoint
    pub const PROFILES: &str = "/api/profiles";
}

/// Network ports and defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
}

/// Client defaults
pub mod client {
    /// Default base URL of the profile service
    pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8081";
    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

/// Onboarding wizard constants
pub mod wizard {
    /// Number of wizard steps
    pub const TOTAL_STEPS: u8 = 3;
    /// Keyword accepted by the interactive session to return to the previous step
    pub const BACK_KEYWORD: &str = "back";
}

/// User-facing notices shown by the onboarding flow
pub mod messages {
    /// Step 1 blocked on a blank field
    pub const MISSING_PERSONAL_INFO: &str = "Please fill in all personal information";
    /// Step 2 blocked on a blank selection
    pub const MISSING_GOALS: &str = "Please select your activity level and goal";
    /// Shown once the profile service accepts the profile
    pub const PROFILE_CREATED: &str =
        "Profile created successfully! Your personalized meal plan is being generated.";
    /// Shown alongside the calculated targets on the review step
    pub const TARGETS_EXPLAINER: &str = "Based on your information, we've calculated your daily nutritional needs. These will be used to generate your personalized meal plans.";
}

/// Input sanity bounds for profile fields
pub mod limits {
    /// Maximum accepted age in years
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Maximum accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Maximum accepted weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
}
