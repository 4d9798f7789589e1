// ABOUTME: Profile submission contract used at the end of onboarding
// ABOUTME: Defines the ProfileSubmitter trait and re-exports the HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use calorie_craft_core::errors::AppResult;
use calorie_craft_core::models::{Profile, ProfileReceipt};

/// HTTP client for the profile service
pub mod http_client;

pub use http_client::HttpProfileSubmitter;

/// Destination for completed onboarding profiles
#[async_trait]
pub trait ProfileSubmitter: Send + Sync {
    /// Submit a completed profile
    ///
    /// # Errors
    ///
    /// `ExternalServiceUnavailable` when the service cannot be reached, `ExternalServiceError`
    /// when it rejects the profile
    async fn submit(&self, profile: &Profile) -> AppResult<ProfileReceipt>;
}
