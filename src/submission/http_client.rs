// ABOUTME: reqwest-based client posting completed profiles to the profile service
// ABOUTME: Maps transport failures and non-2xx responses onto the unified error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use calorie_craft_core::constants::{endpoints, service_names};
use calorie_craft_core::errors::{AppError, AppResult, ErrorResponse};
use calorie_craft_core::models::{Profile, ProfileReceipt};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use super::ProfileSubmitter;
use crate::config::ClientConfig;

/// Submits profiles to `POST {server_url}/api/profiles`
#[derive(Debug, Clone)]
pub struct HttpProfileSubmitter {
    client: Client,
    profiles_url: String,
}

impl HttpProfileSubmitter {
    /// Create a submitter for the configured server
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();

        Self {
            client,
            profiles_url: format!(
                "{}{}",
                config.server_url.trim_end_matches('/'),
                endpoints::PROFILES
            ),
        }
    }

    /// Full URL profiles are posted to
    #[must_use]
    pub fn profiles_url(&self) -> &str {
        &self.profiles_url
    }
}

#[async_trait]
impl ProfileSubmitter for HttpProfileSubmitter {
    async fn submit(&self, profile: &Profile) -> AppResult<ProfileReceipt> {
        debug!(url = %self.profiles_url, "Submitting profile");

        let response = self
            .client
            .post(&self.profiles_url)
            .json(profile)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, url = %self.profiles_url, "Profile service unreachable");
                AppError::external_unavailable(service_names::PROFILE_SERVICE).with_source(e)
            })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let (server_code, message) = serde_json::from_str::<ErrorResponse>(&text).map_or_else(
                |_| (None, format!("HTTP {}", status.as_u16())),
                |body| (Some(body.error.code), body.error.message),
            );
            return Err(
                AppError::external_service(service_names::PROFILE_SERVICE, message).with_details(
                    json!({
                        "status": status.as_u16(),
                        "serverCode": server_code,
                    }),
                ),
            );
        }

        serde_json::from_str(&text).map_err(|e| {
            AppError::external_service(
                service_names::PROFILE_SERVICE,
                "Unexpected response body",
            )
            .with_source(e)
        })
    }
}
