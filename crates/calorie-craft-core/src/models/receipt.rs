// ABOUTME: Acknowledgement returned by the profile service after accepting a profile
// ABOUTME: Carries the assigned id, receipt time, and the server-computed targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NutritionTargets;

/// Profile service acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReceipt {
    /// Identifier assigned to the accepted profile
    pub profile_id: Uuid,
    /// When the service accepted the profile
    pub received_at: DateTime<Utc>,
    /// Targets recomputed by the service
    pub targets: NutritionTargets,
    /// User-facing confirmation
    pub message: String,
}
