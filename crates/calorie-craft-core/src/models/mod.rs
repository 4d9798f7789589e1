// ABOUTME: Core data models for the onboarding flow
// ABOUTME: Re-exports profile and nutrition target types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daily nutrition targets
pub mod nutrition;
/// Onboarding profile, activity level, goal
pub mod profile;
/// Profile service acknowledgement
pub mod receipt;

pub use nutrition::NutritionTargets;
pub use profile::{ActivityLevel, Goal, Profile, ProfilePayload, Sex};
pub use receipt::ProfileReceipt;
