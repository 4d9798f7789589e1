// ABOUTME: Core types and constants for the Calorie Craft onboarding platform
// ABOUTME: Foundation crate with error handling, profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Craft Core
//!
//! Foundation crate providing shared types and constants for Calorie Craft. This crate is
//! designed to change infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Onboarding profile and nutrition target models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Profile`, `ActivityLevel`, `Goal`, `NutritionTargets`)
pub mod models;
