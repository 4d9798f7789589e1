// ABOUTME: Re-exports command modules for the calorie-craft CLI
// ABOUTME: Provides the estimate and onboard commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod estimate;
pub mod onboard;
