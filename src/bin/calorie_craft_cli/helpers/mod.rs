// ABOUTME: Re-exports helper modules for the calorie-craft CLI
// ABOUTME: Provides display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
