// ABOUTME: HTTP middleware for request tracing and CORS
// ABOUTME: Layers applied to every route of the Calorie Craft service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{make_request_span, request_id, REQUEST_ID_HEADER};
