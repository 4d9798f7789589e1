// ABOUTME: Request tracing helpers for the HTTP service
// ABOUTME: Builds one span per request carrying a request id for log correlation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::Request;
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header clients may use to supply their own correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id from `x-request-id`, or a freshly generated one
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(
            || format!("req_{}", Uuid::new_v4().simple()),
            ToOwned::to_owned,
        )
}

/// Span used by `TraceLayer` for every request
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}
