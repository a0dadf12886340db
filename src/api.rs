//! JSON API handlers
//!
//! Request parsing and response formatting for the HTTP endpoints,
//! separated from socket handling so the whole surface is testable
//! without a listener.

use serde::Deserialize;

use crate::hal::gpio::OutputLine;
use crate::switch::SwitchService;

/// Body of `POST /api/toggle`
#[derive(Debug, Clone, Copy, Deserialize)]
struct ToggleRequest {
    id: i64,
}

/// A fully-formed HTTP reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Value of the `Content-Type` header
    pub content_type: &'static str,
    /// Response body
    pub body: String,
}

impl ApiResponse {
    fn json(value: &impl serde::Serialize) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status: 200,
                content_type: "application/json",
                body,
            },
            Err(err) => {
                tracing::error!(%err, "response serialization failed");
                Self::text(500, "Internal error")
            }
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_owned(),
        }
    }
}

/// Serve the HTML control page (`GET /`)
#[must_use]
pub fn index(page: &str) -> ApiResponse {
    ApiResponse {
        status: 200,
        content_type: "text/html; charset=utf-8",
        body: page.to_owned(),
    }
}

/// Report the current selection vector (`GET /api/state`)
#[must_use]
pub fn state<L: OutputLine>(service: &SwitchService<L>) -> ApiResponse {
    ApiResponse::json(&service.states())
}

/// Toggle one channel and answer with the new vector (`POST /api/toggle`)
///
/// A body that does not parse as `{"id": <int>}` is a 400 `Invalid
/// request`; an out-of-range id is a 400 carrying the selector's error
/// text, with the vector untouched.
pub fn toggle<L: OutputLine>(service: &SwitchService<L>, body: &str) -> ApiResponse {
    let Ok(request) = serde_json::from_str::<ToggleRequest>(body) else {
        tracing::debug!(body, "rejected malformed toggle request");
        return invalid_request();
    };

    match service.toggle(request.id) {
        Ok(states) => ApiResponse::json(&states),
        Err(err) => ApiResponse::text(400, &err.to_string()),
    }
}

/// Reply for a body that could not be read or parsed
#[must_use]
pub fn invalid_request() -> ApiResponse {
    ApiResponse::text(400, "Invalid request")
}

/// Reply for `/api/toggle` hit with anything but POST
#[must_use]
pub fn method_not_allowed() -> ApiResponse {
    ApiResponse::text(405, "Method not allowed")
}

/// Reply for paths outside the API surface
#[must_use]
pub fn not_found() -> ApiResponse {
    ApiResponse::text(404, "Not found")
}
