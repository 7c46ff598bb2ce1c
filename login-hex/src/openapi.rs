//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use login_types::dto::{ErrorResponse, LoginRequest, LoginResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Verify a username/password pair
#[utoipa::path(
    post,
    path = "/login",
    tag = "login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Store answered; `success` tells whether the pair matched", body = LoginResponse),
        (status = 400, description = "Body is not a JSON object of optional strings", body = ErrorResponse),
        (status = 503, description = "Credential store unreachable or lookup timed out", body = ErrorResponse)
    )
)]
async fn login() {}

/// OpenAPI documentation for the Login API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Credential Verification Service API",
        version = "1.0.0",
        description = "Checks a username/password pair against stored user records.\n\nA failed match is a normal `200` answer with `{\"success\": false}`; malformed bodies and store outages use distinct error statuses.",
        license(name = "MIT"),
    ),
    paths(health, login),
    components(schemas(LoginRequest, LoginResponse, ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "login", description = "Credential verification"),
    )
)]
pub struct ApiDoc;
