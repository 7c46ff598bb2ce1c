//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use login_types::{AppError, CredentialStore, ErrorResponse, LoginRequest, LoginResponse};

use crate::{ApiDoc, LoginService};

/// Application state shared across handlers.
pub struct AppState<S: CredentialStore> {
    pub service: LoginService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::MalformedRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::StoreUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Credential store unavailable".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Verify a credential pair.
///
/// Answers 200 with `{"success": bool}` whenever the store could be asked.
/// Bodies that are not a JSON object of optional strings are rejected with
/// 400 instead of reaching the store.
#[tracing::instrument(skip(state, payload))]
pub async fn login<S: CredentialStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!("Rejected login body: {}", rejection.body_text());
        AppError::MalformedRequest(rejection.body_text())
    })?;
    let req = LoginRequest::try_from(body).inspect_err(|e| {
        tracing::debug!("Rejected login body: {}", e);
    })?;

    let success = state.service.login(req).await?;
    Ok(Json(LoginResponse { success }))
}

/// OpenAPI document for this service.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
