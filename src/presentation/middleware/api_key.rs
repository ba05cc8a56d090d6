use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::presentation::config::AuthSettings;
use crate::presentation::envelope::ApiError;

const API_KEY_HEADER: &str = "x-api-key";
const BEARER_PREFIX: &str = "Bearer ";

/// Require the endpoint-specific API key before any downstream work. The
/// key is accepted in `X-API-Key` or as a bearer token in `Authorization`;
/// the bearer prefix is stripped before comparison.
pub async fn require_api_key(
    State(auth): State<AuthSettings>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let Some(expected) = auth.key_for(&path) else {
        tracing::error!(path = %path, "no API key configured for endpoint");
        return ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Endpoint not configured",
            "This endpoint is not properly configured",
        )
        .into_response();
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .or_else(|| request.headers().get(axum::http::header::AUTHORIZATION))
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix(BEARER_PREFIX).unwrap_or(v));

    match provided {
        None => {
            tracing::warn!(path = %path, "missing API key");
            ApiError::new(
                StatusCode::UNAUTHORIZED,
                "API key required",
                "Please provide API key in X-API-Key header or Authorization header",
            )
            .into_response()
        }
        Some(key) if key != expected => {
            tracing::warn!(path = %path, "invalid API key");
            ApiError::new(
                StatusCode::FORBIDDEN,
                "Invalid API key",
                "The provided API key is not valid for this endpoint",
            )
            .into_response()
        }
        Some(_) => next.run(request).await,
    }
}
