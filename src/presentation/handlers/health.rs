use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Document Derivation API";

pub const TASK_ENDPOINTS: &[&str] = &[
    "/summarize",
    "/sentiment",
    "/extract-keywords",
    "/translate",
    "/structure-data",
    "/detect-topics",
];

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub endpoints: Vec<String>,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            endpoints: TASK_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }),
    )
}
