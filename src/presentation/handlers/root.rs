use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

use super::health::SERVICE_NAME;

/// API description document served at `/`.
pub async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "description": "REST API deriving summaries, sentiment, keywords, translations, \
                        structured data and topics from documents in Azure Blob Storage",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "summarize": "/summarize",
            "sentiment": "/sentiment",
            "extract_keywords": "/extract-keywords",
            "translate": "/translate",
            "structure_data": "/structure-data",
            "detect_topics": "/detect-topics",
        },
        "authentication": "Each endpoint requires X-API-Key header with endpoint-specific API key",
        "documentation": {
            "file_path_format": "container/filename.ext or full blob URL",
            "supported_formats": ["PDF", "TXT", "MD", "CSV", "JSON", "XML"],
            "required_headers": ["X-API-Key", "Content-Type: application/json"],
        },
    }))
}
