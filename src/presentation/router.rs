use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{BlobStore, Deriver};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::envelope::ApiError;
use crate::presentation::handlers::{
    detect_topics_handler, extract_keywords_handler, health_handler, root_handler,
    sentiment_handler, structure_data_handler, summarize_handler, translate_handler,
};
use crate::presentation::middleware::require_api_key;
use crate::presentation::state::AppState;

pub fn create_router<B, D>(state: AppState<B, D>) -> Router
where
    B: BlobStore + 'static,
    D: Deriver + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Auth runs before field validation and the handler body; it is a
    // route layer so unknown paths still reach the JSON 404 fallback.
    let tasks = Router::new()
        .route("/summarize", post(summarize_handler::<B, D>))
        .route("/sentiment", post(sentiment_handler::<B, D>))
        .route("/extract-keywords", post(extract_keywords_handler::<B, D>))
        .route("/translate", post(translate_handler::<B, D>))
        .route("/structure-data", post(structure_data_handler::<B, D>))
        .route("/detect-topics", post(detect_topics_handler::<B, D>))
        .route_layer(middleware::from_fn_with_state(
            state.settings.auth.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(tasks)
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn not_found_handler() -> impl IntoResponse {
    ApiError::new(
        StatusCode::NOT_FOUND,
        "not_found",
        "The requested endpoint was not found",
    )
}

async fn method_not_allowed_handler() -> impl IntoResponse {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "method_not_allowed",
        "The request method is not allowed for this endpoint",
    )
}
