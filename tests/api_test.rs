use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use doclens::application::services::DocumentPipeline;
use doclens::infrastructure::llm::{FailingDeriver, MockDeriver};
use doclens::infrastructure::storage::MockBlobStore;
use doclens::presentation::config::{
    AuthSettings, LimitSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
    StorageSettings,
};
use doclens::presentation::{AppState, create_router};

const SAMPLE_REVIEW: &str = "The onboarding flow was smooth and support answered within minutes. \
                             I would happily recommend this service to colleagues.";

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        storage: StorageSettings {
            azure_account: "testaccount".to_string(),
            azure_access_key: "testkey".to_string(),
        },
        llm: LlmSettings {
            api_key: "test-key".to_string(),
            chat_model: "gpt-4o".to_string(),
        },
        auth: AuthSettings {
            summarize_key: "summarize-key-123".to_string(),
            sentiment_key: "sentiment-key-123".to_string(),
            keywords_key: "keywords-key-123".to_string(),
            translate_key: "translate-key-123".to_string(),
            structure_key: "structure-key-123".to_string(),
            topics_key: "topics-key-123".to_string(),
        },
        logging: LoggingSettings {
            level: "info".to_string(),
            enable_json: false,
        },
        limits: LimitSettings {
            max_text_chars: 100_000,
            translation_max_text_chars: 50_000,
        },
    }
}

fn test_blob_store() -> MockBlobStore {
    MockBlobStore::new()
        .with_object(
            "demo/sample-feedback.txt",
            SAMPLE_REVIEW.as_bytes(),
            Some("text/plain"),
        )
        .with_object("demo/empty.txt", b"   \n ", Some("text/plain"))
        .with_object("demo/broken.pdf", b"not a real pdf", Some("application/pdf"))
}

fn create_test_app() -> axum::Router {
    let pipeline = Arc::new(DocumentPipeline::new(Arc::new(test_blob_store())));

    let state = AppState {
        pipeline,
        deriver: Arc::new(MockDeriver),
        settings: test_settings(),
    };

    create_router(state)
}

fn create_failing_deriver_app() -> axum::Router {
    let pipeline = Arc::new(DocumentPipeline::new(Arc::new(test_blob_store())));

    let state = AppState {
        pipeline,
        deriver: Arc::new(FailingDeriver),
        settings: test_settings(),
    };

    create_router(state)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json_with_key(uri: &str, body: &str, key: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-api-key", key)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_lists_task_endpoints() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn given_root_request_when_get_then_returns_api_description() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["endpoints"]["summarize"], "/summarize");
}

#[tokio::test]
async fn given_no_api_key_when_summarize_then_returns_unauthorized() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json(
            "/summarize",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "API key required");
}

#[tokio::test]
async fn given_wrong_api_key_when_summarize_then_returns_forbidden() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "wrong-value",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid API key");
}

#[tokio::test]
async fn given_key_for_other_endpoint_when_summarize_then_returns_forbidden() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "sentiment-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn given_valid_key_when_summarize_then_returns_summary_envelope() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "summarize-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "success");
    assert!(!body["data"]["summary"].as_str().unwrap().is_empty());
    assert_eq!(
        body["data"]["original_length"].as_u64().unwrap() as usize,
        SAMPLE_REVIEW.chars().count()
    );
    assert_eq!(body["data"]["was_truncated"], false);
    assert_eq!(body["data"]["file_path"], "demo/sample-feedback.txt");
    assert_eq!(body["data"]["file_properties"]["name"], "sample-feedback.txt");
}

#[tokio::test]
async fn given_bearer_token_when_summarize_then_authenticates() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .header("content-type", "application/json")
                .header("authorization", "Bearer summarize-key-123")
                .body(Body::from(r#"{"file_path": "demo/sample-feedback.txt"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_missing_target_language_when_translate_then_returns_bad_request() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/translate",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "translate-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required fields");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("target_language")
    );
}

#[tokio::test]
async fn given_target_language_when_translate_then_echoes_language_fields() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/translate",
            r#"{"file_path": "demo/sample-feedback.txt", "target_language": "Hindi"}"#,
            "translate-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["target_language"], "Hindi");
    assert_eq!(body["data"]["source_language"], "auto-detected");
}

#[tokio::test]
async fn given_missing_blob_when_summarize_then_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "demo/absent.txt"}"#,
            "summarize-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "file_not_found");
}

#[tokio::test]
async fn given_path_without_separator_when_summarize_then_returns_invalid_file_path() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "no-separator"}"#,
            "summarize-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "invalid_file_path");
}

#[tokio::test]
async fn given_whitespace_only_document_when_summarize_then_returns_processing_error() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "demo/empty.txt"}"#,
            "summarize-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "processing_error");
}

#[tokio::test]
async fn given_corrupt_pdf_when_summarize_then_returns_processing_error() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "demo/broken.pdf"}"#,
            "summarize-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "processing_error");
    assert!(body["message"].as_str().unwrap().contains("corrupted"));
}

#[tokio::test]
async fn given_failing_provider_when_summarize_then_returns_task_failure_code() {
    let app = create_failing_deriver_app();

    let response = app
        .oneshot(post_json_with_key(
            "/summarize",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "summarize-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "summarization_failed");
}

#[tokio::test]
async fn given_get_method_when_summarize_then_returns_method_not_allowed() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/summarize")
                .header("x-api-key", "summarize-key-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "method_not_allowed");
}

#[tokio::test]
async fn given_unknown_route_when_requested_then_returns_json_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn given_keywords_request_when_valid_then_reports_keyword_count() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/extract-keywords",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "keywords-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let keywords = body["data"]["keywords"].as_array().unwrap();
    assert_eq!(body["data"]["keyword_count"].as_u64().unwrap() as usize, keywords.len());
}

#[tokio::test]
async fn given_topics_request_when_valid_then_reports_topic_shape() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/detect-topics",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "topics-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let topic = &body["data"]["topics"][0];
    assert!(topic["name"].is_string());
    assert!(topic["description"].is_string());
    let confidence = topic["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
}

#[tokio::test]
async fn given_structure_request_when_valid_then_returns_structured_sections() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json_with_key(
            "/structure-data",
            r#"{"file_path": "demo/sample-feedback.txt"}"#,
            "structure-key-123",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let structured = &body["data"]["structured_data"];
    assert!(structured["names"]["people"].is_array());
    assert!(structured["dates"].is_array());
    assert!(structured["contact_info"]["emails"].is_array());
    assert!(structured["key_entities"].is_array());
}

#[tokio::test]
async fn given_non_json_body_when_summarize_then_returns_invalid_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .header("x-api-key", "summarize-key-123")
                .body(Body::from("plain text"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "invalid_request");
}
