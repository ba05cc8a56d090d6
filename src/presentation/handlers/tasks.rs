use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde_json::{Value, json};

use crate::application::ports::{BlobStore, Deriver};
use crate::application::services::PreparedDocument;
use crate::presentation::envelope::{self, ApiError};
use crate::presentation::state::AppState;

/// Pull the validated JSON body out of the extractor result; a missing or
/// non-JSON body is a 400, not axum's default rejection.
fn read_json(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(body) = payload.map_err(|_| {
        ApiError::bad_request("invalid_request", "Request must contain JSON data")
    })?;
    Ok(body)
}

fn require_fields(body: &Value, required: &[&str]) -> Result<(), ApiError> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| body.get(field).is_none())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(ApiError::bad_request(
        "Missing required fields",
        format!("The following fields are required: {}", missing.join(", ")),
    ))
}

fn field_str<'a>(body: &'a Value, field: &str) -> Result<&'a str, ApiError> {
    body.get(field).and_then(Value::as_str).ok_or_else(|| {
        ApiError::bad_request("invalid_request", format!("Field '{field}' must be a string"))
    })
}

/// The fetch/extract/limit prefix shared by every task handler: field
/// validation, then the document pipeline with the task's character budget.
async fn prepare<B, D>(
    state: &AppState<B, D>,
    body: &Value,
    required: &[&str],
    max_chars: usize,
) -> Result<(String, PreparedDocument), ApiError>
where
    B: BlobStore,
    D: Deriver,
{
    require_fields(body, required)?;
    let file_path = field_str(body, "file_path")?.to_string();

    let prepared = state.pipeline.prepare(&file_path, max_chars).await?;
    Ok((file_path, prepared))
}

pub async fn summarize_handler<B, D>(
    State(state): State<AppState<B, D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
    B: BlobStore + 'static,
    D: Deriver + 'static,
{
    let body = read_json(payload)?;
    let max_chars = state.settings.limits.max_text_chars;
    let (file_path, prepared) = prepare(&state, &body, &["file_path"], max_chars).await?;

    let result = state
        .deriver
        .summarize(&prepared.text.content)
        .await
        .map_err(|e| ApiError::derivation("summarization_failed", e))?;

    Ok(envelope::success(
        json!({
            "file_path": file_path,
            "file_properties": prepared.properties,
            "summary": result.summary,
            "original_length": result.original_length,
            "summary_length": result.summary_length,
            "was_truncated": prepared.text.was_truncated,
        }),
        "Document summarized successfully",
    ))
}

pub async fn sentiment_handler<B, D>(
    State(state): State<AppState<B, D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
    B: BlobStore + 'static,
    D: Deriver + 'static,
{
    let body = read_json(payload)?;
    let max_chars = state.settings.limits.max_text_chars;
    let (file_path, prepared) = prepare(&state, &body, &["file_path"], max_chars).await?;

    let result = state
        .deriver
        .analyze_sentiment(&prepared.text.content)
        .await
        .map_err(|e| ApiError::derivation("sentiment_analysis_failed", e))?;

    Ok(envelope::success(
        json!({
            "file_path": file_path,
            "file_properties": prepared.properties,
            "sentiment": result.sentiment,
            "confidence": result.confidence,
            "explanation": result.explanation,
            "was_truncated": prepared.text.was_truncated,
        }),
        "Sentiment analysis completed successfully",
    ))
}

pub async fn extract_keywords_handler<B, D>(
    State(state): State<AppState<B, D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
    B: BlobStore + 'static,
    D: Deriver + 'static,
{
    let body = read_json(payload)?;
    let max_chars = state.settings.limits.max_text_chars;
    let (file_path, prepared) = prepare(&state, &body, &["file_path"], max_chars).await?;

    let result = state
        .deriver
        .extract_keywords(&prepared.text.content)
        .await
        .map_err(|e| ApiError::derivation("keyword_extraction_failed", e))?;

    let keyword_count = result.keywords.len();

    Ok(envelope::success(
        json!({
            "file_path": file_path,
            "file_properties": prepared.properties,
            "keywords": result.keywords,
            "keyword_count": keyword_count,
            "was_truncated": prepared.text.was_truncated,
        }),
        "Keywords extracted successfully",
    ))
}

pub async fn translate_handler<B, D>(
    State(state): State<AppState<B, D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
    B: BlobStore + 'static,
    D: Deriver + 'static,
{
    let body = read_json(payload)?;
    require_fields(&body, &["file_path", "target_language"])?;
    let target_language = field_str(&body, "target_language")?.to_string();

    let max_chars = state.settings.limits.translation_max_text_chars;
    let (file_path, prepared) =
        prepare(&state, &body, &["file_path", "target_language"], max_chars).await?;

    let result = state
        .deriver
        .translate(&prepared.text.content, &target_language)
        .await
        .map_err(|e| ApiError::derivation("translation_failed", e))?;

    Ok(envelope::success(
        json!({
            "file_path": file_path,
            "file_properties": prepared.properties,
            "translated_text": result.translated_text,
            "source_language": result.source_language,
            "target_language": result.target_language,
            "original_length": result.original_length,
            "translated_length": result.translated_length,
            "was_truncated": prepared.text.was_truncated,
        }),
        "Document translated successfully",
    ))
}

pub async fn structure_data_handler<B, D>(
    State(state): State<AppState<B, D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
    B: BlobStore + 'static,
    D: Deriver + 'static,
{
    let body = read_json(payload)?;
    let max_chars = state.settings.limits.max_text_chars;
    let (file_path, prepared) = prepare(&state, &body, &["file_path"], max_chars).await?;

    let result = state
        .deriver
        .structure_data(&prepared.text.content)
        .await
        .map_err(|e| ApiError::derivation("data_structuring_failed", e))?;

    Ok(envelope::success(
        json!({
            "file_path": file_path,
            "file_properties": prepared.properties,
            "structured_data": result,
            "was_truncated": prepared.text.was_truncated,
        }),
        "Structured data extracted successfully",
    ))
}

pub async fn detect_topics_handler<B, D>(
    State(state): State<AppState<B, D>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
    B: BlobStore + 'static,
    D: Deriver + 'static,
{
    let body = read_json(payload)?;
    let max_chars = state.settings.limits.max_text_chars;
    let (file_path, prepared) = prepare(&state, &body, &["file_path"], max_chars).await?;

    let result = state
        .deriver
        .detect_topics(&prepared.text.content)
        .await
        .map_err(|e| ApiError::derivation("topic_detection_failed", e))?;

    let topic_count = result.topics.len();

    Ok(envelope::success(
        json!({
            "file_path": file_path,
            "file_properties": prepared.properties,
            "topics": result.topics,
            "topic_count": topic_count,
            "was_truncated": prepared.text.was_truncated,
        }),
        "Topics detected successfully",
    ))
}
