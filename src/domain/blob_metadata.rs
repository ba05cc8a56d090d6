use chrono::{DateTime, Utc};
use serde::Serialize;

/// Blob properties reported by the store, echoed back to callers as
/// `file_properties` and consulted by format detection.
#[derive(Debug, Clone, Serialize)]
pub struct BlobMetadata {
    pub content_type: Option<String>,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub name: String,
}
