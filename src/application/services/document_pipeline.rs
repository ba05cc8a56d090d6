use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{BlobMetadata, BlobReference, DocumentKind, ExtractedText, InvalidReference};
use crate::infrastructure::text_processing::{ExtractionError, extract_text};

/// The fetch/sniff/extract/limit sequence shared by every task endpoint.
/// Task-specific behavior is limited to the character budget passed in.
pub struct DocumentPipeline<B>
where
    B: BlobStore,
{
    blob_store: Arc<B>,
}

/// Everything a derivation task needs about the requested document.
#[derive(Debug, Clone)]
pub struct PreparedDocument {
    pub reference: BlobReference,
    pub properties: BlobMetadata,
    pub text: ExtractedText,
}

impl<B> DocumentPipeline<B>
where
    B: BlobStore,
{
    pub fn new(blob_store: Arc<B>) -> Self {
        Self { blob_store }
    }

    #[tracing::instrument(skip(self), fields(file_path = %file_path))]
    pub async fn prepare(
        &self,
        file_path: &str,
        max_chars: usize,
    ) -> Result<PreparedDocument, PipelineError> {
        let reference = BlobReference::resolve(file_path)?;

        let (content, properties) = self.blob_store.fetch(&reference).await?;

        tracing::debug!(
            container = %reference.container,
            blob = %reference.name,
            bytes = content.len(),
            "blob downloaded"
        );

        let kind = DocumentKind::detect(
            properties.content_type.as_deref(),
            Some(&properties.name),
            &content,
        );

        // PDF parsing is CPU-bound, keep it off the async runtime.
        let raw_text = tokio::task::spawn_blocking(move || extract_text(&content, kind))
            .await
            .map_err(|e| PipelineError::Internal(format!("extraction task failed: {e}")))??;

        if raw_text.trim().is_empty() {
            return Err(PipelineError::EmptyDocument);
        }

        let text = ExtractedText::within_budget(raw_text, max_chars);

        tracing::info!(
            container = %reference.container,
            blob = %reference.name,
            kind = ?kind,
            chars = text.content.chars().count(),
            was_truncated = text.was_truncated,
            "document prepared for derivation"
        );

        Ok(PreparedDocument {
            reference,
            properties,
            text,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid file path: {0}")]
    InvalidReference(#[from] InvalidReference),
    #[error(transparent)]
    Storage(#[from] BlobStoreError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("document contains no text content")]
    EmptyDocument,
    #[error("{0}")]
    Internal(String),
}
