use async_trait::async_trait;

use crate::domain::{BlobMetadata, BlobReference};

/// Read side of the blob storage service.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Retrieve the raw bytes and properties of the referenced blob.
    async fn fetch(
        &self,
        reference: &BlobReference,
    ) -> Result<(Vec<u8>, BlobMetadata), BlobStoreError>;
}

/// A missing blob is kept distinct from transport failures so the endpoint
/// layer can answer 404 for absent documents and 500 for everything else.
#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("blob not found: {0}")]
    NotFound(String),
    #[error("blob fetch failed: {0}")]
    Transport(String),
}
