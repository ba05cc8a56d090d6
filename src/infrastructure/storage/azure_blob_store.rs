use async_trait::async_trait;
use object_store::azure::{AzureConfigKey, MicrosoftAzureBuilder};
use object_store::path::Path as StorePath;
use object_store::{Attribute, ObjectStore};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{BlobMetadata, BlobReference};

/// Azure Blob Storage adapter. Container clients are cheap to build, so one
/// is constructed per fetch from the reference's container; pre-signed
/// references authenticate with their embedded SAS token instead of the
/// account key.
pub struct AzureBlobStore {
    account: String,
    access_key: String,
}

impl AzureBlobStore {
    pub fn new(account: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            access_key: access_key.into(),
        }
    }

    fn container_client(
        &self,
        reference: &BlobReference,
    ) -> Result<impl ObjectStore, BlobStoreError> {
        let mut builder = MicrosoftAzureBuilder::new()
            .with_account(&self.account)
            .with_container_name(&reference.container);

        builder = match &reference.sas_token {
            Some(sas) => builder.with_config(AzureConfigKey::SasKey, sas.as_str()),
            None => builder.with_access_key(self.access_key.as_str()),
        };

        builder
            .build()
            .map_err(|e| BlobStoreError::Transport(e.to_string()))
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    #[tracing::instrument(skip(self), fields(container = %reference.container, blob = %reference.name))]
    async fn fetch(
        &self,
        reference: &BlobReference,
    ) -> Result<(Vec<u8>, BlobMetadata), BlobStoreError> {
        let store = self.container_client(reference)?;
        let path = StorePath::from(reference.name.as_str());

        let result = store.get(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => {
                BlobStoreError::NotFound(reference.raw_input.clone())
            }
            other => BlobStoreError::Transport(other.to_string()),
        })?;

        let content_type = result
            .attributes
            .get(&Attribute::ContentType)
            .map(|v| v.to_string());
        let meta = result.meta.clone();

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::Transport(e.to_string()))?;

        tracing::info!(bytes = bytes.len(), "blob downloaded");

        let metadata = BlobMetadata {
            content_type,
            size: meta.size as u64,
            last_modified: meta.last_modified,
            name: reference.name.clone(),
        };

        Ok((bytes.to_vec(), metadata))
    }
}
