use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{BlobMetadata, BlobReference};

/// In-memory blob store for tests, keyed by `container/name`.
#[derive(Default)]
pub struct MockBlobStore {
    objects: HashMap<String, MockObject>,
}

struct MockObject {
    content: Vec<u8>,
    content_type: Option<String>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, path: &str, content: &[u8], content_type: Option<&str>) -> Self {
        self.objects.insert(
            path.to_string(),
            MockObject {
                content: content.to_vec(),
                content_type: content_type.map(String::from),
            },
        );
        self
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    async fn fetch(
        &self,
        reference: &BlobReference,
    ) -> Result<(Vec<u8>, BlobMetadata), BlobStoreError> {
        let key = format!("{}/{}", reference.container, reference.name);

        let object = self
            .objects
            .get(&key)
            .ok_or_else(|| BlobStoreError::NotFound(reference.raw_input.clone()))?;

        let metadata = BlobMetadata {
            content_type: object.content_type.clone(),
            size: object.content.len() as u64,
            last_modified: Utc::now(),
            name: reference.name.clone(),
        };

        Ok((object.content.clone(), metadata))
    }
}
