use std::sync::Arc;

use crate::application::ports::{BlobStore, Deriver};
use crate::application::services::DocumentPipeline;
use crate::presentation::config::Settings;

pub struct AppState<B, D>
where
    B: BlobStore,
    D: Deriver,
{
    pub pipeline: Arc<DocumentPipeline<B>>,
    pub deriver: Arc<D>,
    pub settings: Settings,
}

impl<B, D> Clone for AppState<B, D>
where
    B: BlobStore,
    D: Deriver,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            deriver: Arc::clone(&self.deriver),
            settings: self.settings.clone(),
        }
    }
}
