mod azure_blob_store;
mod mock_blob_store;

pub use azure_blob_store::AzureBlobStore;
pub use mock_blob_store::MockBlobStore;
