mod blob_store;
mod deriver;

pub use blob_store::{BlobStore, BlobStoreError};
pub use deriver::{
    Amounts, ContactInfo, DerivationError, Deriver, EntityNames, KeywordSet, SentimentAnalysis,
    StructuredData, Summary, Topic, TopicSet, Translation,
};
