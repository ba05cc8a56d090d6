use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// LLM-backed derivation operations. Each operation sends the normalized
/// text to the provider exactly once and parses the reply; provider and
/// parse failures surface as `DerivationError`, never as a panic.
#[async_trait]
pub trait Deriver: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<Summary, DerivationError>;

    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis, DerivationError>;

    async fn extract_keywords(&self, text: &str) -> Result<KeywordSet, DerivationError>;

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<Translation, DerivationError>;

    async fn structure_data(&self, text: &str) -> Result<StructuredData, DerivationError>;

    async fn detect_topics(&self, text: &str) -> Result<TopicSet, DerivationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DerivationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment: String,
    pub confidence: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSet {
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub original_length: usize,
    pub translated_length: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(default)]
    pub names: EntityNames,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub amounts: Amounts,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub key_entities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityNames {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Amounts {
    #[serde(default)]
    pub monetary: Vec<String>,
    #[serde(default)]
    pub quantities: Vec<String>,
    #[serde(default)]
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSet {
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub description: String,
    pub confidence: f64,
}
