use async_trait::async_trait;

use crate::application::ports::{
    Amounts, ContactInfo, DerivationError, Deriver, EntityNames, KeywordSet, SentimentAnalysis,
    StructuredData, Summary, Topic, TopicSet, Translation,
};

/// Canned-response deriver for tests.
pub struct MockDeriver;

#[async_trait]
impl Deriver for MockDeriver {
    async fn summarize(&self, text: &str) -> Result<Summary, DerivationError> {
        let summary = "A short summary of the document.".to_string();
        Ok(Summary {
            original_length: text.chars().count(),
            summary_length: summary.chars().count(),
            summary,
        })
    }

    async fn analyze_sentiment(&self, _text: &str) -> Result<SentimentAnalysis, DerivationError> {
        Ok(SentimentAnalysis {
            sentiment: "positive".to_string(),
            confidence: 0.9,
            explanation: "The text reads as favorable.".to_string(),
        })
    }

    async fn extract_keywords(&self, _text: &str) -> Result<KeywordSet, DerivationError> {
        Ok(KeywordSet {
            keywords: vec!["alpha".to_string(), "beta".to_string()],
        })
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<Translation, DerivationError> {
        let translated_text = format!("[{target_language}] {text}");
        Ok(Translation {
            original_length: text.chars().count(),
            translated_length: translated_text.chars().count(),
            translated_text,
            source_language: "auto-detected".to_string(),
            target_language: target_language.to_string(),
        })
    }

    async fn structure_data(&self, _text: &str) -> Result<StructuredData, DerivationError> {
        Ok(StructuredData {
            names: EntityNames {
                people: vec!["Ada Lovelace".to_string()],
                organizations: vec![],
                locations: vec![],
            },
            dates: vec!["2026-01-01".to_string()],
            amounts: Amounts::default(),
            contact_info: ContactInfo::default(),
            key_entities: vec!["Ada Lovelace".to_string()],
        })
    }

    async fn detect_topics(&self, _text: &str) -> Result<TopicSet, DerivationError> {
        Ok(TopicSet {
            topics: vec![Topic {
                name: "General".to_string(),
                description: "General discussion.".to_string(),
                confidence: 0.8,
            }],
        })
    }
}

/// Deriver whose every operation fails, for exercising the 500-class paths.
pub struct FailingDeriver;

#[async_trait]
impl Deriver for FailingDeriver {
    async fn summarize(&self, _text: &str) -> Result<Summary, DerivationError> {
        Err(DerivationError::ApiRequestFailed("provider down".to_string()))
    }

    async fn analyze_sentiment(&self, _text: &str) -> Result<SentimentAnalysis, DerivationError> {
        Err(DerivationError::ApiRequestFailed("provider down".to_string()))
    }

    async fn extract_keywords(&self, _text: &str) -> Result<KeywordSet, DerivationError> {
        Err(DerivationError::ApiRequestFailed("provider down".to_string()))
    }

    async fn translate(
        &self,
        _text: &str,
        _target_language: &str,
    ) -> Result<Translation, DerivationError> {
        Err(DerivationError::ApiRequestFailed("provider down".to_string()))
    }

    async fn structure_data(&self, _text: &str) -> Result<StructuredData, DerivationError> {
        Err(DerivationError::ApiRequestFailed("provider down".to_string()))
    }

    async fn detect_topics(&self, _text: &str) -> Result<TopicSet, DerivationError> {
        Err(DerivationError::ApiRequestFailed("provider down".to_string()))
    }
}
