use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{
    DerivationError, Deriver, KeywordSet, SentimentAnalysis, StructuredData, Summary, TopicSet,
    Translation,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// OpenAI chat-completions adapter. One provider call per operation, no
/// internal retry; every failure mode is folded into `DerivationError` so
/// nothing past this boundary panics or sees a transport error.
pub struct OpenAiDeriver {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiDeriver {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn chat(
        &self,
        prompt: String,
        max_tokens: u32,
        temperature: f32,
        json_reply: bool,
    ) -> Result<String, DerivationError> {
        let mut body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        if json_reply {
            body["response_format"] = json!({ "type": "json_object" });
        }

        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DerivationError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DerivationError::ApiRequestFailed(format!(
                "provider returned {status}: {text}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| DerivationError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DerivationError::InvalidResponse("reply carried no content".to_string()))
    }

    fn parse_json_reply<T: serde::de::DeserializeOwned>(
        reply: &str,
    ) -> Result<T, DerivationError> {
        serde_json::from_str(reply).map_err(|e| {
            tracing::error!(raw_reply = %reply, "failed to parse structured reply");
            DerivationError::InvalidResponse(e.to_string())
        })
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl Deriver for OpenAiDeriver {
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn summarize(&self, text: &str) -> Result<Summary, DerivationError> {
        let prompt = format!(
            "Please summarize the following document into a concise paragraph that \
             captures the main points and key information:\n\n{text}\n\n\
             Provide a clear, informative summary that maintains the essential details \
             while being significantly shorter than the original."
        );

        let summary = self.chat(prompt, 500, 0.3, false).await?.trim().to_string();

        Ok(Summary {
            original_length: text.chars().count(),
            summary_length: summary.chars().count(),
            summary,
        })
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis, DerivationError> {
        let prompt = format!(
            "Analyze the sentiment of the following text and provide:\n\
             1. Overall sentiment (positive, negative, or neutral)\n\
             2. Confidence score (0.0 to 1.0)\n\
             3. Brief explanation of the sentiment analysis\n\n\
             Text to analyze:\n{text}\n\n\
             Respond in JSON format with the following structure:\n\
             {{\"sentiment\": \"positive/negative/neutral\", \"confidence\": 0.85, \
             \"explanation\": \"Brief explanation of the sentiment analysis\"}}"
        );

        let reply = self.chat(prompt, 300, 0.1, true).await?;
        Self::parse_json_reply(&reply)
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn extract_keywords(&self, text: &str) -> Result<KeywordSet, DerivationError> {
        let prompt = format!(
            "Extract the most important keywords and key phrases from the following text.\n\
             Focus on:\n\
             - Important nouns and proper nouns\n\
             - Key concepts and themes\n\
             - Technical terms\n\
             - Names of people, places, organizations\n\n\
             Text to analyze:\n{text}\n\n\
             Respond in JSON format with a list of keywords:\n\
             {{\"keywords\": [\"keyword1\", \"keyword2\", \"keyword3\"]}}\n\n\
             Limit to the top 15 most important keywords."
        );

        let reply = self.chat(prompt, 400, 0.2, true).await?;
        Self::parse_json_reply(&reply)
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count(), target_language))]
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<Translation, DerivationError> {
        let prompt = format!(
            "Translate the following text to {target_language}.\n\
             Maintain the original meaning, tone, and structure as much as possible.\n\n\
             Text to translate:\n{text}\n\n\
             Provide only the translated text without any additional commentary."
        );

        let translated_text = self.chat(prompt, 2000, 0.1, false).await?.trim().to_string();

        Ok(Translation {
            original_length: text.chars().count(),
            translated_length: translated_text.chars().count(),
            translated_text,
            source_language: "auto-detected".to_string(),
            target_language: target_language.to_string(),
        })
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn structure_data(&self, text: &str) -> Result<StructuredData, DerivationError> {
        let prompt = format!(
            "Extract structured data from the following text. Look for and extract:\n\
             - Names (people, organizations, locations)\n\
             - Dates and times\n\
             - Numbers and amounts (monetary, quantities, percentages)\n\
             - Contact information (emails, phone numbers, addresses)\n\
             - Key entities and their relationships\n\n\
             Text to analyze:\n{text}\n\n\
             Respond in JSON format with the following structure:\n\
             {{\"names\": {{\"people\": [], \"organizations\": [], \"locations\": []}}, \
             \"dates\": [], \
             \"amounts\": {{\"monetary\": [], \"quantities\": [], \"numbers\": []}}, \
             \"contact_info\": {{\"emails\": [], \"phones\": [], \"addresses\": []}}, \
             \"key_entities\": []}}"
        );

        let reply = self.chat(prompt, 800, 0.1, true).await?;
        Self::parse_json_reply(&reply)
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn detect_topics(&self, text: &str) -> Result<TopicSet, DerivationError> {
        let prompt = format!(
            "Identify the primary topics and themes discussed in the following text.\n\
             Categorize the content and provide:\n\
             - Main topics (up to 8 topics)\n\
             - Brief description for each topic\n\
             - Confidence score for each topic (0.0 to 1.0)\n\n\
             Text to analyze:\n{text}\n\n\
             Respond in JSON format:\n\
             {{\"topics\": [{{\"name\": \"Topic Name\", \
             \"description\": \"Brief description of the topic\", \
             \"confidence\": 0.85}}]}}"
        );

        let reply = self.chat(prompt, 600, 0.2, true).await?;
        Self::parse_json_reply(&reply)
    }
}
