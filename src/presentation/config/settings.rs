use serde::Deserialize;

use crate::domain::{DEFAULT_MAX_CHARS, TRANSLATION_MAX_CHARS};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub auth: AuthSettings,
    pub logging: LoggingSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub azure_account: String,
    pub azure_access_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub chat_model: String,
}

/// Per-endpoint API keys; no shared master key.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub summarize_key: String,
    pub sentiment_key: String,
    pub keywords_key: String,
    pub translate_key: String,
    pub structure_key: String,
    pub topics_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_text_chars: usize,
    pub translation_max_text_chars: usize,
}

impl AuthSettings {
    /// The expected key for a task endpoint path, `None` for paths that
    /// carry no key (unknown or unprotected routes).
    pub fn key_for(&self, path: &str) -> Option<&str> {
        match path {
            "/summarize" => Some(&self.summarize_key),
            "/sentiment" => Some(&self.sentiment_key),
            "/extract-keywords" => Some(&self.keywords_key),
            "/translate" => Some(&self.translate_key),
            "/structure-data" => Some(&self.structure_key),
            "/detect-topics" => Some(&self.topics_key),
            _ => None,
        }
    }
}

impl Settings {
    /// Load configuration from the environment, with development defaults
    /// for everything except the Azure and provider credentials.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("HOST", "0.0.0.0"),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            storage: StorageSettings {
                azure_account: env_or("AZURE_STORAGE_ACCOUNT", ""),
                azure_access_key: env_or("AZURE_STORAGE_ACCESS_KEY", ""),
            },
            llm: LlmSettings {
                api_key: env_or("OPENAI_API_KEY", ""),
                chat_model: env_or("OPENAI_CHAT_MODEL", "gpt-4o"),
            },
            auth: AuthSettings {
                summarize_key: env_or("SUMMARIZE_API_KEY", "summarize-key-123"),
                sentiment_key: env_or("SENTIMENT_API_KEY", "sentiment-key-123"),
                keywords_key: env_or("KEYWORDS_API_KEY", "keywords-key-123"),
                translate_key: env_or("TRANSLATE_API_KEY", "translate-key-123"),
                structure_key: env_or("STRUCTURE_API_KEY", "structure-key-123"),
                topics_key: env_or("TOPICS_API_KEY", "topics-key-123"),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "info"),
                enable_json: env_or("LOG_FORMAT", "").to_lowercase() == "json",
            },
            limits: LimitSettings {
                max_text_chars: DEFAULT_MAX_CHARS,
                translation_max_text_chars: TRANSLATION_MAX_CHARS,
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
