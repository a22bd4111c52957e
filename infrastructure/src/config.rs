use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub endpoint: String,
    pub api_key: String,
    pub index: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingSettings {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
}

/// Everything needed to reach the three Azure services. Read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub search: SearchSettings,
    pub chat: ChatSettings,
    pub embedding: EmbeddingSettings,
}

impl Config {
    /// Load from the process environment, after merging a `.env` file if present.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("missing required environment variable {}", key))
        };
        let endpoint = |key: &str| -> Result<String> {
            Ok(required(key)?.trim_end_matches('/').to_string())
        };

        Ok(Self {
            search: SearchSettings {
                endpoint: endpoint("AZURE_SEARCH_ENDPOINT")?,
                api_key: required("AZURE_SEARCH_API_KEY")?,
                index: required("AZURE_SEARCH_INDEX")?,
            },
            chat: ChatSettings {
                endpoint: endpoint("AZURE_OPENAI_ENDPOINT")?,
                api_key: required("AZURE_OPENAI_API_KEY")?,
                api_version: required("AZURE_OPENAI_API_VERSION")?,
                deployment: required("AZURE_OPENAI_CHAT_MODEL")?,
            },
            embedding: EmbeddingSettings {
                endpoint: endpoint("AZURE_OPENAI_EMB_ENDPOINT")?,
                api_key: required("AZURE_OPENAI_EMB_KEY")?,
                api_version: required("AZURE_OPENAI_EMB_API_VERSION")?,
                deployment: required("AZURE_OPENAI_EMB_DEPLOYMENT")?,
            },
        })
    }
}
