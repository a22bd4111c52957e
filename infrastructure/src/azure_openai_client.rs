use crate::config::{ChatSettings, EmbeddingSettings};
use anyhow::{anyhow, Context};
use domain::message::Message;
use domain::ports::{CompletionProvider, EmbeddingProvider};
use domain::prompt::Prompt;
use domain::QueryVector;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;
use std::sync::Arc;
use tracing::debug;

pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f64>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Azure OpenAI data-plane client for the embedding and chat deployments.
#[derive(Clone)]
pub struct AzureOpenAiClient {
    client: Arc<Client>,
    chat: ChatSettings,
    embedding: EmbeddingSettings,
}

impl AzureOpenAiClient {
    pub fn new(chat: ChatSettings, embedding: EmbeddingSettings) -> Self {
        Self {
            client: Arc::new(Client::new()),
            chat,
            embedding,
        }
    }

    fn embeddings_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/embeddings?api-version={}",
            self.embedding.endpoint, self.embedding.deployment, self.embedding.api_version
        )
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.chat.endpoint, self.chat.deployment, self.chat.api_version
        )
    }

    pub async fn generate_embedding(&self, text: &str) -> Result<QueryVector> {
        let request = EmbeddingRequest {
            input: text,
            model: EMBEDDING_MODEL,
        };
        let response = self
            .client
            .post(self.embeddings_url())
            .header("api-key", &self.embedding.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed contacting Azure OpenAI embeddings")?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(anyhow!("Azure OpenAI embeddings returned {}: {}", status, body));
        }

        let parsed: EmbeddingResponse =
            serde_json::from_str(&body).context("Malformed embeddings response")?;
        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| anyhow!("Embeddings response contained no data"))?;
        debug!(dimensions = vector.len(), "embedding received");
        Ok(vector)
    }

    pub async fn generate_response(&self, prompt: &Prompt) -> Result<String> {
        let messages = prompt.messages();
        let request = ChatRequest {
            messages: &messages,
            temperature: prompt.temperature,
        };
        let response = self
            .client
            .post(self.chat_url())
            .header("api-key", &self.chat.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed contacting Azure OpenAI chat completions")?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(anyhow!("Azure OpenAI chat returned {}: {}", status, body));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).context("Malformed chat completion response")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow!("Chat completion returned no content"))?;
        Ok(content.trim().to_string())
    }
}

impl EmbeddingProvider for AzureOpenAiClient {
    async fn embed(&self, text: &str) -> Result<QueryVector> {
        self.generate_embedding(text).await
    }
}

impl CompletionProvider for AzureOpenAiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        self.generate_response(prompt).await
    }
}
