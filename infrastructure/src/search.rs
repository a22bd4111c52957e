use crate::config::SearchSettings;
use anyhow::{anyhow, Context};
use domain::models::UNKNOWN_USER;
use domain::ports::DocumentRetriever;
use domain::{Document, Question};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::types::Result;
use std::sync::Arc;
use tracing::debug;

pub const SEARCH_API_VERSION: &str = "2023-11-01";
pub const TOP_K: usize = 8;
pub const SEMANTIC_CONFIGURATION: &str = "default";
pub const VECTOR_FIELD: &str = "content_vector";
pub const SELECT_FIELDS: &str = "content,user_name,message_time";

/// Hybrid query body. Field order and the flat `vector`/`vectorFields` pair
/// are what the index has been queried with so far; keep them as they are.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    search: &'a str,
    query_type: &'a str,
    semantic_configuration: &'a str,
    top: usize,
    vector: &'a [f64],
    vector_fields: &'a str,
    select: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    value: Option<Vec<SearchHit>>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    user_name: Option<Value>,
    #[serde(default)]
    message_time: Option<Value>,
}

impl SearchHit {
    fn into_document(self) -> Document {
        Document::new(
            field_text(self.content).unwrap_or_default(),
            field_text(self.user_name).unwrap_or_else(|| UNKNOWN_USER.to_string()),
            field_text(self.message_time).unwrap_or_default(),
        )
    }
}

fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Index schema as returned by the service, trimmed to what we print.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<IndexField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub searchable: Option<bool>,
    #[serde(default)]
    pub retrievable: Option<bool>,
    #[serde(default)]
    pub dimensions: Option<u32>,
}

#[derive(Clone)]
pub struct AzureSearchClient {
    client: Arc<Client>,
    settings: SearchSettings,
}

impl AzureSearchClient {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            client: Arc::new(Client::new()),
            settings,
        }
    }

    fn search_url(&self) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.settings.endpoint, self.settings.index, SEARCH_API_VERSION
        )
    }

    fn index_url(&self) -> String {
        format!(
            "{}/indexes/{}?api-version={}",
            self.settings.endpoint, self.settings.index, SEARCH_API_VERSION
        )
    }

    pub async fn hybrid_search(&self, question: &str, vector: &[f64]) -> Result<Vec<Document>> {
        let request = SearchRequest {
            search: question,
            query_type: "semantic",
            semantic_configuration: SEMANTIC_CONFIGURATION,
            top: TOP_K,
            vector,
            vector_fields: VECTOR_FIELD,
            select: SELECT_FIELDS,
        };
        let response = self
            .client
            .post(self.search_url())
            .header("api-key", &self.settings.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed contacting Azure Search")?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(anyhow!("Azure Search returned {}: {}", status, body));
        }

        let raw: Value = serde_json::from_str(&body).context("Malformed search response")?;
        if !raw.is_object() {
            return Err(anyhow!("Search response is not a JSON object: {}", body));
        }
        let parsed: SearchResponse =
            serde_json::from_value(raw).context("Malformed search response")?;
        // `"value": null` is an empty result, same as a missing key.
        let hits = parsed.value.unwrap_or_default();
        debug!(hits = hits.len(), index = %self.settings.index, "search complete");
        Ok(hits.into_iter().map(SearchHit::into_document).collect())
    }

    pub async fn describe_index(&self) -> Result<IndexDefinition> {
        let response = self
            .client
            .get(self.index_url())
            .header("api-key", &self.settings.api_key)
            .send()
            .await
            .context("Failed contacting Azure Search")?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(anyhow!("Azure Search returned {}: {}", status, body));
        }
        serde_json::from_str(&body).context("Malformed index definition")
    }
}

impl DocumentRetriever for AzureSearchClient {
    async fn retrieve(&self, question: &Question, vector: &[f64]) -> Result<Vec<Document>> {
        self.hybrid_search(question.as_str(), vector).await
    }
}
