use crate::error::RagError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_USER: &str = "Unknown";

/// Embedding of a single question. Produced once, consumed by one search.
pub type QueryVector = Vec<f64>;

/// A validated, trimmed, non-empty question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(raw: &str) -> Result<Self, RagError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RagError::InvalidInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message retrieved from the search index, in the order the service ranked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub user_name: String,
    pub message_time: String,
}

impl Document {
    pub fn new(
        content: impl Into<String>,
        user_name: impl Into<String>,
        message_time: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            user_name: user_name.into(),
            message_time: message_time.into(),
        }
    }

    /// Attribution header followed by the message body.
    pub fn render(&self) -> String {
        format!("[{} @ {}]\n{}", self.user_name, self.message_time, self.content)
    }
}
