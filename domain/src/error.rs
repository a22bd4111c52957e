use thiserror::Error;

/// Terminal failure of one question, tagged by the stage that produced it.
#[derive(Debug, Error)]
pub enum RagError {
    #[error("question is empty")]
    InvalidInput,

    #[error("embedding request failed: {0:#}")]
    Embedding(anyhow::Error),

    #[error("search request failed: {0:#}")]
    Search(anyhow::Error),

    #[error("completion request failed: {0:#}")]
    Completion(anyhow::Error),
}

impl RagError {
    /// Underlying cause, if the error came from an external call.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            RagError::InvalidInput => None,
            RagError::Embedding(e) | RagError::Search(e) | RagError::Completion(e) => Some(e),
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            RagError::InvalidInput => "input",
            RagError::Embedding(_) => "embedding",
            RagError::Search(_) => "search",
            RagError::Completion(_) => "completion",
        }
    }
}
