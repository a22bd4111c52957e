//! Seams to the three external services the pipeline talks to.

use crate::models::{Document, QueryVector, Question};
use crate::prompt::Prompt;
use shared::types::Result;
use std::future::Future;

pub trait EmbeddingProvider {
    fn embed(&self, text: &str) -> impl Future<Output = Result<QueryVector>> + Send;
}

pub trait DocumentRetriever {
    /// Hybrid lookup: the raw question text and its vector go out in one request.
    fn retrieve(
        &self,
        question: &Question,
        vector: &[f64],
    ) -> impl Future<Output = Result<Vec<Document>>> + Send;
}

pub trait CompletionProvider {
    fn complete(&self, prompt: &Prompt) -> impl Future<Output = Result<String>> + Send;
}
