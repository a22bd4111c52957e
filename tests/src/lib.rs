//! Substitutable collaborators for pipeline tests. Each one counts its calls.

use anyhow::anyhow;
use domain::ports::{CompletionProvider, DocumentRetriever, EmbeddingProvider};
use domain::prompt::Prompt;
use domain::{Document, QueryVector, Question};
use shared::types::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockEmbedder {
    vector: QueryVector,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn returning(vector: QueryVector) -> Self {
        Self {
            vector,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            vector: Vec::new(),
            failure: Some(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for &MockEmbedder {
    async fn embed(&self, _text: &str) -> Result<QueryVector> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(self.vector.clone()),
        }
    }
}

pub struct MockRetriever {
    documents: Vec<Document>,
    failure: Option<String>,
    calls: AtomicUsize,
    seen_vectors: Mutex<Vec<Vec<f64>>>,
}

impl MockRetriever {
    pub fn returning(documents: Vec<Document>) -> Self {
        Self {
            documents,
            failure: None,
            calls: AtomicUsize::new(0),
            seen_vectors: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            documents: Vec::new(),
            failure: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            seen_vectors: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_vectors(&self) -> Vec<Vec<f64>> {
        self.seen_vectors.lock().unwrap().clone()
    }
}

impl DocumentRetriever for &MockRetriever {
    async fn retrieve(&self, _question: &Question, vector: &[f64]) -> Result<Vec<Document>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_vectors.lock().unwrap().push(vector.to_vec());
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(self.documents.clone()),
        }
    }
}

/// Completion double that either echoes the user prompt back or fails.
pub struct MockCompleter {
    failure: Option<String>,
    prompts: Mutex<Vec<Prompt>>,
}

impl MockCompleter {
    pub fn echoing() -> Self {
        Self {
            failure: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionProvider for &MockCompleter {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(prompt.user.content.clone()),
        }
    }
}
