use domain::context::assemble_context;
use domain::ports::{CompletionProvider, DocumentRetriever, EmbeddingProvider};
use domain::prompt::Prompt;
use domain::{Question, RagError};
use shared::telemetry::Telemetry;
use tracing::{info, warn};

/// Result of one successful question: the answer plus the grounding it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct RagAnswer {
    pub answer: String,
    pub context: String,
    pub documents: usize,
}

/// Embed → search → assemble context → complete, one question at a time.
///
/// Holds no per-request state; every call to [`RagService::query`] is independent.
pub struct RagService<E, R, C> {
    embedder: E,
    retriever: R,
    completer: C,
}

impl<E, R, C> RagService<E, R, C>
where
    E: EmbeddingProvider,
    R: DocumentRetriever,
    C: CompletionProvider,
{
    pub fn new(embedder: E, retriever: R, completer: C) -> Self {
        Self {
            embedder,
            retriever,
            completer,
        }
    }

    pub async fn query(&self, raw_question: &str) -> Result<RagAnswer, RagError> {
        let question = Question::new(raw_question)?;
        let total = Telemetry::new();

        let timer = Telemetry::new();
        let vector = self
            .embedder
            .embed(question.as_str())
            .await
            .map_err(|e| stage_failed(RagError::Embedding(e)))?;
        info!(dimensions = vector.len(), elapsed_ms = timer.elapsed_ms() as u64, "question embedded");

        let timer = Telemetry::new();
        let documents = self
            .retriever
            .retrieve(&question, &vector)
            .await
            .map_err(|e| stage_failed(RagError::Search(e)))?;
        info!(documents = documents.len(), elapsed_ms = timer.elapsed_ms() as u64, "documents retrieved");

        let context = assemble_context(&documents);
        let prompt = Prompt::build(&context, &question);

        let timer = Telemetry::new();
        let answer = self
            .completer
            .complete(&prompt)
            .await
            .map_err(|e| stage_failed(RagError::Completion(e)))?;
        info!(
            elapsed_ms = timer.elapsed_ms() as u64,
            total_ms = total.elapsed_ms() as u64,
            "answer generated"
        );

        Ok(RagAnswer {
            answer: answer.trim().to_string(),
            context,
            documents: documents.len(),
        })
    }
}

fn stage_failed(err: RagError) -> RagError {
    warn!(stage = err.stage(), error = %err, "pipeline stopped");
    err
}
