use application::rag_service::RagAnswer;
use domain::RagError;
use infrastructure::search::IndexDefinition;

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";
pub const EMBEDDING_ERROR_MARKER: &str = "❌ Embedding Error:";
pub const SEARCH_ERROR_MARKER: &str = "❌ Azure Search Error:";
pub const COMPLETION_ERROR_MARKER: &str = "❌ OpenAI Error:";

/// User-facing text for a failed question. Never fails itself.
pub fn render_error(err: &RagError) -> String {
    let marker = match err {
        RagError::InvalidInput => return EMPTY_QUESTION_MESSAGE.to_string(),
        RagError::Embedding(_) => EMBEDDING_ERROR_MARKER,
        RagError::Search(_) => SEARCH_ERROR_MARKER,
        RagError::Completion(_) => COMPLETION_ERROR_MARKER,
    };
    match err.cause() {
        Some(cause) => format!("{} {:#}", marker, cause),
        None => marker.to_string(),
    }
}

/// The final Answer string: model text on success, rendered error otherwise.
pub fn render_answer(result: &Result<RagAnswer, RagError>) -> String {
    match result {
        Ok(answer) => answer.answer.clone(),
        Err(err) => render_error(err),
    }
}

pub fn render_index(index: &IndexDefinition) -> String {
    let mut lines = vec![format!("Index: {}", index.name)];
    for field in &index.fields {
        let mut flags = Vec::new();
        if field.searchable == Some(true) {
            flags.push("searchable".to_string());
        }
        if field.retrievable == Some(true) {
            flags.push("retrievable".to_string());
        }
        if let Some(dims) = field.dimensions {
            flags.push(format!("dimensions={}", dims));
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        lines.push(format!("  {}: {}{}", field.name, field.field_type, flags));
    }
    lines.join("\n")
}
