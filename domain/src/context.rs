use crate::models::Document;

pub const CONTEXT_SEPARATOR: &str = "\n\n----\n\n";

/// Join retrieved documents into the grounding block handed to the model.
///
/// Order is preserved exactly as the search service returned it; nothing is
/// re-ranked, deduplicated or truncated. No documents yields an empty string.
pub fn assemble_context(documents: &[Document]) -> String {
    documents
        .iter()
        .map(Document::render)
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}
