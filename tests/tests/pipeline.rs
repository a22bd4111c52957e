use application::rag_service::RagService;
use domain::context::CONTEXT_SEPARATOR;
use domain::{Document, RagError};
use presentation::render::{
    render_answer, COMPLETION_ERROR_MARKER, EMBEDDING_ERROR_MARKER, SEARCH_ERROR_MARKER,
};
use tests::{MockCompleter, MockEmbedder, MockRetriever};

fn meeting_doc() -> Document {
    Document::new("Meeting at 3pm", "alice", "2024-01-01T10:00:00Z")
}

#[tokio::test]
async fn blank_question_makes_no_external_calls() {
    let embedder = MockEmbedder::returning(vec![1.0]);
    let retriever = MockRetriever::returning(vec![meeting_doc()]);
    let completer = MockCompleter::echoing();
    let service = RagService::new(&embedder, &retriever, &completer);

    for input in ["", "   ", "\n\t"] {
        let result = service.query(input).await;
        assert!(matches!(result, Err(RagError::InvalidInput)));
        assert_eq!(render_answer(&result), "Please enter a question.");
    }
    assert_eq!(embedder.calls(), 0);
    assert_eq!(retriever.calls(), 0);
    assert_eq!(completer.calls(), 0);
}

#[tokio::test]
async fn context_joins_documents_in_service_order() {
    let docs = vec![
        Document::new("first", "u1", "t1"),
        Document::new("second", "u2", "t2"),
        Document::new("third", "u3", "t3"),
    ];
    let embedder = MockEmbedder::returning(vec![0.25, 0.5, 0.75]);
    let retriever = MockRetriever::returning(docs);
    let completer = MockCompleter::echoing();
    let service = RagService::new(&embedder, &retriever, &completer);

    let result = service.query("order?").await.unwrap();

    let expected = ["[u1 @ t1]\nfirst", "[u2 @ t2]\nsecond", "[u3 @ t3]\nthird"].join(CONTEXT_SEPARATOR);
    assert_eq!(result.context, expected);
    assert_eq!(result.documents, 3);
    assert_eq!(retriever.seen_vectors(), vec![vec![0.25, 0.5, 0.75]]);
}

#[tokio::test]
async fn empty_search_still_reaches_completion() {
    let embedder = MockEmbedder::returning(vec![1.0]);
    let retriever = MockRetriever::returning(Vec::new());
    let completer = MockCompleter::echoing();
    let service = RagService::new(&embedder, &retriever, &completer);

    let result = service.query("anything new?").await.unwrap();

    assert_eq!(result.context, "");
    assert_eq!(completer.calls(), 1);
    let prompts = completer.prompts();
    assert_eq!(
        prompts[0].user.content,
        "Messages:\n\n\nQuestion: anything new?\n\nAnswer:"
    );
}

#[tokio::test]
async fn embedding_failure_stops_before_search() {
    let embedder = MockEmbedder::failing("deployment not found");
    let retriever = MockRetriever::returning(vec![meeting_doc()]);
    let completer = MockCompleter::echoing();
    let service = RagService::new(&embedder, &retriever, &completer);

    let result = service.query("hello?").await;

    assert!(matches!(result, Err(RagError::Embedding(_))));
    let rendered = render_answer(&result);
    assert!(rendered.starts_with(EMBEDDING_ERROR_MARKER), "{rendered}");
    assert!(rendered.contains("deployment not found"));
    assert_eq!(retriever.calls(), 0);
    assert_eq!(completer.calls(), 0);
}

#[tokio::test]
async fn search_failure_stops_before_completion() {
    let embedder = MockEmbedder::returning(vec![1.0]);
    let retriever = MockRetriever::failing("Azure Search returned 500 Internal Server Error");
    let completer = MockCompleter::echoing();
    let service = RagService::new(&embedder, &retriever, &completer);

    let result = service.query("hello?").await;

    assert!(matches!(result, Err(RagError::Search(_))));
    assert!(render_answer(&result).starts_with(SEARCH_ERROR_MARKER));
    assert_eq!(embedder.calls(), 1);
    assert_eq!(completer.calls(), 0);
}

#[tokio::test]
async fn completion_failure_is_tagged() {
    let embedder = MockEmbedder::returning(vec![1.0]);
    let retriever = MockRetriever::returning(vec![meeting_doc()]);
    let completer = MockCompleter::failing("rate limited");
    let service = RagService::new(&embedder, &retriever, &completer);

    let result = service.query("hello?").await;

    assert!(matches!(result, Err(RagError::Completion(_))));
    let rendered = render_answer(&result);
    assert!(rendered.starts_with(COMPLETION_ERROR_MARKER));
    assert!(rendered.ends_with("rate limited"));
}

#[tokio::test]
async fn meeting_question_end_to_end() {
    let embedder = MockEmbedder::returning(vec![0.1; 4]);
    let retriever = MockRetriever::returning(vec![meeting_doc()]);
    let completer = MockCompleter::echoing();
    let service = RagService::new(&embedder, &retriever, &completer);

    let result = service.query("What time is the meeting?").await.unwrap();

    let prompts = completer.prompts();
    let user_prompt = &prompts[0].user.content;
    assert!(user_prompt.contains("[alice @ 2024-01-01T10:00:00Z]\nMeeting at 3pm"));
    assert!(user_prompt.contains("Question: What time is the meeting?"));
    // The echoing completer hands the prompt back, trimmed.
    assert_eq!(result.answer, user_prompt.trim());
}
