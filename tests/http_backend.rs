use std::sync::Arc;

use sentiment_chat::backend::{BackendError, ChatBackend, ChatReply, HttpChatBackend};
use sentiment_chat::chat::{ChatClient, ChatSession, LogEntry, Origin, SubmitOutcome, format_message};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_for(base_url: &str) -> ChatSession {
    let backend = HttpChatBackend::new(base_url, "/chat").expect("valid endpoint");
    ChatSession::new(ChatClient::default(), Arc::new(backend))
}

/// An address nothing is listening on.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_posts_message_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "hi" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpChatBackend::new(&mock_server.uri(), "/chat").unwrap();
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply, ChatReply::response("hi"));
}

#[tokio::test]
async fn test_error_body_is_read_despite_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "model unavailable" })),
        )
        .mount(&mock_server)
        .await;

    let backend = HttpChatBackend::new(&mock_server.uri(), "/chat").unwrap();
    let reply = backend.send("test").await.unwrap();

    assert_eq!(reply, ChatReply::error("model unavailable"));
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let backend = HttpChatBackend::new(&mock_server.uri(), "/chat").unwrap();
    let err = backend.send("test").await.unwrap_err();

    assert!(matches!(err, BackendError::Decode { status: 502, .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_an_http_error() {
    let backend = HttpChatBackend::new(&closed_port_url(), "/chat").unwrap();
    let err = backend.send("test").await.unwrap_err();

    assert!(matches!(err, BackendError::Http(_)));
}

#[tokio::test]
async fn test_scenario_positive_analysis() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "message": "I love this product" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "**Sentiment:** Positive\n**Confidence:** 95%"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server.uri());
    let outcome = session.submit("I love this product").await;
    assert_eq!(outcome, SubmitOutcome::Rendered);

    let snapshot = session.snapshot().await;
    let user = &snapshot.messages[1];
    let bot = &snapshot.messages[2];
    assert_eq!(user.origin(), Origin::User);
    assert_eq!(user.text(), "I love this product");
    assert_eq!(bot.origin(), Origin::Bot);

    let rendered = format_message(bot.text());
    let (sentiment_line, confidence_line) = rendered.split_once("<br>").unwrap();
    assert!(sentiment_line.contains(r#"<span class="positive">Positive</span>"#));
    assert!(confidence_line.contains(r#"<span class="confidence">95%</span>"#));
}

#[tokio::test]
async fn test_scenario_application_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "model unavailable"
        })))
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server.uri());
    assert_eq!(session.submit("test").await, SubmitOutcome::ApplicationError);

    let last = session.snapshot().await.messages.pop().unwrap();
    assert_eq!(
        last.text(),
        "Sorry, there was an error processing your request: model unavailable"
    );
}

#[tokio::test]
async fn test_numeric_error_is_an_application_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": 5 })))
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server.uri());
    assert_eq!(session.submit("test").await, SubmitOutcome::ApplicationError);

    let last = session.snapshot().await.messages.pop().unwrap();
    assert_eq!(
        last.text(),
        "Sorry, there was an error processing your request: 5"
    );
}

#[tokio::test]
async fn test_scenario_connection_failure() {
    let session = session_for(&closed_port_url());

    assert_eq!(session.submit("test").await, SubmitOutcome::ConnectionError);

    let placeholder_left = session
        .with_client(|client| client.widget().log.entries().any(|e| e == LogEntry::Typing))
        .await;
    assert!(!placeholder_left);

    let last = session.snapshot().await.messages.pop().unwrap();
    assert_eq!(
        last.text(),
        "Sorry, there was a connection error. Please try again."
    );
}
