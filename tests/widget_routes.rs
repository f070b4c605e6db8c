use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use sentiment_chat::backend::{BackendError, ChatBackend, ChatReply};
use sentiment_chat::config::AppConfig;
use sentiment_chat::server::{build_router, build_state};
use serde_json::Value;
use tokio::sync::Notify;

/// Backend that answers every message with a fixed reply, optionally held
/// until released.
#[derive(Debug)]
struct FixedBackend {
    reply: fn() -> Result<ChatReply, BackendError>,
    release: Option<Arc<Notify>>,
}

#[async_trait::async_trait]
impl ChatBackend for FixedBackend {
    async fn send(&self, _message: &str) -> Result<ChatReply, BackendError> {
        if let Some(release) = &self.release {
            release.notified().await;
        }
        (self.reply)()
    }
}

async fn start(backend: FixedBackend) -> TestServer {
    let config = AppConfig::load_from_args(["sentiment-chat"]).expect("defaults should load");
    let state = build_state(Arc::new(config), Arc::new(backend)).await;
    TestServer::new(build_router(state)).expect("router should start")
}

async fn server_with(reply: fn() -> Result<ChatReply, BackendError>) -> TestServer {
    start(FixedBackend {
        reply,
        release: None,
    })
    .await
}

async fn log(server: &TestServer) -> Value {
    server.get("/api/log").await.json::<Value>()
}

/// Wait until the background submission has settled.
async fn settled_log(server: &TestServer) -> Value {
    for _ in 0..200 {
        let log = log(server).await;
        if log["state"] == "idle" {
            return log;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("submission never settled");
}

async fn send(server: &TestServer, message: &str) -> Value {
    let response = server
        .post("/widget/send")
        .form(&[("message", message)])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    settled_log(server).await
}

#[tokio::test]
async fn test_page_renders_widget_with_greeting() {
    let server = server_with(|| Ok(ChatReply::response("unused"))).await;

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();

    for id in ["chat-messages", "user-input", "send-button", "header", "clear-button"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing element {id}");
    }
    assert!(html.contains("I&#39;m your Sentiment Analysis Assistant"));
    assert_eq!(html.matches(r#"id="clear-button""#).count(), 1);
    assert!(!html.contains("http-equiv"));
}

#[tokio::test]
async fn test_pending_reply_shows_placeholder_and_disabled_input() {
    let release = Arc::new(Notify::new());
    let server = start(FixedBackend {
        reply: || Ok(ChatReply::response("done")),
        release: Some(Arc::clone(&release)),
    })
    .await;

    let response = server
        .post("/widget/send")
        .form(&[("message", "hold on")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let html = server.get("/").await.text();
    assert!(html.contains("hold on"));
    assert!(html.contains("typing-indicator"));
    assert!(html.contains(r#"id="user-input""#));
    assert_eq!(html.matches(" disabled").count(), 2);
    assert!(html.contains(r#"<meta http-equiv="refresh" content="1">"#));

    // A second send while pending is refused.
    server
        .post("/widget/send")
        .form(&[("message", "again")])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let pending = log(&server).await;
    assert_eq!(pending["state"], "sending");
    assert_eq!(pending["messages"].as_array().unwrap().len(), 2);

    release.notify_one();
    let log = settled_log(&server).await;
    assert_eq!(log["typing"], false);
    assert_eq!(log["messages"].as_array().unwrap().last().unwrap()["text"], "done");

    let html = server.get("/").await.text();
    assert!(!html.contains("typing-indicator"));
    assert!(!html.contains("http-equiv"));
    assert!(!html.contains(" disabled"));
}

#[tokio::test]
async fn test_send_renders_analysis() {
    let server = server_with(|| {
        Ok(ChatReply::response(
            "**Sentiment:** Positive\n**Confidence:** 95%",
        ))
    })
    .await;

    let log = send(&server, "I love this product").await;

    let fragment = server.get("/widget/messages").await.text();
    assert!(fragment.contains("I love this product"));
    assert!(fragment.contains(
        r#"<strong>Sentiment:</strong> <span class="positive">Positive</span><br><strong>Confidence:</strong> <span class="confidence">95%</span>"#
    ));
    assert!(!fragment.contains("typing-indicator"));

    let messages = log["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["origin"], "user");
    assert_eq!(messages[1]["text"], "I love this product");
    assert_eq!(messages[2]["origin"], "bot");
    assert_eq!(log["typing"], false);
}

#[tokio::test]
async fn test_send_renders_application_error() {
    let server = server_with(|| Ok(ChatReply::error("model unavailable"))).await;

    let log = send(&server, "test").await;

    let last = log["messages"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(
        last["text"],
        "Sorry, there was an error processing your request: model unavailable"
    );
}

#[tokio::test]
async fn test_send_renders_connection_error() {
    let server = server_with(|| Err(BackendError::MissingResponse)).await;

    let log = send(&server, "test").await;

    let last = log["messages"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(
        last["text"],
        "Sorry, there was a connection error. Please try again."
    );
    assert_eq!(log["typing"], false);
    assert_eq!(log["input"]["enabled"], true);
}

#[tokio::test]
async fn test_blank_send_is_ignored() {
    let server = server_with(|| Ok(ChatReply::response("unused"))).await;

    let log = send(&server, "   ").await;

    assert_eq!(log["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_restores_greeting() {
    let server = server_with(|| Ok(ChatReply::response("analysis"))).await;

    send(&server, "one").await;
    send(&server, "two").await;

    for _ in 0..2 {
        let response = server.post("/widget/clear").await;
        response.assert_status(StatusCode::SEE_OTHER);

        let log = log(&server).await;
        let messages = log["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["origin"], "bot");
        assert_eq!(
            messages[0]["text"],
            sentiment_chat::chat::DEFAULT_GREETING
        );
    }
}

#[tokio::test]
async fn test_health() {
    let server = server_with(|| Ok(ChatReply::default())).await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");
}
