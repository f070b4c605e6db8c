use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::backend::{ChatBackend, HttpChatBackend};
use crate::chat::{ChatClient, ChatSession, RequestState, WidgetSnapshot};
use crate::config::AppConfig;
use crate::ui::{self, CLEAR_PATH, MESSAGES_PATH, PAGE_PATH, PENDING_REFRESH_SECS, SEND_PATH};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let backend = HttpChatBackend::new(&config.backend.base_url, &config.backend.chat_path)?;

    info!(
        name: "backend.config.loaded",
        endpoint = %backend.endpoint(),
        "Sentiment backend configured"
    );

    let state = build_state(Arc::clone(&config), Arc::new(backend)).await;
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

/// Build the shared state: one chat client, greeting seeded and clear
/// control installed.
pub async fn build_state(config: Arc<AppConfig>, backend: Arc<dyn ChatBackend>) -> AppState {
    let client = ChatClient::new(&config.widget.title, &config.widget.greeting);
    let session = ChatSession::new(client, backend);
    session.install_clear_control().await;

    AppState { session, config }
}

/// Routes for the widget page, its form targets and the JSON log view.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(PAGE_PATH, get(index_handler))
        .route(MESSAGES_PATH, get(messages_handler))
        .route(SEND_PATH, post(send_handler))
        .route(CLEAR_PATH, post(clear_handler))
        .route("/api/log", get(api_log))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - The full widget page. Reloads itself while a reply is pending.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (title, body, pending) = state
        .session
        .with_client(|client| {
            let widget = client.widget();
            (
                widget.header.title().to_string(),
                ui::chat::chat_shell(widget),
                client.state() == RequestState::Sending,
            )
        })
        .await;
    let refresh = pending.then_some(PENDING_REFRESH_SECS);
    Html(ui::html_shell(&title, &body, refresh))
}

/// GET /widget/messages - Only the message log.
async fn messages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = state
        .session
        .with_client(|client| ui::chat::chat_message_list(&client.widget().log))
        .await;
    Html(body)
}

/// Form body posted by the input area.
#[derive(Debug, Deserialize)]
struct SendForm {
    #[serde(default)]
    message: String,
}

/// POST /widget/send - Accept the input text and show the page again.
///
/// Redirects as soon as the submission is accepted; the reply is settled on
/// a background task while the page shows the placeholder.
async fn send_handler(State(state): State<AppState>, Form(form): Form<SendForm>) -> Redirect {
    match state.session.dispatch(&form.message).await {
        Ok(_task) => tracing::debug!("Submission dispatched"),
        Err(reason) => tracing::debug!(reason = ?reason, "Submission not sent"),
    }

    Redirect::to(PAGE_PATH)
}

/// POST /widget/clear - Reset the log to the greeting.
async fn clear_handler(State(state): State<AppState>) -> Redirect {
    state.session.clear().await;
    Redirect::to(PAGE_PATH)
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/log - JSON view of the widget.
async fn api_log(State(state): State<AppState>) -> Json<WidgetSnapshot> {
    Json(state.session.snapshot().await)
}

/// GET /health - Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}
