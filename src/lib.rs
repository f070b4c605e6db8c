//! Sentiment Chat
//!
//! A chat widget that sends user text to an external sentiment-analysis
//! backend and renders the returned analysis, served as plain HTML.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server rendering the widget
//! - **Chat Client**: request-cycle state machine over an explicit widget
//! - **Backend**: HTTP client for the sentiment service's `/chat` endpoint
//!
//! # Modules
//!
//! - [`backend`]: Backend contract and HTTP implementation
//! - [`chat`]: Chat client, message log and reply formatting
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`ui`]: Widget markup

pub mod backend;
pub mod chat;
pub mod config;
pub mod server;
pub mod telemetry;
pub mod ui;

use crate::chat::ChatSession;
use crate::config::AppConfig;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one chat session this process serves.
    pub session: ChatSession,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
