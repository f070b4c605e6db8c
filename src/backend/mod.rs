//! Sentiment backend contract.
//!
//! The backend is an external service reached through a single endpoint:
//! `POST /chat` with `{"message": ...}`, answering `{"response": ...}` on
//! success or `{"error": ...}` on an application-level failure.
//!
//! # Implementations
//!
//! - [`HttpChatBackend`]: talks to the service over HTTP with `reqwest`

mod http;

pub use http::HttpChatBackend;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's text to analyze.
    pub message: String,
}

/// Reply body returned by the backend.
///
/// Unknown fields are ignored. Both fields are optional on the wire; see
/// [`ChatReply::interpret`] for how the combinations are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Free-form analysis text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Application error. Usually text, but any JSON value is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// What a well-formed reply asks the client to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The analysis to render.
    Analysis(String),
    /// An application error reported by the backend.
    Failure(String),
}

impl ChatReply {
    /// Create a successful reply.
    pub fn response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            error: None,
        }
    }

    /// Create an application-error reply.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            response: None,
            error: Some(Value::String(text.into())),
        }
    }

    /// Resolve the reply into something the client can render.
    ///
    /// A truthy `error` (non-empty string, non-zero number, `true`, array or
    /// object) wins over `response`. A reply with neither usable field is
    /// malformed.
    pub fn interpret(self) -> Result<ReplyOutcome, BackendError> {
        match self {
            Self {
                error: Some(error), ..
            } if is_truthy(&error) => Ok(ReplyOutcome::Failure(error_text(error))),
            Self {
                response: Some(response),
                ..
            } => Ok(ReplyOutcome::Analysis(response)),
            _ => Err(BackendError::MissingResponse),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings are shown as-is; anything else as compact JSON.
fn error_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Errors that can occur while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The endpoint URL could not be built.
    #[error("Invalid backend endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was not a JSON reply object.
    #[error("Malformed reply (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The reply carried neither a `response` nor an `error`.
    #[error("Reply carried neither a response nor an error")]
    MissingResponse,
}

/// Trait for sentiment backends.
///
/// The client issues exactly one [`ChatBackend::send`] per accepted
/// submission and never retries.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync + std::fmt::Debug {
    /// Send the user's text and wait for the reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be decoded.
    async fn send(&self, message: &str) -> Result<ChatReply, BackendError>;
}
