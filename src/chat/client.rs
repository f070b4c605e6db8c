//! The chat client: request-cycle state and message bookkeeping.
//!
//! A submission runs in two phases so the caller can release any lock while
//! the backend call is in flight:
//!
//! 1. [`ChatClient::begin_submit`] appends the user message, clears the input,
//!    shows the typing placeholder and disables input.
//! 2. [`ChatClient::finish_submit`] removes the placeholder, appends the bot
//!    reply (or an error message) and re-enables input.
//!
//! ```text
//! Idle ──begin_submit──▶ Sending ──finish_submit──▶ Rendered | Errored ──▶ Idle
//! ```

use serde::Serialize;
use tracing::{debug, error, info};

use super::message::{Message, Origin};
use super::widget::{ChatWidget, HeaderControl};
use crate::backend::{BackendError, ChatReply, ReplyOutcome};

/// Greeting shown on load and after every clear.
pub const DEFAULT_GREETING: &str = "Hello! I'm your Sentiment Analysis Assistant. Send me any text, and I'll analyze its sentiment, provide a confidence score, and explain my reasoning.";

/// Prefix for application errors reported by the backend.
pub const APPLICATION_ERROR_PREFIX: &str = "Sorry, there was an error processing your request: ";

/// Shown when the backend could not be reached or replied with garbage.
pub const CONNECTION_ERROR_MESSAGE: &str = "Sorry, there was a connection error. Please try again.";

/// Where the client is in its request cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    #[default]
    Idle,
    /// A request is in flight; the placeholder is shown and input is disabled.
    Sending,
}

/// Why a submission never reached the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// The input was empty or whitespace only.
    Empty,
    /// Another submission is still pending.
    Busy,
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended and no request was issued.
    Rejected(Rejected),
    /// The backend's analysis was appended.
    Rendered,
    /// The backend reported an application error, shown with its prefix.
    ApplicationError,
    /// The backend was unreachable or its reply was unusable.
    ConnectionError,
}

/// An accepted submission awaiting its backend reply.
#[derive(Debug)]
#[must_use = "a submission must be finished or the placeholder stays visible"]
pub struct Submission {
    message: String,
}

impl Submission {
    /// The trimmed text to send to the backend.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The chat client.
///
/// Owns its rendering targets explicitly rather than looking them up on a
/// page. Holds no backend handle; see [`super::ChatSession`] for the async
/// driver.
#[derive(Debug, Clone)]
pub struct ChatClient {
    widget: ChatWidget,
    greeting: String,
    state: RequestState,
    clear_control_installed: bool,
}

impl ChatClient {
    /// Create a client whose log starts with the greeting.
    pub fn new(title: impl Into<String>, greeting: impl Into<String>) -> Self {
        let mut client = Self {
            widget: ChatWidget::new(title),
            greeting: greeting.into(),
            state: RequestState::Idle,
            clear_control_installed: false,
        };
        client.seed_greeting();
        client
    }

    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Add the clear control to the header. Only the first call has an
    /// effect; returns whether this call installed it.
    pub fn install_clear_control(&mut self) -> bool {
        if self.clear_control_installed {
            return false;
        }
        self.widget.header.append(HeaderControl::ClearChat);
        self.clear_control_installed = true;
        true
    }

    /// Start a submission.
    ///
    /// Empty input is ignored silently. While another submission is pending
    /// the trimmed text is kept as the input draft and the call is rejected.
    pub fn begin_submit(&mut self, text: &str) -> Result<Submission, Rejected> {
        let message = text.trim();
        if message.is_empty() {
            debug!(name: "chat.submit.ignored", "Ignoring empty submission");
            return Err(Rejected::Empty);
        }

        if self.state == RequestState::Sending {
            debug!(name: "chat.submit.busy", "Submission rejected while a request is pending");
            self.widget.input.set_value(message);
            return Err(Rejected::Busy);
        }

        self.widget.log.push(Origin::User, message);
        self.widget.input.clear();
        self.widget.log.show_typing();
        self.widget.set_input_enabled(false);
        self.state = RequestState::Sending;

        info!(
            name: "chat.submit.sent",
            message_length = message.len(),
            "Submitting message to backend"
        );

        Ok(Submission {
            message: message.to_string(),
        })
    }

    /// Settle a submission with the backend's result.
    ///
    /// The placeholder is removed before the reply message is appended.
    pub fn finish_submit(
        &mut self,
        submission: Submission,
        result: Result<ChatReply, BackendError>,
    ) -> SubmitOutcome {
        self.widget.log.remove_typing();
        self.widget.set_input_enabled(true);
        self.state = RequestState::Idle;

        match result.and_then(ChatReply::interpret) {
            Ok(ReplyOutcome::Analysis(text)) => {
                self.widget.log.push(Origin::Bot, text);
                info!(name: "chat.reply.rendered", "Rendered backend analysis");
                SubmitOutcome::Rendered
            }
            Ok(ReplyOutcome::Failure(reason)) => {
                info!(
                    name: "chat.reply.application_error",
                    reason = %reason,
                    "Backend reported an error"
                );
                self.widget
                    .log
                    .push(Origin::Bot, format!("{APPLICATION_ERROR_PREFIX}{reason}"));
                SubmitOutcome::ApplicationError
            }
            Err(e) => {
                error!(
                    name: "chat.backend.failed",
                    error = %e,
                    message_length = submission.message.len(),
                    "Backend request failed"
                );
                self.widget.log.push(Origin::Bot, CONNECTION_ERROR_MESSAGE);
                SubmitOutcome::ConnectionError
            }
        }
    }

    /// Empty the log and restore the greeting. Does not contact the backend.
    ///
    /// A pending submission is unaffected: its reply still lands, after the
    /// greeting.
    pub fn clear(&mut self) {
        self.widget.log.clear();
        self.seed_greeting();
        info!(name: "chat.cleared", "Chat cleared");
    }

    /// The most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.widget.log.last()
    }

    fn seed_greeting(&mut self) {
        self.widget.log.push(Origin::Bot, self.greeting.clone());
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new("Sentiment Analysis Assistant", DEFAULT_GREETING)
    }
}
