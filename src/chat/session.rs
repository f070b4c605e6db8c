//! Shared handle driving a [`ChatClient`] against a backend.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::client::{ChatClient, Rejected, RequestState, SubmitOutcome, Submission};
use super::message::Message;
use super::widget::{HeaderControl, InputField, SendButton};
use crate::backend::ChatBackend;

/// Thread-safe handle to the one chat client of this process.
///
/// The client lock is released while the backend call is in flight, so the
/// widget can be rendered (placeholder shown, input disabled) in the
/// meantime.
#[derive(Debug, Clone)]
pub struct ChatSession {
    client: Arc<Mutex<ChatClient>>,
    backend: Arc<dyn ChatBackend>,
}

/// Point-in-time view of the widget, for JSON consumers.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetSnapshot {
    pub state: RequestState,
    pub messages: Vec<Message>,
    pub typing: bool,
    pub input: InputField,
    pub send_button: SendButton,
    pub header_controls: Vec<HeaderControl>,
}

impl ChatSession {
    pub fn new(client: ChatClient, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            client: Arc::new(Mutex::new(client)),
            backend,
        }
    }

    /// Run one full submission: append, send, settle.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let submission = match self.client.lock().await.begin_submit(text) {
            Ok(submission) => submission,
            Err(rejected) => return SubmitOutcome::Rejected(rejected),
        };

        self.settle(submission).await
    }

    /// Accept a submission and settle it on a background task.
    ///
    /// Returns as soon as the user message and placeholder are in the log, so
    /// the caller can render the pending state. Dropping the handle leaves the
    /// task running.
    pub async fn dispatch(&self, text: &str) -> Result<JoinHandle<SubmitOutcome>, Rejected> {
        let submission = self.client.lock().await.begin_submit(text)?;
        let session = self.clone();
        Ok(tokio::spawn(async move { session.settle(submission).await }))
    }

    async fn settle(&self, submission: Submission) -> SubmitOutcome {
        let result = self.backend.send(submission.message()).await;
        self.client.lock().await.finish_submit(submission, result)
    }

    pub async fn clear(&self) {
        self.client.lock().await.clear();
    }

    pub async fn install_clear_control(&self) -> bool {
        self.client.lock().await.install_clear_control()
    }

    /// Run `f` against the current client state.
    pub async fn with_client<R>(&self, f: impl FnOnce(&ChatClient) -> R) -> R {
        f(&*self.client.lock().await)
    }

    pub async fn snapshot(&self) -> WidgetSnapshot {
        self.with_client(|client| {
            let widget = client.widget();
            WidgetSnapshot {
                state: client.state(),
                messages: widget.log.messages().to_vec(),
                typing: widget.log.is_typing(),
                input: widget.input.clone(),
                send_button: widget.send_button.clone(),
                header_controls: widget.header.controls().to_vec(),
            }
        })
        .await
    }
}
