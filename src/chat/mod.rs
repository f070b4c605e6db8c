//! Chat client, message log and reply formatting.
//!
//! # Architecture
//!
//! - [`ChatClient`]: request-cycle state machine over an explicit [`ChatWidget`]
//! - [`ChatSession`]: shared async handle that drives the client against a
//!   [`ChatBackend`](crate::backend::ChatBackend)
//! - [`format_message`]: escapes and highlights message text for display
//!
//! # Example
//!
//! ```rust
//! use sentiment_chat::backend::ChatReply;
//! use sentiment_chat::chat::{ChatClient, SubmitOutcome};
//!
//! let mut client = ChatClient::default();
//! let submission = client.begin_submit("I love this product").unwrap();
//! let outcome = client.finish_submit(submission, Ok(ChatReply::response("**Sentiment:** Positive")));
//!
//! assert_eq!(outcome, SubmitOutcome::Rendered);
//! assert_eq!(client.widget().log.len(), 3);
//! ```

mod client;
mod format;
mod message;
mod session;
mod widget;

pub use client::{
    APPLICATION_ERROR_PREFIX, CONNECTION_ERROR_MESSAGE, ChatClient, DEFAULT_GREETING, Rejected,
    RequestState, SubmitOutcome, Submission,
};
pub use format::{escape_html, format_message};
pub use message::{LogEntry, Message, MessageLog, Origin};
pub use session::{ChatSession, WidgetSnapshot};
pub use widget::{
    CLEAR_BUTTON_ID, ChatWidget, HEADER_ID, Header, HeaderControl, INPUT_ID, InputField,
    MESSAGES_ID, SEND_BUTTON_ID, SendButton,
};
