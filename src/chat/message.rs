//! Chat messages and the visible message log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who a rendered message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Text typed by the person using the widget.
    User,
    /// Text produced by the sentiment backend (or the widget itself).
    Bot,
}

impl Origin {
    /// CSS class applied to messages of this origin.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
        }
    }
}

/// A single entry in the message log.
///
/// Messages are immutable once created. The `seq` number records insertion
/// order and never repeats within one log, even across clears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    seq: u64,
    origin: Origin,
    text: String,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Raw message text, before any formatting is applied.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// One visible row of the log: either a message or the typing placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEntry<'a> {
    Message(&'a Message),
    Typing,
}

/// The visible message log.
///
/// Display order equals creation order. The typing placeholder is tracked
/// separately from messages: at most one exists, and it is always yielded
/// last by [`MessageLog::entries`].
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_seq: u64,
    typing: bool,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return it.
    pub fn push(&mut self, origin: Origin, text: impl Into<String>) -> &Message {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(Message {
            seq,
            origin,
            text: text.into(),
            created_at: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Show the typing placeholder. Returns `false` if it was already shown.
    pub fn show_typing(&mut self) -> bool {
        !std::mem::replace(&mut self.typing, true)
    }

    /// Remove the typing placeholder. Returns `false` if none was shown.
    pub fn remove_typing(&mut self) -> bool {
        std::mem::replace(&mut self.typing, false)
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Drop every message and the placeholder.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.typing = false;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Visible rows in display order, placeholder last.
    pub fn entries(&self) -> impl Iterator<Item = LogEntry<'_>> {
        self.messages
            .iter()
            .map(LogEntry::Message)
            .chain(self.typing.then_some(LogEntry::Typing))
    }
}
