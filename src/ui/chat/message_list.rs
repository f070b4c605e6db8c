//! Chat message list.

use crate::chat::{LogEntry, MESSAGES_ID, Message, MessageLog, Origin, format_message};

/// Scrollable container holding every visible row, placeholder last.
pub fn chat_message_list(log: &MessageLog) -> String {
    let rows: String = log
        .entries()
        .map(|entry| match entry {
            LogEntry::Message(message) => message_row(message),
            LogEntry::Typing => typing_row(),
        })
        .collect();

    format!(
        r#"<div id="{MESSAGES_ID}" class="chat-messages" aria-live="polite" aria-label="Chat messages">{rows}</div>"#
    )
}

/// One message, its text run through [`format_message`].
pub fn message_row(message: &Message) -> String {
    format!(
        r#"<div class="message {}" data-seq="{}"><div class="message-content">{}</div></div>"#,
        message.origin().css_class(),
        message.seq(),
        format_message(message.text())
    )
}

/// The "backend is processing" placeholder.
pub fn typing_row() -> String {
    format!(
        r#"<div id="typing-indicator" class="message {}"><div class="typing-indicator">{}</div></div>"#,
        Origin::Bot.css_class(),
        r#"<div class="typing-dot"></div>"#.repeat(3)
    )
}
