//! Server-rendered widget markup.
//!
//! The widget works as plain HTML forms: sending and clearing post to the
//! server, which redirects back to the page right away. While a reply is
//! pending the page reloads itself until the placeholder is gone.
//!
//! # Structure
//!
//! - [`chat`]: header, message log, input area and the enclosing shell
//! - [`html_shell`]: the document around the widget

pub mod chat;

use crate::chat::escape_html;

/// Page serving the whole widget.
pub const PAGE_PATH: &str = "/";
/// Fragment with only the message log.
pub const MESSAGES_PATH: &str = "/widget/messages";
/// Form target for submissions.
pub const SEND_PATH: &str = "/widget/send";
/// Form target for the clear control.
pub const CLEAR_PATH: &str = "/widget/clear";

/// Reload interval of the page while a reply is pending.
pub const PENDING_REFRESH_SECS: u32 = 1;

/// Generate the HTML document for the application.
///
/// With `refresh_secs` set, the page reloads itself after that many seconds.
pub fn html_shell(title: &str, content: &str, refresh_secs: Option<u32>) -> String {
    let title = escape_html(title);
    let refresh = refresh_secs
        .map(|secs| format!(r#"<meta http-equiv="refresh" content="{secs}">"#))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Sentiment analysis chat">
    {refresh}
    <title>{title}</title>
</head>
<body>
    <main class="container">
        {content}
    </main>
</body>
</html>"#
    )
}
