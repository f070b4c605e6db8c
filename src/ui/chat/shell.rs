//! Chat shell layout.

use super::{chat_header, chat_input_area, chat_message_list};
use crate::chat::ChatWidget;

/// The complete widget: header, message log and input area.
pub fn chat_shell(widget: &ChatWidget) -> String {
    format!(
        r#"<div class="chat-shell">{}{}{}</div>"#,
        chat_header(&widget.header),
        chat_message_list(&widget.log),
        chat_input_area(&widget.input, &widget.send_button)
    )
}
