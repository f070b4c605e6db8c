//! Chat input area.

use crate::chat::{INPUT_ID, InputField, SEND_BUTTON_ID, SendButton, escape_html};
use crate::ui::SEND_PATH;

/// Input form. Enter in the text field submits the form.
///
/// Both controls render `disabled` while a request is pending.
pub fn chat_input_area(input: &InputField, send_button: &SendButton) -> String {
    let input_state = if input.is_enabled() { " autofocus" } else { " disabled" };
    let button_state = if send_button.is_enabled() { "" } else { " disabled" };

    format!(
        r#"<form class="chat-input" method="post" action="{SEND_PATH}"><input id="{INPUT_ID}" type="text" name="message" placeholder="Type your message..." autocomplete="off" value="{}"{input_state}><button id="{SEND_BUTTON_ID}" type="submit"{button_state}>Send</button></form>"#,
        escape_html(input.value())
    )
}
