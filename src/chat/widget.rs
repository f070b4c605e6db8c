//! Rendering targets owned by the chat client.
//!
//! The widget is the page-level surface the client draws into: the
//! scrollable message log, the text input, the send button and the header.

use serde::Serialize;

use super::message::MessageLog;

/// Element identifier of the scrollable message container.
pub const MESSAGES_ID: &str = "chat-messages";
/// Element identifier of the text input.
pub const INPUT_ID: &str = "user-input";
/// Element identifier of the send button.
pub const SEND_BUTTON_ID: &str = "send-button";
/// Element identifier of the header container.
pub const HEADER_ID: &str = "header";
/// Element identifier of the injected clear control.
pub const CLEAR_BUTTON_ID: &str = "clear-button";

/// The text input.
#[derive(Debug, Clone, Serialize)]
pub struct InputField {
    value: String,
    enabled: bool,
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            value: String::new(),
            enabled: true,
        }
    }
}

impl InputField {
    /// Current draft text.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// The send button.
#[derive(Debug, Clone, Serialize)]
pub struct SendButton {
    enabled: bool,
}

impl Default for SendButton {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SendButton {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Controls that can be placed in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderControl {
    /// Empties the log and restores the greeting.
    ClearChat,
}

impl HeaderControl {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::ClearChat => CLEAR_BUTTON_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ClearChat => "Clear Chat",
        }
    }
}

/// The header container.
#[derive(Debug, Clone, Serialize)]
pub struct Header {
    title: String,
    controls: Vec<HeaderControl>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            controls: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn controls(&self) -> &[HeaderControl] {
        &self.controls
    }

    pub(crate) fn append(&mut self, control: HeaderControl) {
        self.controls.push(control);
    }
}

/// All rendering targets of one chat widget.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    pub log: MessageLog,
    pub input: InputField,
    pub send_button: SendButton,
    pub header: Header,
}

impl ChatWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            log: MessageLog::new(),
            input: InputField::default(),
            send_button: SendButton::default(),
            header: Header::new(title),
        }
    }

    /// Enable or disable user input (text field and send button together).
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input.enabled = enabled;
        self.send_button.enabled = enabled;
    }
}
