//! Chat header.

use crate::chat::{HEADER_ID, Header, HeaderControl, escape_html};
use crate::ui::CLEAR_PATH;

/// Header with the title and any installed controls.
pub fn chat_header(header: &Header) -> String {
    let mut html = format!(
        r#"<header id="{HEADER_ID}" class="chat-header"><h1>{}</h1>"#,
        escape_html(header.title())
    );
    for control in header.controls() {
        html.push_str(&header_control(*control));
    }
    html.push_str("</header>");
    html
}

fn header_control(control: HeaderControl) -> String {
    let action = match control {
        HeaderControl::ClearChat => CLEAR_PATH,
    };
    format!(
        r#"<form method="post" action="{action}"><button id="{}" type="submit">{}</button></form>"#,
        control.element_id(),
        control.label()
    )
}
