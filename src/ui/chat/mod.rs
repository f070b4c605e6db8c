//! Chat widget markup.
//!
//! Every function renders from the client's [`ChatWidget`](crate::chat::ChatWidget);
//! nothing here mutates state.

mod header;
mod input_area;
mod message_list;
mod shell;

pub use header::chat_header;
pub use input_area::chat_input_area;
pub use message_list::{chat_message_list, message_row, typing_row};
pub use shell::chat_shell;
