mod parser;
mod reader;
mod types;

pub use parser::{
    parse_chat_line, parse_messages, SEPARATOR_WIDTH, TIMESTAMP_WIDTH, TIME_FORMAT,
};
pub use reader::{read_messages, read_messages_from_reader};
pub use types::ChatMessage;

#[cfg(test)]
pub mod unit_test;
