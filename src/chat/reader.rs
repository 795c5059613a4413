use super::parser::collect_messages;
use super::types::ChatMessage;
use crate::errors::{ChatSrtError, ChatSrtResult};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse every line of `reader` into chat messages
pub fn read_messages_from_reader<R: BufRead>(reader: R) -> ChatSrtResult<Vec<ChatMessage>> {
    collect_messages(reader.lines().map(|line| line.map_err(ChatSrtError::from)))
}

/// Open a chat log on disk and parse it completely
///
/// The file handle is closed before this returns, whatever the outcome.
pub fn read_messages<P: AsRef<Path>>(path: P) -> ChatSrtResult<Vec<ChatMessage>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ChatSrtError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let messages = read_messages_from_reader(BufReader::new(file)).map_err(|e| match e {
        ChatSrtError::Other(source) => ChatSrtError::FileOpen {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!("Read {} messages from {}", messages.len(), path.display());
    Ok(messages)
}
