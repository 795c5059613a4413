pub mod chat;
pub use chat::{read_messages, read_messages_from_reader, ChatMessage};

pub mod subtitles;
pub use subtitles::SubtitleEntry;

pub mod output;
pub use output::srt_path_for;

pub mod logging;

pub mod errors;
pub use errors::{ArgumentError, ChatSrtError, ChatSrtResult, ParseError, SubtitleError};

use log::info;
use std::path::{Path, PathBuf};

/// What a finished conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Chat lines read from the input
    pub messages: usize,
    /// Cues written, always one fewer than `messages` (or zero)
    pub cues: usize,
    pub output: PathBuf,
}

/// Convert a chat log into a subtitle file at `output`
///
/// The whole log is parsed before `output` is touched, so a malformed line
/// leaves no file behind.
pub fn convert_chat_file_to(input: &Path, output: &Path) -> ChatSrtResult<ConversionSummary> {
    info!("Converting {} -> {}", input.display(), output.display());

    let messages = chat::read_messages(input)?;
    let entries = subtitles::build_subtitle_entries(&messages);
    subtitles::write_srt_file(output, &entries)?;

    Ok(ConversionSummary {
        messages: messages.len(),
        cues: entries.len(),
        output: output.to_path_buf(),
    })
}

/// Convert a chat log into `<base name>.srt` in the current working directory
pub fn convert_chat_file(input: &Path) -> ChatSrtResult<ConversionSummary> {
    let output = output::srt_path_for(input)?;
    convert_chat_file_to(input, &output)
}
