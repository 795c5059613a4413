use super::types::SubtitleEntry;
use super::utils::parse_timestamp;
use crate::errors::{ChatSrtError, ChatSrtResult, SubtitleError};
use std::fs;
use std::path::Path;

/// Parse a SubRip document
///
/// Cue numbers are checked for shape but not for sequence. Text runs until
/// the next empty line, so a cue may have empty or whitespace-only text.
pub fn parse_srt(content: &str) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().enumerate().peekable();
    let mut entries = Vec::new();

    loop {
        while lines.next_if(|(_, line)| line.is_empty()).is_some() {}

        let Some((index, number_line)) = lines.next() else {
            break;
        };
        if number_line.trim().parse::<u64>().is_err() {
            return Err(SubtitleError::new(format!(
                "line {}: expected cue number, found {:?}",
                index + 1,
                number_line
            )));
        }

        let (index, timing_line) = lines.next().ok_or_else(|| {
            SubtitleError::new(format!("line {}: cue has no timing line", index + 1))
        })?;
        let (start, end) = timing_line.split_once("-->").ok_or_else(|| {
            SubtitleError::new(format!(
                "line {}: expected `start --> end`, found {:?}",
                index + 1,
                timing_line
            ))
        })?;
        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;

        let mut text = Vec::new();
        while let Some((_, line)) = lines.next_if(|(_, line)| !line.is_empty()) {
            text.push(line);
        }

        entries.push(SubtitleEntry::new(start, end, text.join("\n")));
    }

    Ok(entries)
}

/// Read and parse a SubRip file
pub fn read_srt_file<P: AsRef<Path>>(path: P) -> ChatSrtResult<Vec<SubtitleEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ChatSrtError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_srt(&content)?)
}
