use super::types::SubtitleEntry;
use super::utils::format_timestamp;
use crate::errors::{ChatSrtError, ChatSrtResult};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn format_entry(sequence: usize, entry: &SubtitleEntry) -> String {
    format!(
        "{}\n{} --> {}\n{}\n\n",
        sequence,
        format_timestamp(entry.start),
        format_timestamp(entry.end),
        entry.text
    )
}

/// Render cues as a SubRip document. No cues renders an empty document.
pub fn to_srt_string(entries: &[SubtitleEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format_entry(i + 1, entry))
        .collect()
}

/// Write cues as SubRip, numbering them from 1
pub fn write_srt<W: Write>(entries: &[SubtitleEntry], mut writer: W) -> io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        writer.write_all(format_entry(i + 1, entry).as_bytes())?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write the cues into it
pub fn write_srt_file<P: AsRef<Path>>(path: P, entries: &[SubtitleEntry]) -> ChatSrtResult<()> {
    let path = path.as_ref();
    let to_write_error = |source: io::Error| ChatSrtError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    write_srt(entries, BufWriter::new(file)).map_err(to_write_error)?;

    info!("Wrote {} subtitle entries to {}", entries.len(), path.display());
    Ok(())
}
