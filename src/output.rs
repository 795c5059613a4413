use crate::errors::{ArgumentError, ChatSrtResult};
use std::path::{Path, PathBuf};

/// Subtitle file extension
pub const SRT_EXTENSION: &str = "srt";

/// Name of the subtitle file for `input`: its base name with the extension
/// swapped for `.srt`. The result has no directory part, so it resolves
/// against the current working directory.
pub fn srt_path_for(input: &Path) -> ChatSrtResult<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        ArgumentError::new(format!(
            "{} does not name a file; cannot derive the subtitle file name",
            input.display()
        ))
    })?;

    Ok(Path::new(file_name).with_extension(SRT_EXTENSION))
}
