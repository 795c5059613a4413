use super::types::SubtitleEntry;
use crate::chat::ChatMessage;
use log::debug;
use std::time::Duration;

/// Turn consecutive chat messages into cues
///
/// Each message is shown until the next one arrives. The final message has
/// no successor to close its window, so it produces no cue.
pub fn build_subtitle_entries(messages: &[ChatMessage]) -> Vec<SubtitleEntry> {
    let entries: Vec<SubtitleEntry> = messages
        .windows(2)
        .map(|pair| SubtitleEntry::new(pair[0].offset, pair[1].offset, pair[0].text.clone()))
        .collect();

    let shown: Duration = entries.iter().map(SubtitleEntry::duration).sum();
    debug!("Built {} cues covering {:?}", entries.len(), shown);

    if let Some(last) = messages.last() {
        debug!("Last message has no end time, dropping it: {:?}", last.text);
    }

    entries
}
