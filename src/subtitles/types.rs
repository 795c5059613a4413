use std::time::Duration;

/// A single SubRip cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

impl SubtitleEntry {
    pub fn new(start: Duration, end: Duration, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// How long the cue stays on screen
    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }
}
