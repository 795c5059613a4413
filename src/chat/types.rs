use std::time::Duration;

/// One chat line, positioned relative to the first line of the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Elapsed time since the first message of the log
    pub offset: Duration,
    pub text: String,
}

impl ChatMessage {
    pub fn new(offset: Duration, text: impl Into<String>) -> Self {
        Self {
            offset,
            text: text.into(),
        }
    }
}
