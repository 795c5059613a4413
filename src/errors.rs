use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Enumeration of all possible errors that can occur while converting a chat log
#[derive(Debug)]
pub enum ChatSrtError {
    /// No usable input path was supplied
    Argument(ArgumentError),
    /// The chat log could not be opened or read
    FileOpen { path: PathBuf, source: io::Error },
    /// A chat line could not be parsed
    Parse(ParseError),
    /// The subtitle file could not be created or written
    FileWrite { path: PathBuf, source: io::Error },
    /// A subtitle document could not be read back
    Subtitle(SubtitleError),
    Other(io::Error),
}

/// Invalid or missing command-line input
#[derive(Debug)]
pub struct ArgumentError {
    pub message: String,
}

impl ArgumentError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Chat log parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number of the offending line
    pub line: usize,
    pub message: String,
}

impl ParseError {
    /// Create a new error for the given line.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// SubRip document errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleError {
    pub message: String,
}

impl SubtitleError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ChatSrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatSrtError::Argument(err) => write!(f, "Argument error: {}", err),
            ChatSrtError::FileOpen { path, source } => {
                write!(f, "Cannot read chat file {}: {}", path.display(), source)
            }
            ChatSrtError::Parse(err) => write!(f, "Parse error: {}", err),
            ChatSrtError::FileWrite { path, source } => {
                write!(f, "Cannot write subtitle file {}: {}", path.display(), source)
            }
            ChatSrtError::Subtitle(err) => write!(f, "Subtitle error: {}", err),
            ChatSrtError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl fmt::Display for SubtitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ChatSrtError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChatSrtError::Argument(err) => Some(err),
            ChatSrtError::FileOpen { source, .. } | ChatSrtError::FileWrite { source, .. } => {
                Some(source)
            }
            ChatSrtError::Parse(err) => Some(err),
            ChatSrtError::Subtitle(err) => Some(err),
            ChatSrtError::Other(err) => Some(err),
        }
    }
}
impl Error for ArgumentError {}
impl Error for ParseError {}
impl Error for SubtitleError {}

// Conversion implementations
impl From<io::Error> for ChatSrtError {
    fn from(err: io::Error) -> Self {
        ChatSrtError::Other(err)
    }
}

impl From<ArgumentError> for ChatSrtError {
    fn from(err: ArgumentError) -> Self {
        ChatSrtError::Argument(err)
    }
}

impl From<ParseError> for ChatSrtError {
    fn from(err: ParseError) -> Self {
        ChatSrtError::Parse(err)
    }
}

impl From<SubtitleError> for ChatSrtError {
    fn from(err: SubtitleError) -> Self {
        ChatSrtError::Subtitle(err)
    }
}

// Type alias for Result with ChatSrtError
pub type ChatSrtResult<T> = Result<T, ChatSrtError>;
