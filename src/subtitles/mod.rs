mod builder;
mod reader;
mod types;
mod utils;
mod writer;

pub use builder::build_subtitle_entries;
pub use reader::{parse_srt, read_srt_file};
pub use types::SubtitleEntry;
pub use utils::{format_timestamp, parse_timestamp};
pub use writer::{to_srt_string, write_srt, write_srt_file};
