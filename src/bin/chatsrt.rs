use chatsrt::{convert_chat_file, ArgumentError, ChatSrtResult, ConversionSummary};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Turn a timestamped chat log into a SubRip subtitle file
#[derive(Parser, Debug)]
#[command(name = "chatsrt")]
#[command(version)]
#[command(about = "Convert an `HH:MM:SS, text` chat log into an .srt file in the current directory")]
pub struct Args {
    /// Path to the chat log
    pub file: Option<PathBuf>,
}

fn run(args: Args) -> ChatSrtResult<ConversionSummary> {
    let file = args
        .file
        .ok_or_else(|| ArgumentError::new("No chat file provided"))?;
    convert_chat_file(&file)
}

fn main() -> ExitCode {
    let args = Args::parse();
    chatsrt::logging::init();

    match run(args) {
        Ok(summary) => {
            println!(
                "✅ Wrote {} cues ({} messages) to {}",
                summary.cues,
                summary.messages,
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
