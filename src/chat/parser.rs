use super::types::ChatMessage;
use crate::errors::ParseError;
use chrono::{NaiveTime, Timelike};
use log::debug;

/// Width of the `HH:MM:SS` prefix of every chat line
pub const TIMESTAMP_WIDTH: usize = 8;

/// Characters between the timestamp and the message body (e.g. `", "`)
pub const SEPARATOR_WIDTH: usize = 2;

/// `chrono` layout of the timestamp prefix
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Split a chat line into its time of day and message body
///
/// The body is whatever follows the timestamp once `SEPARATOR_WIDTH`
/// characters are skipped. Lines that end inside the separator yield an
/// empty body.
pub fn parse_chat_line(line: &str, line_number: usize) -> Result<(NaiveTime, &str), ParseError> {
    if line.len() < TIMESTAMP_WIDTH {
        return Err(ParseError::new(
            line_number,
            format!(
                "line is shorter than the {}-character timestamp: {:?}",
                TIMESTAMP_WIDTH, line
            ),
        ));
    }

    let stamp = line.get(..TIMESTAMP_WIDTH).ok_or_else(|| {
        ParseError::new(line_number, format!("invalid timestamp in {:?}", line))
    })?;

    if !has_timestamp_shape(stamp) {
        return Err(ParseError::new(
            line_number,
            format!("invalid timestamp {:?}: expected HH:MM:SS", stamp),
        ));
    }

    let time = NaiveTime::parse_from_str(stamp, TIME_FORMAT).map_err(|e| {
        ParseError::new(line_number, format!("invalid timestamp {:?}: {}", stamp, e))
    })?;

    // chrono reads ":60" as a leap second
    if time.nanosecond() >= 1_000_000_000 {
        return Err(ParseError::new(
            line_number,
            format!("invalid timestamp {:?}: seconds out of range", stamp),
        ));
    }

    let mut rest = line[TIMESTAMP_WIDTH..].chars();
    for _ in 0..SEPARATOR_WIDTH {
        rest.next();
    }

    Ok((time, rest.as_str()))
}

/// Exactly two digits per field, colon separated
fn has_timestamp_shape(stamp: &str) -> bool {
    stamp.bytes().enumerate().all(|(i, b)| match i {
        2 | 5 => b == b':',
        _ => b.is_ascii_digit(),
    })
}

/// Parse chat lines into messages with offsets relative to the first line
///
/// All-or-nothing: the first bad line aborts the whole parse.
pub fn parse_messages<I, S>(lines: I) -> Result<Vec<ChatMessage>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    collect_messages(lines.into_iter().map(Ok::<S, ParseError>))
}

/// Shared parse loop for in-memory lines and fallible line readers
pub(crate) fn collect_messages<I, S, E>(lines: I) -> Result<Vec<ChatMessage>, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
    E: From<ParseError>,
{
    let mut messages = Vec::new();
    let mut origin: Option<NaiveTime> = None;
    let mut previous: Option<NaiveTime> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let (time, text) = parse_chat_line(line.as_ref(), line_number)?;

        // Only a time of day is known, so a log running past midnight
        // would go backwards. Reject instead of producing inverted cues.
        if let Some(prev) = previous {
            if time < prev {
                return Err(ParseError::new(
                    line_number,
                    format!(
                        "timestamp {} is earlier than {}; logs spanning midnight are not supported",
                        time, prev
                    ),
                )
                .into());
            }
        }

        let reference = *origin.get_or_insert(time);
        let offset = (time - reference).to_std().map_err(|_| {
            ParseError::new(
                line_number,
                format!("timestamp {} is earlier than the first message", time),
            )
        })?;

        previous = Some(time);
        messages.push(ChatMessage::new(offset, text));
    }

    debug!("Parsed {} chat messages", messages.len());
    Ok(messages)
}
