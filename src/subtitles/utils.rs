use crate::errors::SubtitleError;
use std::time::Duration;

/// Format timestamp in SRT format
pub fn format_timestamp(offset: Duration) -> String {
    let total_millis = offset.as_millis();
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Parse an SRT timestamp (`HH:MM:SS,mmm`, `.` also accepted before the millis)
pub fn parse_timestamp(value: &str) -> Result<Duration, SubtitleError> {
    let invalid = || SubtitleError::new(format!("invalid SRT timestamp: {:?}", value));

    let mut parts = value.trim().splitn(3, ':');
    let hours = parts.next().ok_or_else(invalid)?;
    let minutes = parts.next().ok_or_else(invalid)?;
    let rest = parts.next().ok_or_else(invalid)?;
    let (seconds, millis) = rest
        .split_once(',')
        .or_else(|| rest.split_once('.'))
        .ok_or_else(invalid)?;

    let number = |digits: &str, max_len: usize| -> Result<u64, SubtitleError> {
        if digits.is_empty()
            || digits.len() > max_len
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        digits.parse::<u64>().map_err(|_| invalid())
    };

    let hours = number(hours, 4)?;
    let minutes = number(minutes, 2)?;
    let seconds = number(seconds, 2)?;
    if millis.len() != 3 {
        return Err(invalid());
    }
    let millis = number(millis, 3)?;
    if minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    Ok(Duration::from_millis(
        ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
    ))
}
