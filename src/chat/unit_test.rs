use crate::chat::{parse_chat_line, parse_messages, read_messages_from_reader, ChatMessage};
use crate::errors::ChatSrtError;
use std::io::Cursor;
use std::time::Duration;

#[cfg(test)]
mod test_helpers {
    pub const SHORT_CHAT: [&str; 3] = [
        "10:00:00, hi there",
        "10:00:05, how are you",
        "10:00:09, bye",
    ];
}

#[test]
fn test_parse_short_chat() {
    use test_helpers::*;
    let messages = parse_messages(SHORT_CHAT).unwrap();
    assert_eq!(
        messages,
        vec![
            ChatMessage::new(Duration::from_secs(0), "hi there"),
            ChatMessage::new(Duration::from_secs(5), "how are you"),
            ChatMessage::new(Duration::from_secs(9), "bye"),
        ]
    );
}

#[test]
fn test_first_message_is_origin() {
    let messages = parse_messages(["23:15:42, late night"]).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].offset, Duration::ZERO);
}

#[test]
fn test_empty_input_yields_no_messages() {
    let messages = parse_messages(Vec::<String>::new()).unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_offsets_cross_hours() {
    let messages = parse_messages(["09:59:58, a", "10:00:03, b", "11:00:03, c"]).unwrap();
    assert_eq!(messages[1].offset, Duration::from_secs(5));
    assert_eq!(messages[2].offset, Duration::from_secs(3605));
}

#[test]
fn test_equal_timestamps_are_kept() {
    let messages = parse_messages(["10:00:00, a", "10:00:00, b"]).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].offset, Duration::ZERO);
    assert_eq!(messages[1].text, "b");
}

#[test]
fn test_body_keeps_everything_after_separator() {
    let (time, body) = parse_chat_line("12:34:56: <bob>  spaced,  text ", 1).unwrap();
    assert_eq!(time.to_string(), "12:34:56");
    assert_eq!(body, "<bob>  spaced,  text ");
}

#[test]
fn test_line_ending_inside_separator_has_empty_body() {
    let (_, body) = parse_chat_line("10:00:00", 1).unwrap();
    assert_eq!(body, "");
    let (_, body) = parse_chat_line("10:00:00,", 1).unwrap();
    assert_eq!(body, "");
    let (_, body) = parse_chat_line("10:00:00, ", 1).unwrap();
    assert_eq!(body, "");
}

#[test]
fn test_multibyte_separator_and_body() {
    let (_, body) = parse_chat_line("10:00:00→ olá, você", 1).unwrap();
    assert_eq!(body, "olá, você");
}

#[test]
fn test_malformed_timestamp_is_rejected() {
    let err = parse_messages(["10:00:00, ok", "bad-time,,hello"]).unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("invalid timestamp"), "{}", err);
}

#[test]
fn test_short_line_is_rejected() {
    let err = parse_messages(["10:00"]).unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.message.contains("shorter"), "{}", err);

    let err = parse_messages(["10:00:00, ok", ""]).unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn test_multibyte_inside_timestamp_does_not_panic() {
    let err = parse_messages(["10:00:0é, hi"]).unwrap_err();
    assert_eq!(err.line, 1);
}

#[test]
fn test_out_of_range_time_is_rejected() {
    assert!(parse_messages(["25:00:00, nope"]).is_err());
    assert!(parse_messages(["10:61:00, nope"]).is_err());
}

#[test]
fn test_leap_second_is_rejected() {
    let err = parse_messages(["10:00:00, a", "10:00:60, b", "10:01:00, c"]).unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("seconds out of range"), "{}", err);
}

#[test]
fn test_padded_or_unpadded_fields_are_rejected() {
    let err = parse_messages([" 9:00:00, a", "09:00:05, b"]).unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.message.contains("HH:MM:SS"), "{}", err);

    assert!(parse_messages(["9:00:00,  a"]).is_err());
    assert!(parse_messages(["09-00-00, a"]).is_err());
    assert!(parse_messages(["+9:00:00, a"]).is_err());
}

#[test]
fn test_backwards_timestamp_is_rejected() {
    let err = parse_messages(["23:59:50, almost", "00:00:10, next day"]).unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("midnight"), "{}", err);
}

#[test]
fn test_reader_accepts_crlf() {
    let input = "10:00:00, one\r\n10:00:02, two\r\n";
    let messages = read_messages_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "one");
    assert_eq!(messages[1].text, "two");
    assert_eq!(messages[1].offset, Duration::from_secs(2));
}

#[test]
fn test_reader_reports_parse_error() {
    let input = "10:00:00, one\nnot a time at all\n";
    match read_messages_from_reader(Cursor::new(input)) {
        Err(ChatSrtError::Parse(err)) => assert_eq!(err.line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_reader_reports_invalid_utf8_as_io_error() {
    let input: &[u8] = b"10:00:00, \xff\xfe\n";
    assert!(matches!(
        read_messages_from_reader(Cursor::new(input)),
        Err(ChatSrtError::Other(_))
    ));
}
