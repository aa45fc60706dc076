//! Codec Tests
//!
//! Tests for response framing, parsing and classification.

use ssipclient::protocol::{
    classify, is_frame_complete, parse_line, parse_response, Origin, Response, Separator,
    StatusClass,
};
use ssipclient::SsipError;

fn assert_malformed<T: std::fmt::Debug>(result: Result<T, SsipError>) {
    match result {
        Err(SsipError::MalformedResponse(_)) => {}
        other => panic!("Expected MalformedResponse, got {:?}", other),
    }
}

// =============================================================================
// Line Parsing Tests
// =============================================================================

#[test]
fn test_parse_final_line() {
    let line = parse_line("230 OK").unwrap();
    assert_eq!(line.code, 230);
    assert_eq!(line.separator, Separator::Final);
    assert_eq!(line.text, "OK");
    assert!(line.is_final());
}

#[test]
fn test_parse_continuation_line() {
    let line = parse_line("249-client one").unwrap();
    assert_eq!(line.code, 249);
    assert_eq!(line.separator, Separator::Continuation);
    assert_eq!(line.text, "client one");
    assert!(!line.is_final());
}

#[test]
fn test_parse_line_with_empty_text() {
    let line = parse_line("250 ").unwrap();
    assert_eq!(line.text, "");
}

#[test]
fn test_parse_line_keeps_inner_separators() {
    let line = parse_line("250-a - b  c").unwrap();
    assert_eq!(line.text, "a - b  c");
}

#[test]
fn test_parse_line_too_short() {
    assert_malformed(parse_line(""));
    assert_malformed(parse_line("25"));
    assert_malformed(parse_line("250"));
}

#[test]
fn test_parse_line_bad_code_characters() {
    assert_malformed(parse_line("2#0 OK"));
    assert_malformed(parse_line(" 20 OK"));
}

#[test]
fn test_parse_line_alphanumeric_but_not_numeric() {
    assert_malformed(parse_line("2a0 OK"));
}

#[test]
fn test_parse_line_multibyte_in_code() {
    assert_malformed(parse_line("2é0 OK"));
}

#[test]
fn test_parse_line_bad_separator() {
    assert_malformed(parse_line("250+OK"));
    assert_malformed(parse_line("250:OK"));
}

#[test]
fn test_separator_chars() {
    assert_eq!(Separator::from_char('-'), Some(Separator::Continuation));
    assert_eq!(Separator::from_char(' '), Some(Separator::Final));
    assert_eq!(Separator::from_char('.'), None);
    assert_eq!(Separator::Continuation.as_char(), '-');
    assert_eq!(Separator::Final.as_char(), ' ');
}

// =============================================================================
// Frame Parsing Tests
// =============================================================================

#[test]
fn test_parse_multi_line_response() {
    let response = parse_response(b"250-first\r\n250-second\r\n250 done\r\n").unwrap();
    assert_eq!(response.code, 250);
    assert_eq!(response.message, "done");
    assert_eq!(response.data, vec!["first", "second"]);
}

#[test]
fn test_parse_single_line_response() {
    let response = parse_response(b"500 ERR INVALID\r\n").unwrap();
    assert_eq!(response.code, 500);
    assert_eq!(response.message, "ERR INVALID");
    assert!(response.data.is_empty());
}

#[test]
fn test_parse_inconsistent_codes() {
    assert_malformed(parse_response(b"250-a\r\n251 b\r\n"));
}

#[test]
fn test_parse_missing_terminator() {
    assert_malformed(parse_response(b"250 OK"));
}

#[test]
fn test_parse_empty_frame() {
    assert_malformed(parse_response(b""));
    assert_malformed(parse_response(b"\r\n"));
}

#[test]
fn test_parse_no_final_line() {
    assert_malformed(parse_response(b"250-a\r\n250-b\r\n"));
}

#[test]
fn test_parse_bad_line_inside_frame() {
    assert_malformed(parse_response(b"250-a\r\n25\r\n250 ok\r\n"));
}

#[test]
fn test_parse_invalid_utf8() {
    assert_malformed(parse_response(b"250 \xff\xfe\r\n"));
}

#[test]
fn test_parse_preserves_data_order() {
    let frame = b"249-3 speechd 1\r\n249-1 python:001 0\r\n249-2 rust:002 1\r\n249 OK\r\n";
    let response = parse_response(frame).unwrap();
    assert_eq!(
        response.data,
        vec!["3 speechd 1", "1 python:001 0", "2 rust:002 1"]
    );
}

// =============================================================================
// Frame Detection Tests
// =============================================================================

#[test]
fn test_frame_complete_on_final_line() {
    assert!(is_frame_complete(b"230 OK\r\n"));
    assert!(is_frame_complete(b"250-a\r\n250-b\r\n250 done\r\n"));
}

#[test]
fn test_frame_incomplete_after_continuation() {
    assert!(!is_frame_complete(b"250-a\r\n"));
    assert!(!is_frame_complete(b"250-a\r\n250-b\r\n"));
}

#[test]
fn test_frame_incomplete_without_terminator() {
    assert!(!is_frame_complete(b""));
    assert!(!is_frame_complete(b"\r"));
    assert!(!is_frame_complete(b"230 OK"));
    assert!(!is_frame_complete(b"230 OK\r"));
    assert!(!is_frame_complete(b"250-a\r\n250 do"));
}

#[test]
fn test_frame_with_final_line_split_mid_terminator() {
    let frame = b"250-a\r\n250 done\r\n";
    for cut in 0..frame.len() {
        assert!(!is_frame_complete(&frame[..cut]), "cut at {}", cut);
    }
    assert!(is_frame_complete(frame));
}

#[test]
fn test_frame_with_short_last_line_ends() {
    // Terminated but unparseable: framing stops so parsing can fail
    assert!(is_frame_complete(b"25\r\n"));
    assert!(is_frame_complete(b"\r\n"));
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_status_class() {
    assert_eq!(StatusClass::from_code(230), StatusClass(2));
    assert!(StatusClass::from_code(299).is_success());
    assert!(!StatusClass::from_code(199).is_success());
    assert!(!StatusClass::from_code(300).is_success());
}

#[test]
fn test_classify_success() {
    let response = Response::new(230, "OK", vec![]);
    let result = classify(response.clone(), Origin::Command("SET PRIORITY 2\r\n")).unwrap();
    assert_eq!(result, response);
}

#[test]
fn test_classify_command_rejected() {
    let response = Response::new(401, "ERR NOT A NUMBER", vec![]);
    let err = classify(response, Origin::Command("SET RATE x\r\n")).unwrap_err();

    match err {
        SsipError::CommandRejected {
            code,
            ref message,
            ref command,
        } => {
            assert_eq!(code, 401);
            assert_eq!(message, "ERR NOT A NUMBER");
            assert_eq!(command, "SET RATE x\r\n");
        }
        ref other => panic!("Expected CommandRejected, got {:?}", other),
    }
    assert_eq!(err.code(), Some(401));
    assert!(err.is_rejection());
}

#[test]
fn test_classify_data_rejected() {
    let response = Response::new(401, "ERR", vec![]);
    let err = classify(response, Origin::Data("Hello\r\n..\r\nWorld")).unwrap_err();

    match err {
        SsipError::DataRejected { code, message, data } => {
            assert_eq!(code, 401);
            assert_eq!(message, "ERR");
            assert_eq!(data, "Hello\r\n..\r\nWorld");
        }
        other => panic!("Expected DataRejected, got {:?}", other),
    }
}

#[test]
fn test_classify_non_2xx_classes() {
    for code in [100, 199, 300, 404, 500, 999] {
        let response = Response::new(code, "x", vec![]);
        assert!(classify(response, Origin::Command("NOOP\r\n")).is_err(), "code {}", code);
    }
}
