//! Protocol codec
//!
//! Framing, parsing and classification of server responses.
//!
//! ## Response Line Layout
//! ```text
//! 250-first\r\n     code "250", sep '-', text "first"
//! 250 done\r\n      code "250", sep ' ', text "done"
//! ```

use crate::error::{Result, SsipError};
use super::{Response, ResponseLine, Separator, CODE_LEN, NEWLINE};

/// Offset of the separator within a line
const SEPARATOR_POS: usize = CODE_LEN;

/// Offset where the line text starts
const TEXT_POS: usize = SEPARATOR_POS + 1;

// =============================================================================
// Framing
// =============================================================================

/// Check whether `buffer` holds one complete response frame
///
/// A frame is complete when the buffer ends with `\r\n` and the line before
/// that terminator is not a continuation line. A terminated line too short
/// to carry a separator, or carrying an unknown one, also ends the frame so
/// that parsing reports it instead of waiting for bytes that never come.
pub fn is_frame_complete(buffer: &[u8]) -> bool {
    let newline = NEWLINE.as_bytes();

    if buffer.len() < newline.len() || !buffer.ends_with(newline) {
        return false;
    }

    let body = &buffer[..buffer.len() - newline.len()];
    let start = body
        .windows(newline.len())
        .rposition(|w| w == newline)
        .map(|pos| pos + newline.len())
        .unwrap_or(0);

    body[start..].get(SEPARATOR_POS) != Some(&b'-')
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse one response line (terminator already stripped)
pub fn parse_line(line: &str) -> Result<ResponseLine> {
    if line.len() < TEXT_POS {
        return Err(SsipError::MalformedResponse(format!(
            "line too short: {:?}",
            line
        )));
    }

    let code_str = line
        .get(..CODE_LEN)
        .filter(|code| code.chars().all(|c| c.is_ascii_alphanumeric()))
        .ok_or_else(|| {
            SsipError::MalformedResponse(format!("invalid status code in line: {:?}", line))
        })?;

    let code = code_str.parse::<u16>().map_err(|_| {
        SsipError::MalformedResponse(format!("non-numeric status code: {:?}", code_str))
    })?;

    let separator = line[SEPARATOR_POS..]
        .chars()
        .next()
        .and_then(Separator::from_char)
        .ok_or_else(|| {
            SsipError::MalformedResponse(format!("invalid separator in line: {:?}", line))
        })?;

    // Both separators are ASCII, so TEXT_POS is a char boundary
    let text = line[TEXT_POS..].to_string();

    Ok(ResponseLine {
        code,
        separator,
        text,
    })
}

/// Decode a complete response frame
///
/// Continuation lines fill `data` in order; the first final line supplies
/// the message and ends parsing.
pub fn parse_response(frame: &[u8]) -> Result<Response> {
    let text = std::str::from_utf8(frame)
        .map_err(|e| SsipError::MalformedResponse(format!("response is not UTF-8: {}", e)))?;

    let body = text.strip_suffix(NEWLINE).ok_or_else(|| {
        SsipError::MalformedResponse("response frame is not terminated by CRLF".to_string())
    })?;

    let mut code = None;
    let mut data = Vec::new();

    for raw in body.split(NEWLINE) {
        let line = parse_line(raw)?;

        match code {
            None => code = Some(line.code),
            Some(expected) if expected != line.code => {
                return Err(SsipError::MalformedResponse(format!(
                    "status code changed within one response: expected {}, got {}",
                    expected, line.code
                )));
            }
            Some(_) => {}
        }

        match line.separator {
            Separator::Continuation => data.push(line.text),
            Separator::Final => return Ok(Response::new(line.code, line.text, data)),
        }
    }

    Err(SsipError::MalformedResponse(
        "response frame has no final line".to_string(),
    ))
}

// =============================================================================
// Classification
// =============================================================================

/// What was sent to provoke a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'a> {
    /// A command line, terminator included
    Command(&'a str),

    /// An escaped data payload
    Data(&'a str),
}

/// Turn a non-2xx response into the matching rejection
pub fn classify(response: Response, origin: Origin<'_>) -> Result<Response> {
    if response.is_success() {
        return Ok(response);
    }

    let Response { code, message, .. } = response;
    Err(match origin {
        Origin::Command(command) => SsipError::CommandRejected {
            code,
            message,
            command: command.to_string(),
        },
        Origin::Data(data) => SsipError::DataRejected {
            code,
            message,
            data: data.to_string(),
        },
    })
}
