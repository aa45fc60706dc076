//! Data block encoding
//!
//! A data block follows a data-mode command (e.g. `SPEAK`) and runs until
//! the end-of-data marker. Payload text that happens to contain the marker
//! is escaped so the server does not end the block early.

use super::{END_OF_DATA, END_OF_DATA_ESCAPED, NEWLINE};

/// Escape every end-of-data marker inside `payload`
///
/// Replacement is repeated until no marker is left: in `\r\n.\r\n.\r\n` the
/// two markers share a newline, and a single pass would leave the second one
/// intact. A trailing lone-dot line is doubled too, since the terminator
/// appended after it would otherwise complete a marker one line early.
pub fn escape_data(payload: &str) -> String {
    let mut escaped = payload.replace(END_OF_DATA, END_OF_DATA_ESCAPED);
    while escaped.contains(END_OF_DATA) {
        escaped = escaped.replace(END_OF_DATA, END_OF_DATA_ESCAPED);
    }

    let lone_dot_tail = [NEWLINE, "."].concat();
    if escaped.ends_with(&lone_dot_tail) {
        escaped.push('.');
    }

    escaped
}

/// Encode a payload as a complete data block
///
/// Returns the escaped payload and the bytes to write (escaped payload
/// followed by the end-of-data marker). The escaped payload is what a
/// rejection reports back.
pub fn encode_data(payload: &str) -> (String, Vec<u8>) {
    let escaped = escape_data(payload);

    let mut block = Vec::with_capacity(escaped.len() + END_OF_DATA.len());
    block.extend_from_slice(escaped.as_bytes());
    block.extend_from_slice(END_OF_DATA.as_bytes());

    (escaped, block)
}
