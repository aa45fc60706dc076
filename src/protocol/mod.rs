//! Protocol Module
//!
//! Defines the SSIP wire format spoken between client and speech server.
//!
//! ## Protocol Format (line-oriented text)
//!
//! ### Command Format
//! ```text
//! <VERB> <arg1> <arg2> ...\r\n
//! ```
//!
//! ### Data Block Format
//! ```text
//! <escaped payload>\r\n.\r\n
//! ```
//! Inside the payload every `\r\n.\r\n` is sent as `\r\n..\r\n`.
//!
//! ### Response Format
//! ```text
//! ┌──────────┬─────────┬──────────────────────┐
//! │ Code (3) │ Sep (1) │      Text ... \r\n   │
//! └──────────┴─────────┴──────────────────────┘
//! ```
//! - Sep `-`: continuation line, text becomes one data entry
//! - Sep ` `: final line, text becomes the message and ends the frame
//!
//! All lines of one frame carry the same code. Only the status class
//! (`code / 100`) is interpreted here: 2 is success, anything else is a
//! rejection.

mod command;
mod data;
mod response;
mod codec;

pub use command::{encode_command, Command};
pub use data::{encode_data, escape_data};
pub use response::{Response, ResponseLine, Separator, StatusClass};
pub use codec::{classify, is_frame_complete, parse_line, parse_response, Origin};

/// Line terminator
pub const NEWLINE: &str = "\r\n";

/// Marks the end of a data block
pub const END_OF_DATA: &str = "\r\n.\r\n";

/// What an `END_OF_DATA` inside a payload is sent as
pub const END_OF_DATA_ESCAPED: &str = "\r\n..\r\n";

/// Width of the status code at the start of every response line
pub const CODE_LEN: usize = 3;
