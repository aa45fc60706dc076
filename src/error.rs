//! Error types for ssipclient
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SsipError
pub type Result<T> = std::result::Result<T, SsipError>;

/// Unified error type for ssipclient operations
#[derive(Debug, Error)]
pub enum SsipError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed before a complete response arrived")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    // -------------------------------------------------------------------------
    // Server Rejections
    // -------------------------------------------------------------------------
    /// Non-2xx reply to a command line.
    #[error("{code}: {message}")]
    CommandRejected {
        code: u16,
        message: String,
        /// The command line as sent, terminator included
        command: String,
    },

    /// Non-2xx reply to a data block.
    #[error("{code}: {message}")]
    DataRejected {
        code: u16,
        message: String,
        /// The escaped payload as sent, without the end-of-data marker
        data: String,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SsipError {
    /// Server status code, for rejections
    pub fn code(&self) -> Option<u16> {
        match self {
            SsipError::CommandRejected { code, .. } | SsipError::DataRejected { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }

    /// Server message, for rejections
    pub fn message(&self) -> Option<&str> {
        match self {
            SsipError::CommandRejected { message, .. }
            | SsipError::DataRejected { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// True when the server answered with a non-2xx status
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SsipError::CommandRejected { .. } | SsipError::DataRejected { .. }
        )
    }

    /// True when the reply could not be framed or parsed
    ///
    /// A transport closed mid-frame counts as malformed: the frame never
    /// completed.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            SsipError::MalformedResponse(_) | SsipError::ConnectionClosed
        )
    }
}
