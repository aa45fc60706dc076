//! Network Module
//!
//! Client side I/O over a caller-supplied byte stream.
//!
//! ## Architecture
//! - `FrameReader` reassembles one response frame per call
//! - `Connection` owns the stream and alternates send / receive
//! - `SharedConnection` serializes access for multi-threaded callers

mod reader;
mod connection;
mod shared;

pub use reader::FrameReader;
pub use connection::Connection;
pub use shared::SharedConnection;
