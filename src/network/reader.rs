//! Response Reader
//!
//! Reassembles one response frame from a transport that may hand back
//! any number of bytes per read.

use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};

use crate::config::Config;
use crate::error::{Result, SsipError};
use crate::protocol::is_frame_complete;

/// Accumulates transport reads until a full frame is buffered
///
/// The reader does not own the transport; the connection lends it for each
/// call so that the same stream can be written between reads.
#[derive(Debug)]
pub struct FrameReader {
    /// Bytes received so far for the frame in progress
    buffer: BytesMut,

    /// Scratch space for a single read
    chunk: Vec<u8>,

    /// Refuse to buffer more than this
    max_frame_size: usize,
}

impl FrameReader {
    pub fn new(chunk_size: usize, max_frame_size: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(chunk_size),
            chunk: vec![0u8; chunk_size.max(1)],
            max_frame_size,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.recv_buffer_size, config.max_response_size)
    }

    /// Read exactly one frame
    ///
    /// Blocks until the frame is complete. A closed transport or a read
    /// error fails the call and drops whatever was buffered.
    pub fn read_frame<R: Read>(&mut self, source: &mut R) -> Result<Bytes> {
        self.buffer.clear();

        loop {
            let n = match source.read(&mut self.chunk) {
                Ok(0) => {
                    let buffered = self.buffer.len();
                    self.buffer.clear();
                    tracing::debug!("Transport closed with {} bytes of partial frame", buffered);
                    return Err(SsipError::ConnectionClosed);
                }
                Ok(n) => n,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buffer.clear();
                    return Err(SsipError::Io(e));
                }
            };

            if self.buffer.len() + n > self.max_frame_size {
                self.buffer.clear();
                return Err(SsipError::MalformedResponse(format!(
                    "response exceeds {} bytes",
                    self.max_frame_size
                )));
            }

            self.buffer.extend_from_slice(&self.chunk[..n]);

            if is_frame_complete(&self.buffer) {
                tracing::trace!("Received frame of {} bytes", self.buffer.len());
                return Ok(self.buffer.split().freeze());
            }
        }
    }

    /// Bytes of an unfinished frame currently held
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}
