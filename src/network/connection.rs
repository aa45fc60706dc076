//! Client Connection
//!
//! Owns one transport stream and runs the request/response cycle on it.
//! Every send is followed by a blocking read of exactly one response frame,
//! so at most one request is ever in flight.

use std::io::{Read, Write};

use crate::config::Config;
use crate::error::{Result, SsipError};
use crate::protocol::{classify, encode_data, parse_response, Command, Origin, Response};

use super::FrameReader;

/// A client connection to a speech server
///
/// The transport is anything that reads and writes bytes in order, usually
/// a `TcpStream` or `UnixStream` the caller already connected.
pub struct Connection<T: Read + Write> {
    /// Transport stream (owned until close)
    transport: T,

    /// Reassembly state for incoming frames
    frames: FrameReader,

    config: Config,
}

impl<T: Read + Write> Connection<T> {
    /// Wrap a connected transport without sending anything
    pub fn new(transport: T, config: Config) -> Self {
        let frames = FrameReader::from_config(&config);
        Self {
            transport,
            frames,
            config,
        }
    }

    /// Wrap a connected transport and identify this client to the server
    pub fn open(transport: T, config: Config) -> Result<Self> {
        let mut connection = Self::new(transport, config);
        connection.identify()?;
        tracing::debug!("Connection opened as {}", connection.config.identity());
        Ok(connection)
    }

    /// Send `SET CLIENT_NAME <client>:<connection>`
    pub fn identify(&mut self) -> Result<Response> {
        let command = Command::new("SET")
            .arg("CLIENT_NAME")
            .arg(self.config.identity());
        self.send_command(&command)
    }

    /// Send a command line and wait for its response
    ///
    /// A non-2xx reply becomes `SsipError::CommandRejected` carrying the
    /// line as sent.
    pub fn send_command(&mut self, command: &Command) -> Result<Response> {
        let line = command.encode();
        tracing::trace!("Sending command: {}", command);

        self.transmit(line.as_bytes())?;
        let response = self.receive()?;

        classify(response, Origin::Command(&line)).map_err(|e| {
            tracing::debug!("Command {} rejected: {}", command, e);
            e
        })
    }

    /// Send a data block and wait for its response
    ///
    /// A non-2xx reply becomes `SsipError::DataRejected` carrying the
    /// escaped payload.
    pub fn send_data(&mut self, payload: &str) -> Result<Response> {
        let (escaped, block) = encode_data(payload);
        tracing::trace!("Sending data block of {} bytes", block.len());

        self.transmit(&block)?;
        let response = self.receive()?;

        classify(response, Origin::Data(&escaped)).map_err(|e| {
            tracing::debug!("Data block rejected: {}", e);
            e
        })
    }

    /// Release the transport
    ///
    /// With `polite_close` set, `BYE` is sent first and its reply awaited.
    /// The transport is dropped either way.
    pub fn close(mut self) -> Result<()> {
        if self.config.polite_close {
            self.send_command(&Command::new("BYE"))?;
        }
        self.transport.flush()?;
        tracing::debug!("Connection {} closed", self.config.identity());
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the transport
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the transport
    ///
    /// Writing to it directly breaks request/response pairing.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Take back the transport without closing it
    pub fn into_inner(self) -> T {
        self.transport
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<()> {
        self.transport.write_all(bytes)?;
        self.transport.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<Response> {
        let frame = self.frames.read_frame(&mut self.transport)?;

        parse_response(&frame)
            .map(|response| {
                tracing::trace!("Received response: {} {}", response.code, response.message);
                response
            })
            .map_err(|e| {
                if let SsipError::MalformedResponse(ref reason) = e {
                    tracing::warn!("Malformed response from server: {}", reason);
                }
                e
            })
    }
}
