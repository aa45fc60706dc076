//! Configuration for ssipclient
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, SsipError};

/// Configuration for a single client connection
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Reader Configuration
    // -------------------------------------------------------------------------
    /// Bytes requested from the transport per read
    pub recv_buffer_size: usize,

    /// Upper bound on one buffered response frame (in bytes)
    pub max_response_size: usize,

    // -------------------------------------------------------------------------
    // Identification
    // -------------------------------------------------------------------------
    /// Client part of `SET CLIENT_NAME <client>:<connection>`
    pub client_name: String,

    /// Connection part of `SET CLIENT_NAME <client>:<connection>`
    pub connection_name: String,

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------
    /// Send `BYE` and wait for its reply before releasing the transport
    pub polite_close: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recv_buffer_size: 1024,
            max_response_size: 1024 * 1024, // 1 MB
            client_name: "rust".to_string(),
            connection_name: "001".to_string(),
            polite_close: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Identification string sent as the `CLIENT_NAME` value
    pub fn identity(&self) -> String {
        format!("{}:{}", self.client_name, self.connection_name)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the per-read chunk size (in bytes)
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.config.recv_buffer_size = size;
        self
    }

    /// Set the maximum size of one response frame (in bytes)
    pub fn max_response_size(mut self, size: usize) -> Self {
        self.config.max_response_size = size;
        self
    }

    /// Set the client name used for identification
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.config.client_name = name.into();
        self
    }

    /// Set the connection name used for identification
    pub fn connection_name(mut self, name: impl Into<String>) -> Self {
        self.config.connection_name = name.into();
        self
    }

    /// Send `BYE` on close
    pub fn polite_close(mut self, enabled: bool) -> Self {
        self.config.polite_close = enabled;
        self
    }

    pub fn build(self) -> Result<Config> {
        let config = self.config;

        if config.recv_buffer_size == 0 {
            return Err(SsipError::Config(
                "recv_buffer_size must be greater than zero".to_string(),
            ));
        }
        if config.max_response_size < config.recv_buffer_size {
            return Err(SsipError::Config(format!(
                "max_response_size ({}) is smaller than recv_buffer_size ({})",
                config.max_response_size, config.recv_buffer_size
            )));
        }

        let identity = config.identity();
        if identity.contains(char::is_whitespace) {
            return Err(SsipError::Config(format!(
                "client identity must not contain whitespace: {:?}",
                identity
            )));
        }

        Ok(config)
    }
}
