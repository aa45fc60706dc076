//! # ssipclient
//!
//! Client-side engine for SSIP, the text protocol used to drive a speech
//! output server:
//! - Command line encoding
//! - Data block escaping
//! - Multi-line response framing over arbitrarily chunked reads
//! - Response parsing and success / rejection classification
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ send_command / send_data
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Connection                               │
//! │              (one request in flight)                         │
//! └─────────┬───────────────────────────────────────▲───────────┘
//!           │                                       │
//!           ▼                                       │
//!   ┌───────────────┐                       ┌───────┴───────┐
//!   │ Command / Data│                       │   Classifier  │
//!   │   encoding    │                       └───────▲───────┘
//!   └───────┬───────┘                               │
//!           │                               ┌───────┴───────┐
//!           │                               │     Parser    │
//!           │                               └───────▲───────┘
//!           ▼                                       │
//!   ┌───────────────┐                       ┌───────┴───────┐
//!   │   Transport   │──────────────────────▶│  FrameReader  │
//!   └───────────────┘                       └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SsipError};
pub use config::Config;
pub use network::{Connection, SharedConnection};
pub use protocol::{Command, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ssipclient
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
