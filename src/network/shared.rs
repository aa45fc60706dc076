//! Shared Connection
//!
//! Lets several threads use one connection. Responses are matched to
//! requests only by order, so every round trip runs under one lock.

use std::io::{Read, Write};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::error::Result;
use crate::protocol::{Command, Response};

use super::Connection;

/// Cloneable handle to a mutex-guarded connection
///
/// ## Concurrency:
/// - `send_command` / `send_data` hold the lock for one full round trip
/// - `lock()` holds it across several round trips (e.g. `SET PRIORITY`,
///   `SPEAK`, then the data block)
pub struct SharedConnection<T: Read + Write> {
    inner: Arc<Mutex<Connection<T>>>,
}

impl<T: Read + Write> Clone for SharedConnection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Read + Write> SharedConnection<T> {
    pub fn new(connection: Connection<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(connection)),
        }
    }

    pub fn send_command(&self, command: &Command) -> Result<Response> {
        self.inner.lock().send_command(command)
    }

    pub fn send_data(&self, payload: &str) -> Result<Response> {
        self.inner.lock().send_data(payload)
    }

    /// Exclusive access for a multi-step exchange
    pub fn lock(&self) -> MutexGuard<'_, Connection<T>> {
        self.inner.lock()
    }

    /// Recover the connection once every other handle is dropped
    ///
    /// Returns `None` while clones are still alive.
    pub fn into_inner(self) -> Option<Connection<T>> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}
