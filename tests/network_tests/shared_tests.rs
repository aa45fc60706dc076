//! Tests for SharedConnection
//!
//! These tests verify:
//! - Round trips from several threads stay paired with their replies
//! - `lock()` keeps a multi-step exchange together
//! - The connection is recovered once handles are dropped

#[path = "../common/mod.rs"]
mod common;

use std::thread;

use common::MockTransport;
use ssipclient::{Command, Config, Connection, SharedConnection};

const THREADS: usize = 8;
const PER_THREAD: usize = 25;

#[test]
fn test_concurrent_commands_are_serialized() {
    let replies: Vec<String> = (0..THREADS * PER_THREAD)
        .map(|i| format!("250-item {}\r\n250 OK\r\n", i))
        .collect();
    let transport = MockTransport::new(replies).with_chunks(&[5, 2, 9]);
    let shared = SharedConnection::new(Connection::new(transport, Config::default()));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    let response = shared.send_command(&Command::new("LIST")).unwrap();
                    assert_eq!(response.code, 250);
                    assert_eq!(response.data.len(), 1);
                    assert_eq!(response.message, "OK");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let connection = shared.into_inner().unwrap();
    let transport = connection.into_inner();
    assert_eq!(transport.replies_left(), 0);
    assert_eq!(transport.written_str(), "LIST\r\n".repeat(THREADS * PER_THREAD));
}

#[test]
fn test_lock_holds_speak_sequence() {
    let transport = MockTransport::new([
        "230 OK PRIORITY SET\r\n",
        "230 OK RECEIVING DATA\r\n",
        "225 OK MESSAGE QUEUED\r\n",
    ]);
    let shared = SharedConnection::new(Connection::new(transport, Config::default()));

    {
        let mut conn = shared.lock();
        conn.send_command(&Command::new("SET").arg("PRIORITY").arg(3)).unwrap();
        conn.send_command(&Command::new("SPEAK")).unwrap();
        let response = conn.send_data("hello").unwrap();
        assert_eq!(response.code, 225);
    }

    let transport = shared.into_inner().unwrap().into_inner();
    assert_eq!(
        transport.written_str(),
        "SET PRIORITY 3\r\nSPEAK\r\nhello\r\n.\r\n"
    );
}

#[test]
fn test_into_inner_requires_last_handle() {
    let transport = MockTransport::new(Vec::<&str>::new());
    let shared = SharedConnection::new(Connection::new(transport, Config::default()));
    let other = shared.clone();

    assert!(shared.into_inner().is_none());
    assert!(other.into_inner().is_some());
}
