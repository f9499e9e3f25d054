// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use fts_wire::{Args, ProtocolError, Reply};
use thiserror::Error;

/// Errors from acquiring or using a connection
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connect to {address} failed: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("connection already closed")]
    Closed,
}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        TransportError::Protocol(ProtocolError::Io(e))
    }
}

/// One server connection.
///
/// `send` only queues a command; nothing is guaranteed to reach the server
/// until `flush`. Replies come back from `receive` in send order.
#[async_trait]
pub trait Connection: Send {
    async fn send(&mut self, command: &str, args: &Args) -> Result<(), TransportError>;

    async fn flush(&mut self) -> Result<(), TransportError>;

    async fn receive(&mut self) -> Result<Reply, TransportError>;

    /// Close the connection. Queued but unread replies are discarded.
    async fn close(&mut self) -> Result<(), TransportError>;

    /// Send one command and wait for its reply
    async fn call(&mut self, command: &str, args: &Args) -> Result<Reply, TransportError> {
        self.send(command, args).await?;
        self.flush().await?;
        self.receive().await
    }
}

/// Source of connections. Reconnect and health policy belong to the
/// implementation; callers acquire one connection per logical call.
#[async_trait]
pub trait ConnectionPool: Clone + Send + Sync + 'static {
    type Conn: Connection + 'static;

    async fn acquire(&self) -> Result<Self::Conn, TransportError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use std::collections::{HashMap, VecDeque};
    use std::io;
    use std::sync::Arc;

    use async_trait::async_trait;
    use fts_wire::{Args, ProtocolError, Reply};
    use parking_lot::Mutex;

    use super::{Connection, ConnectionPool, TransportError};

    /// Recorded command
    #[derive(Debug, Clone, PartialEq)]
    pub struct SentCommand {
        pub command: String,
        pub args: Vec<String>,
    }

    #[derive(Default)]
    struct FakeState {
        /// Receive outcomes in order; `Err` holds an injected failure message
        replies: VecDeque<Result<Reply, String>>,
        sent: Vec<SentCommand>,
        /// Fail the nth send over the pool's lifetime
        send_failures: HashMap<usize, String>,
        send_attempts: usize,
        flush_failure: Option<String>,
        acquire_failure: Option<String>,
        flushes: usize,
        acquired: usize,
        closed: usize,
    }

    fn injected(msg: &str) -> TransportError {
        TransportError::Protocol(ProtocolError::Io(io::Error::other(msg.to_string())))
    }

    /// Scripted in-memory pool. Every connection it hands out shares one
    /// script and one record of sent commands.
    #[derive(Clone, Default)]
    pub struct FakePool {
        inner: Arc<Mutex<FakeState>>,
    }

    impl FakePool {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the next reply
        pub fn reply(&self, reply: Reply) -> &Self {
            self.inner.lock().replies.push_back(Ok(reply));
            self
        }

        /// Queue a transport failure for the next receive
        pub fn receive_error(&self, msg: &str) -> &Self {
            self.inner.lock().replies.push_back(Err(msg.to_string()));
            self
        }

        /// Fail the `n`th send (zero-based, counted across all connections)
        pub fn fail_send_at(&self, n: usize, msg: &str) -> &Self {
            self.inner.lock().send_failures.insert(n, msg.to_string());
            self
        }

        pub fn fail_flush(&self, msg: &str) -> &Self {
            self.inner.lock().flush_failure = Some(msg.to_string());
            self
        }

        pub fn fail_acquire(&self, msg: &str) -> &Self {
            self.inner.lock().acquire_failure = Some(msg.to_string());
            self
        }

        pub fn sent(&self) -> Vec<SentCommand> {
            self.inner.lock().sent.clone()
        }

        /// Verbs of the sent commands, in order
        pub fn commands(&self) -> Vec<String> {
            self.inner.lock().sent.iter().map(|c| c.command.clone()).collect()
        }

        pub fn flushes(&self) -> usize {
            self.inner.lock().flushes
        }

        pub fn acquired(&self) -> usize {
            self.inner.lock().acquired
        }

        pub fn closed(&self) -> usize {
            self.inner.lock().closed
        }

        /// Scripted outcomes not yet consumed
        pub fn pending_replies(&self) -> usize {
            self.inner.lock().replies.len()
        }
    }

    #[async_trait]
    impl ConnectionPool for FakePool {
        type Conn = FakeConnection;

        async fn acquire(&self) -> Result<FakeConnection, TransportError> {
            let mut state = self.inner.lock();
            if let Some(msg) = &state.acquire_failure {
                return Err(TransportError::Connect {
                    address: "fake".to_string(),
                    source: io::Error::new(io::ErrorKind::ConnectionRefused, msg.clone()),
                });
            }
            state.acquired += 1;
            Ok(FakeConnection { inner: Arc::clone(&self.inner), closed: false })
        }
    }

    /// Connection handed out by [`FakePool`]
    pub struct FakeConnection {
        inner: Arc<Mutex<FakeState>>,
        closed: bool,
    }

    #[async_trait]
    impl Connection for FakeConnection {
        async fn send(&mut self, command: &str, args: &Args) -> Result<(), TransportError> {
            if self.closed {
                return Err(TransportError::Closed);
            }
            let mut state = self.inner.lock();
            let attempt = state.send_attempts;
            state.send_attempts += 1;
            if let Some(msg) = state.send_failures.remove(&attempt) {
                return Err(injected(&msg));
            }
            state.sent.push(SentCommand { command: command.to_string(), args: args.to_strings() });
            Ok(())
        }

        async fn flush(&mut self) -> Result<(), TransportError> {
            if self.closed {
                return Err(TransportError::Closed);
            }
            let mut state = self.inner.lock();
            if let Some(msg) = state.flush_failure.take() {
                return Err(injected(&msg));
            }
            state.flushes += 1;
            Ok(())
        }

        async fn receive(&mut self) -> Result<Reply, TransportError> {
            if self.closed {
                return Err(TransportError::Closed);
            }
            match self.inner.lock().replies.pop_front() {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(msg)) => Err(injected(&msg)),
                None => Err(TransportError::Protocol(ProtocolError::ConnectionClosed)),
            }
        }

        async fn close(&mut self) -> Result<(), TransportError> {
            if !self.closed {
                self.closed = true;
                self.inner.lock().closed += 1;
            }
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeConnection, FakePool, SentCommand};

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
