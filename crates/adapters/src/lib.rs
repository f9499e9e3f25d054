// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fts-adapters: Connections to the search server

pub mod tcp;
pub mod transport;

pub use tcp::{TcpConnection, TcpPool};
pub use transport::{Connection, ConnectionPool, TransportError};

#[cfg(any(test, feature = "test-support"))]
pub use transport::{FakeConnection, FakePool, SentCommand};
