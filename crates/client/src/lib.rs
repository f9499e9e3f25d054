// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fts-client: Typed client for a RediSearch-compatible server.
//!
//! Each call acquires one connection from the pool, sends the built
//! command, decodes the reply and closes the connection again.

mod client;
mod config;
mod cursor;
pub mod env;
mod error;
mod pipeline;

pub use client::Client;
pub use config::{ClientConfig, ConfigError};
pub use cursor::{Aggregation, CursorSession};
pub use error::Error;
