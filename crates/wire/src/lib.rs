// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire protocol for the search server.
//!
//! Wire format: RESP. Commands go out as arrays of bulk strings; replies
//! come back as nil, status, error, integer, bulk string or nested arrays.
//!
//! - [`build`] turns typed requests into ordered argument lists
//! - [`decode`] turns replies into typed results
//! - [`wire`] frames commands and replies on an async byte stream

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod args;
pub mod build;
pub mod command;
pub mod decode;
mod error;
mod reply;
mod wire;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use args::{Args, ToArg};
pub use decode::AggregatePage;
pub use error::{BuildError, DecodeError};
pub use reply::Reply;
pub use wire::{
    encode_command, encode_reply, read_reply, read_reply_timeout, write_command, ProtocolError,
    MAX_BULK_LEN,
};
