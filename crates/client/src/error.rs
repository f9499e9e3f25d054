// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_adapters::TransportError;
use fts_core::MultiError;
use fts_wire::{BuildError, DecodeError, Reply};
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) calls
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be expressed as a command; nothing was sent
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Reply shape mismatch. Server error markers found while decoding
    /// are classified as [`Error::Server`] instead.
    #[error(transparent)]
    Decode(DecodeError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Explicit error reply from the server
    #[error("server error: {0}")]
    Server(String),

    /// Per-position failures of a bulk index
    #[error("{0}")]
    Batch(MultiError<Error>),
}

impl Error {
    pub fn batch(&self) -> Option<&MultiError<Error>> {
        match self {
            Error::Batch(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Server error markers inside a decoded reply are server errors too
impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::ErrorElement(msg) => Error::Server(msg),
            other => Error::Decode(other),
        }
    }
}

/// Turn an explicit error reply into [`Error::Server`]
pub(crate) fn server_reply(reply: Reply) -> Result<Reply, Error> {
    match reply {
        Reply::Error(msg) => Err(Error::Server(msg)),
        other => Ok(other),
    }
}
