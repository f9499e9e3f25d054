// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{into_array, into_text, unexpected};
use crate::{DecodeError, Reply};

/// Decode an `OK` status reply
pub fn ok(reply: Reply) -> Result<(), DecodeError> {
    match reply {
        Reply::Status(s) if s.eq_ignore_ascii_case("OK") => Ok(()),
        other => Err(unexpected("OK status", other)),
    }
}

/// Decode an integer reply (dictionary counts, deleted documents)
pub fn integer(reply: Reply) -> Result<i64, DecodeError> {
    match reply {
        Reply::Integer(n) => Ok(n),
        other => Err(unexpected("integer", other)),
    }
}

/// Decode a single text reply (`FT.EXPLAIN`)
pub fn text(reply: Reply) -> Result<String, DecodeError> {
    match reply {
        Reply::Bulk(_) | Reply::Status(_) => into_text(reply),
        other => Err(unexpected("bulk string", other)),
    }
}

/// Decode a flat array of terms (`FT.DICTDUMP`)
pub fn terms(reply: Reply) -> Result<Vec<String>, DecodeError> {
    match reply {
        Reply::Nil => Ok(Vec::new()),
        other => into_array(other)?.into_iter().map(into_text).collect(),
    }
}
