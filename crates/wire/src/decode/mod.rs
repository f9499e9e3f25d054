// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reply decoders.
//!
//! Every decoder consumes the [`Reply`] it is given and either produces a
//! typed value or a [`DecodeError`] naming the shape it expected. A server
//! error marker where data was expected becomes
//! [`DecodeError::ErrorElement`].

mod fetch;
mod info;
mod results;
mod scalar;

use fts_core::FieldValue;
use indexmap::IndexMap;

use crate::{DecodeError, Reply};

pub use fetch::{document, documents};
pub use info::index_info;
pub use results::{aggregate, search, AggregatePage};
pub use scalar::{integer, ok, terms, text};

fn unexpected(expected: &'static str, reply: Reply) -> DecodeError {
    match reply {
        Reply::Error(msg) => DecodeError::ErrorElement(msg),
        other => DecodeError::UnexpectedShape { expected, got: other.kind() },
    }
}

fn into_array(reply: Reply) -> Result<Vec<Reply>, DecodeError> {
    match reply {
        Reply::Array(items) => Ok(items),
        other => Err(unexpected("array", other)),
    }
}

/// Text view of a scalar element
fn into_text(reply: Reply) -> Result<String, DecodeError> {
    match reply {
        Reply::Bulk(bytes) => String::from_utf8(bytes).map_err(|e| DecodeError::Utf8(e.to_string())),
        Reply::Status(s) => Ok(s),
        Reply::Integer(n) => Ok(n.to_string()),
        other => Err(unexpected("string", other)),
    }
}

fn into_u64(reply: Reply) -> Result<u64, DecodeError> {
    match reply {
        Reply::Integer(n) => u64::try_from(n).map_err(|_| DecodeError::InvalidNumber(n.to_string())),
        other => {
            let text = into_text(other)?;
            text.trim().parse().map_err(|_| DecodeError::InvalidNumber(text))
        }
    }
}

fn into_f64(reply: Reply) -> Result<f64, DecodeError> {
    match reply {
        Reply::Integer(n) => Ok(n as f64),
        other => {
            let text = into_text(other)?;
            text.trim().parse().map_err(|_| DecodeError::InvalidNumber(text))
        }
    }
}

/// Pair up a flat `[name, value, name, value, ..]` array
fn pairs(items: Vec<Reply>) -> Result<Vec<(String, Reply)>, DecodeError> {
    if items.len() % 2 != 0 {
        return Err(DecodeError::OddFieldCount(items.len()));
    }
    let mut out = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(name), Some(value)) = (iter.next(), iter.next()) {
        out.push((into_text(name)?, value));
    }
    Ok(out)
}

/// Document fields from a flat field/value array; values are always text
fn field_map(items: Vec<Reply>) -> Result<IndexMap<String, FieldValue>, DecodeError> {
    pairs(items)?
        .into_iter()
        .map(|(name, value)| Ok((name, FieldValue::Text(into_text(value)?))))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
