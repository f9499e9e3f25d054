// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::{Document, DEFAULT_SCORE};

use super::{field_map, into_array, into_f64, unexpected};
use crate::{DecodeError, Reply};

/// Decode an `FT.GET` reply.
///
/// Accepted shapes:
/// - nil or `[]`: not found
/// - `[name, value, ..]`: found, default score
/// - `[score, [name, value, ..]]`: found, explicit score
pub fn document(id: &str, reply: Reply) -> Result<Option<Document>, DecodeError> {
    let items = match reply {
        Reply::Nil => return Ok(None),
        Reply::Array(items) if items.is_empty() => return Ok(None),
        Reply::Array(items) => items,
        other => return Err(unexpected("array or nil", other)),
    };

    let mut doc = Document::new(id, DEFAULT_SCORE);
    if matches!(items.as_slice(), [_, Reply::Array(_)]) {
        let mut iter = items.into_iter();
        if let (Some(score), Some(fields)) = (iter.next(), iter.next()) {
            doc.score = into_f64(score)?;
            doc.fields = field_map(into_array(fields)?)?;
        }
    } else {
        doc.fields = field_map(items)?;
    }
    Ok(Some(doc))
}

/// Decode an `FT.MGET` reply, aligned with `ids`.
///
/// The outer result fails only when the reply is not an array of the
/// expected length; each position then decodes on its own, so one bad
/// element never hides the others.
pub fn documents<S: AsRef<str>>(
    ids: &[S],
    reply: Reply,
) -> Result<Vec<Result<Option<Document>, DecodeError>>, DecodeError> {
    let items = into_array(reply)?;
    if items.len() != ids.len() {
        return Err(DecodeError::Truncated { expected: ids.len(), got: items.len() });
    }
    Ok(ids.iter().zip(items).map(|(id, item)| document(id.as_ref(), item)).collect())
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
