// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::{AggregateRow, Document, QueryFlags, RowValue, SearchResult, DEFAULT_SCORE};

use super::{field_map, into_array, into_f64, into_text, into_u64, pairs, unexpected};
use crate::{DecodeError, Reply};

/// Decode an `FT.SEARCH` reply: `[total, id, (score)?, (payload)?, (fields)?, id, ..]`.
///
/// The row layout depends on the flags the query was sent with, so the
/// same flags must be passed here.
pub fn search(reply: Reply, flags: &QueryFlags) -> Result<SearchResult, DecodeError> {
    let mut items = into_array(reply)?.into_iter();
    let total = match items.next() {
        Some(total) => into_u64(total)?,
        None => return Err(DecodeError::Truncated { expected: 1, got: 0 }),
    };

    let stride = 1 + usize::from(flags.with_scores)
        + usize::from(flags.with_payloads)
        + usize::from(!flags.no_content);
    let remaining = items.len();
    if remaining % stride != 0 {
        return Err(DecodeError::Truncated {
            expected: 1 + remaining.next_multiple_of(stride),
            got: 1 + remaining,
        });
    }

    let mut docs = Vec::with_capacity(remaining / stride);
    while let Some(id) = items.next() {
        let mut doc = Document::new(into_text(id)?, DEFAULT_SCORE);
        let mut row = items.by_ref().take(stride - 1);

        if flags.with_scores {
            if let Some(score) = row.next() {
                doc.score = into_f64(score)?;
            }
        }
        if flags.with_payloads {
            doc.payload = match row.next() {
                Some(Reply::Bulk(bytes)) => Some(bytes),
                Some(Reply::Nil) | None => None,
                Some(other) => return Err(unexpected("payload", other)),
            };
        }
        if !flags.no_content {
            match row.next() {
                Some(Reply::Nil) | None => {}
                Some(fields) => doc.fields = field_map(into_array(fields)?)?,
            }
        }
        docs.push(doc);
    }

    Ok(SearchResult { total, docs })
}

/// One batch of aggregate rows. `cursor_id` is zero when the aggregation
/// ran without a cursor or the cursor is exhausted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatePage {
    pub total: u64,
    pub rows: Vec<AggregateRow>,
    pub cursor_id: u64,
}

/// Decode an `FT.AGGREGATE` or `FT.CURSOR READ` reply.
///
/// Without a cursor the reply is `[total, row..]`; with one it is
/// `[[total, row..], cursor_id]`.
pub fn aggregate(reply: Reply, with_cursor: bool) -> Result<AggregatePage, DecodeError> {
    let (body, cursor_id) = if with_cursor {
        let items = into_array(reply)?;
        let got = items.len();
        let mut items = items.into_iter();
        match (items.next(), items.next(), items.next()) {
            (Some(body), Some(cursor), None) => (body, into_u64(cursor)?),
            _ => return Err(DecodeError::Truncated { expected: 2, got }),
        }
    } else {
        (reply, 0)
    };

    let mut items = into_array(body)?.into_iter();
    let total = items.next().map(into_u64).transpose()?.unwrap_or(0);
    let rows = items.map(row).collect::<Result<_, _>>()?;
    Ok(AggregatePage { total, rows, cursor_id })
}

fn row(reply: Reply) -> Result<AggregateRow, DecodeError> {
    let fields = pairs(into_array(reply)?)?
        .into_iter()
        .map(|(name, value)| Ok((name, row_value(value)?)))
        .collect::<Result<_, DecodeError>>()?;
    Ok(AggregateRow { fields })
}

fn row_value(reply: Reply) -> Result<RowValue, DecodeError> {
    match reply {
        Reply::Nil => Ok(RowValue::Nil),
        Reply::Array(items) => Ok(RowValue::List(items.into_iter().map(row_value).collect::<Result<_, _>>()?)),
        other => into_text(other).map(RowValue::Text),
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
