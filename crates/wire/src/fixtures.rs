// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reply builders shaped like real server output, for tests in this crate
//! and in crates that script fake connections.

use fts_core::{AggregateRow, Document, QueryFlags, RowValue};

use crate::Reply;

/// Flat `[name, value, ..]` array of a document's fields
pub fn fields_reply(doc: &Document) -> Reply {
    Reply::array(
        doc.fields
            .iter()
            .flat_map(|(name, value)| [Reply::bulk(name.as_str()), Reply::bulk(value.to_string())]),
    )
}

/// `FT.SEARCH` reply for `docs`, laid out as the given flags dictate
pub fn search_reply(flags: &QueryFlags, total: u64, docs: &[Document]) -> Reply {
    let mut items = vec![Reply::Integer(total as i64)];
    for doc in docs {
        items.push(Reply::bulk(doc.id.as_str()));
        if flags.with_scores {
            items.push(Reply::bulk(doc.score.to_string()));
        }
        if flags.with_payloads {
            items.push(doc.payload.clone().map_or(Reply::Nil, Reply::Bulk));
        }
        if !flags.no_content {
            items.push(fields_reply(doc));
        }
    }
    Reply::Array(items)
}

/// `[total, row..]`, optionally wrapped as `[[total, row..], cursor_id]`
pub fn aggregate_reply(total: u64, rows: &[AggregateRow], cursor_id: Option<u64>) -> Reply {
    let mut items = vec![Reply::Integer(total as i64)];
    items.extend(rows.iter().map(row_reply));
    let body = Reply::Array(items);
    match cursor_id {
        Some(id) => Reply::array([body, Reply::Integer(id as i64)]),
        None => body,
    }
}

/// Aggregate row with text values
pub fn row<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> AggregateRow {
    AggregateRow {
        fields: pairs.into_iter().map(|(k, v)| (k.to_string(), RowValue::Text(v.to_string()))).collect(),
    }
}

fn row_reply(row: &AggregateRow) -> Reply {
    Reply::array(row.fields.iter().flat_map(|(name, value)| [Reply::bulk(name.as_str()), value_reply(value)]))
}

fn value_reply(value: &RowValue) -> Reply {
    match value {
        RowValue::Nil => Reply::Nil,
        RowValue::Text(s) => Reply::bulk(s.as_str()),
        RowValue::List(items) => Reply::array(items.iter().map(value_reply)),
    }
}
