// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fts-core: Domain types for the full-text search client

pub mod macros;

pub mod aggregate;
pub mod document;
pub mod indexing;
pub mod info;
pub mod multi_error;
pub mod query;
pub mod result;
pub mod schema;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use aggregate::{AggregateQuery, CursorOptions, GroupBy, Reducer, ReducerFn, Stage};
pub use document::{Document, FieldValue, DEFAULT_SCORE};
pub use indexing::IndexingOptions;
pub use info::IndexInfo;
pub use multi_error::{MultiError, Slot};
pub use query::{
    HighlightOptions, Paging, Query, QueryFlags, SortOrder, SortingKey, SummaryOptions,
    DEFAULT_NUM, DEFAULT_OFFSET,
};
pub use result::{AggregateRow, RowValue, SearchResult};
pub use schema::{
    Field, FieldOptions, FieldType, IndexOptions, NumericFieldOptions, Schema, TagFieldOptions,
    TextFieldOptions,
};
