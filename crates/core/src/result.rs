// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed results of search and aggregate commands.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matches, independent of paging
    pub total: u64,
    pub docs: Vec<Document>,
}

/// A value in an aggregate row. Reducers such as `TOLIST` produce lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowValue {
    Nil,
    Text(String),
    List(Vec<RowValue>),
}

impl RowValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RowValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One row produced by an aggregation pipeline, in reply order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub fields: IndexMap<String, RowValue>,
}

impl AggregateRow {
    pub fn get(&self, name: &str) -> Option<&RowValue> {
        self.fields.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(RowValue::as_str)
    }
}
