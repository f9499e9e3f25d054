// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options altering how documents are added to an index.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingOptions {
    /// Index the document without storing its fields
    pub no_save: bool,
    /// Stemming language for this document
    pub language: Option<String>,
    /// Replace an existing document with the same id
    pub replace: bool,
    /// Update only the given fields; implies `replace`
    pub partial: bool,
    /// Only replace when this expression holds for the existing document
    pub replace_condition: Option<String>,
}

impl IndexingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters!(no_save: bool, replace: bool, partial: bool, ?language: String, ?replace_condition: String);

    /// Whether the add command carries `REPLACE`; partial updates always do
    pub fn effective_replace(&self) -> bool {
        self.replace || self.partial
    }
}
