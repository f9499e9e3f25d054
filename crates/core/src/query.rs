// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Search query and its options.

use serde::{Deserialize, Serialize};

/// Default result offset applied by the server
pub const DEFAULT_OFFSET: u64 = 0;

/// Default page size applied by the server
pub const DEFAULT_NUM: u64 = 10;

/// Offset paging of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub offset: u64,
    pub num: u64,
}

impl Paging {
    pub fn new(offset: u64, num: u64) -> Self {
        Self { offset, num }
    }

    /// True when the server would apply this window without being told
    pub fn is_default(&self) -> bool {
        self.offset == DEFAULT_OFFSET && self.num == DEFAULT_NUM
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET, DEFAULT_NUM)
    }
}

/// Behaviour flags of a search query.
///
/// Each flag maps to one keyword; the builder emits them in a fixed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFlags {
    /// Treat the terms verbatim and do not perform expansion
    pub verbatim: bool,
    /// Return ids only, without loading document content
    pub no_content: bool,
    /// Query terms must appear in order in the document
    pub in_order: bool,
    /// Return the relevance score of each document
    pub with_scores: bool,
    /// Return the payload of each document
    pub with_payloads: bool,
}

impl QueryFlags {
    crate::setters!(verbatim: bool, no_content: bool, in_order: bool, with_scores: bool, with_payloads: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

crate::keywords! {
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

/// Sort results by a sortable field instead of by relevance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingKey {
    pub field: String,
    pub order: SortOrder,
}

impl SortingKey {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        let order = if ascending { SortOrder::Asc } else { SortOrder::Desc };
        Self { field: field.into(), order }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }
}

/// Highlight query terms in the given fields with an open/close tag pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightOptions {
    pub fields: Vec<String>,
    pub tags: (String, String),
}

/// Replace field content with the most relevant fragments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub fields: Vec<String>,
    /// Words per fragment (server default 20)
    pub fragment_len: Option<u32>,
    /// Fragments per field (server default 3)
    pub num_fragments: Option<u32>,
    /// Fragment separator (server default "...")
    pub separator: Option<String>,
}

/// A single search query with all its parameters.
///
/// `in_keys` and `return_fields` distinguish "not set" (`None`, clause
/// omitted) from "set but empty" (`Some(vec![])`, clause sent with a zero
/// count).
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub raw: String,
    pub paging: Paging,
    pub flags: QueryFlags,
    pub slop: Option<u32>,
    pub in_keys: Option<Vec<String>>,
    pub return_fields: Option<Vec<String>>,
    pub language: Option<String>,
    pub expander: Option<String>,
    pub scorer: Option<String>,
    pub payload: Option<Vec<u8>>,
    pub sort_by: Option<SortingKey>,
    pub highlight: Option<HighlightOptions>,
    pub summarize: Option<SummaryOptions>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            paging: Paging::default(),
            flags: QueryFlags::default(),
            slop: None,
            in_keys: None,
            return_fields: None,
            language: None,
            expander: None,
            scorer: None,
            payload: None,
            sort_by: None,
            highlight: None,
            summarize: None,
        }
    }

    crate::setters!(flags: QueryFlags, ?language: String, ?expander: String, ?scorer: String, ?payload: Vec<u8>);

    /// Allow at most `slop` intervening terms between query terms
    pub fn slop(mut self, slop: u32) -> Self {
        self.slop = Some(slop);
        self
    }

    /// Set the result window. `limit(0, 0)` counts matches without returning them.
    pub fn limit(mut self, offset: u64, num: u64) -> Self {
        self.paging = Paging::new(offset, num);
        self
    }

    /// Restrict the search to the given document ids
    pub fn in_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.in_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Return only the given fields of each document
    pub fn return_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.return_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort_by = Some(SortingKey::new(field, ascending));
        self
    }

    /// Mark query terms in `fields` with the given tags (e.g. `<b>` and `</b>`)
    pub fn highlight<I, S>(
        mut self,
        fields: I,
        open_tag: impl Into<String>,
        close_tag: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlight = Some(HighlightOptions {
            fields: fields.into_iter().map(Into::into).collect(),
            tags: (open_tag.into(), close_tag.into()),
        });
        self
    }

    /// Summarize the given fields using the server's default fragment settings
    pub fn summarize<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.summarize = Some(SummaryOptions {
            fields: fields.into_iter().map(Into::into).collect(),
            ..SummaryOptions::default()
        });
        self
    }

    pub fn summarize_options(mut self, opts: SummaryOptions) -> Self {
        self.summarize = Some(opts);
        self
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
