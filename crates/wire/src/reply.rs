// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::borrow::Cow;

/// A decoded server reply
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Nil,
    Status(String),
    /// Explicit error reply (e.g. `-ERR Unknown Index name`)
    Error(String),
    Integer(i64),
    Bulk(Vec<u8>),
    Array(Vec<Reply>),
}

impl Reply {
    pub fn bulk(data: impl Into<Vec<u8>>) -> Self {
        Reply::Bulk(data.into())
    }

    pub fn array(items: impl IntoIterator<Item = Reply>) -> Self {
        Reply::Array(items.into_iter().collect())
    }

    /// Array of bulk strings, the shape of most flat replies
    pub fn bulk_array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Reply::Array(items.into_iter().map(Reply::bulk).collect())
    }

    pub fn ok() -> Self {
        Reply::Status("OK".to_string())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }

    /// Shape name used in decode errors
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Nil => "nil",
            Reply::Status(_) => "status",
            Reply::Error(_) => "error",
            Reply::Integer(_) => "integer",
            Reply::Bulk(_) => "bulk string",
            Reply::Array(_) => "array",
        }
    }

    /// Lossy text view for logging
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        match self {
            Reply::Status(s) | Reply::Error(s) => Cow::Borrowed(s),
            Reply::Bulk(b) => String::from_utf8_lossy(b),
            Reply::Integer(n) => Cow::Owned(n.to_string()),
            Reply::Nil => Cow::Borrowed("(nil)"),
            Reply::Array(items) => Cow::Owned(format!("(array of {})", items.len())),
        }
    }
}
