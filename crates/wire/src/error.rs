// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::FieldType;
use thiserror::Error;

/// The request cannot be expressed as a command; raised before any I/O
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("invalid options for {expected} field {field:?}: got {got} options")]
    FieldOptionsMismatch { field: String, expected: FieldType, got: FieldType },

    #[error("{command} requires at least one term")]
    EmptyTerms { command: &'static str },
}

/// A reply did not have the shape the request implies
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    #[error("expected {expected}, got {got}")]
    UnexpectedShape { expected: &'static str, got: &'static str },

    #[error("odd number of elements ({0}) in field/value reply")]
    OddFieldCount(usize),

    #[error("truncated reply: expected {expected} elements, got {got}")]
    Truncated { expected: usize, got: usize },

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid utf-8 in reply: {0}")]
    Utf8(String),

    #[error("server error in reply: {0}")]
    ErrorElement(String),
}
