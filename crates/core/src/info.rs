// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Index statistics reported by the server.

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Information about an existing index.
///
/// Counts are unsigned integers and sizes are megabytes. Fields the server
/// does not report keep their default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub schema: Schema,
    pub name: String,
    pub doc_count: u64,
    pub record_count: u64,
    pub term_count: u64,
    pub max_doc_id: u64,
    pub inverted_index_size_mb: f64,
    pub offset_vector_size_mb: f64,
    pub doc_table_size_mb: f64,
    pub key_table_size_mb: f64,
    pub records_per_doc_avg: f64,
    pub bytes_per_record_avg: f64,
    pub offsets_per_term_avg: f64,
    pub offset_bits_per_term_avg: f64,
}
