// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command argument builders.
//!
//! Each builder is a pure function from a typed request to the ordered
//! argument list that follows the command verb. None of them perform I/O.

mod aggregate;
mod document;
mod index;
mod query;

pub use aggregate::{aggregate_args, cursor_del_args, cursor_read_args};
pub use document::{add_args, del_args, get_args, indexing_options_args, mget_args};
pub use index::{alias_args, create_args, dict_args, dict_dump_args, index_args, schema_args};
pub use query::{explain_args, query_args, search_args, FLAG_KEYWORDS};
