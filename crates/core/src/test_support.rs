// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Document, Field, IndexOptions, Schema};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for request and result types.
pub mod strategies {
    use crate::{Document, Paging, QueryFlags};
    use proptest::prelude::*;

    pub fn arb_flags() -> impl Strategy<Value = QueryFlags> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(verbatim, no_content, in_order, with_scores, with_payloads)| QueryFlags {
                verbatim,
                no_content,
                in_order,
                with_scores,
                with_payloads,
            },
        )
    }

    pub fn arb_paging() -> impl Strategy<Value = Paging> {
        prop_oneof![
            Just(Paging::default()),
            (0u64..50, 0u64..50).prop_map(|(offset, num)| Paging::new(offset, num)),
        ]
    }

    /// Documents as the server hands them back: text values, unique field names
    pub fn arb_document() -> impl Strategy<Value = Document> {
        (
            "[a-z][a-z0-9:-]{0,12}",
            prop::collection::btree_map("[a-z]{1,8}", "[ -~]{0,16}", 0..5),
            prop::option::of(prop::collection::vec(any::<u8>(), 0..16)),
            prop_oneof![Just(1.0f64), Just(0.5f64), Just(0.25f64)],
        )
            .prop_map(|(id, fields, payload, score)| {
                let mut doc = Document::new(id, score);
                doc.payload = payload;
                for (name, value) in fields {
                    doc.insert(name, value);
                }
                doc
            })
    }
}

// ── Factory functions ───────────────────────────────────────────────────

/// Single text field schema named `foo`, the shape most client tests use
pub fn foo_schema() -> Schema {
    Schema::new(IndexOptions::default()).add_field(Field::text("foo"))
}

pub fn hello_doc(id: &str) -> Document {
    Document::new(id, 1.0).set("foo", "Hello world")
}
