// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::{Paging, Query, QueryFlags};

use crate::Args;

/// Flag keywords in emission order. The server parses the option section
/// positionally, so this order is part of the wire contract.
pub const FLAG_KEYWORDS: [(&str, fn(&QueryFlags) -> bool); 5] = [
    ("VERBATIM", |f| f.verbatim),
    ("NOCONTENT", |f| f.no_content),
    ("INORDER", |f| f.in_order),
    ("WITHPAYLOADS", |f| f.with_payloads),
    ("WITHSCORES", |f| f.with_scores),
];

/// `LIMIT offset num`, only when it differs from the server default
pub(crate) fn push_paging(args: &mut Args, paging: &Paging) {
    if !paging.is_default() {
        args.push("LIMIT").push(paging.offset).push(paging.num);
    }
}

/// Arguments of `FT.SEARCH`
pub fn search_args(index: &str, query: &Query) -> Args {
    let mut args = Args::new();
    args.push(index).append(query_args(query));
    args
}

/// Arguments of `FT.EXPLAIN`
pub fn explain_args(index: &str, query: &Query) -> Args {
    search_args(index, query)
}

/// The query section shared by search and explain: raw query, paging,
/// flags, then the optional clauses
pub fn query_args(q: &Query) -> Args {
    let mut args = Args::new();
    args.push(&q.raw);
    push_paging(&mut args, &q.paging);

    for (keyword, is_set) in FLAG_KEYWORDS {
        if is_set(&q.flags) {
            args.push(keyword);
        }
    }

    if let Some(slop) = q.slop {
        args.push("SLOP").push(slop);
    }
    if let Some(keys) = &q.in_keys {
        args.push_counted("INKEYS", keys);
    }
    if let Some(fields) = &q.return_fields {
        args.push_counted("RETURN", fields);
    }
    if let Some(scorer) = &q.scorer {
        args.push("SCORER").push(scorer);
    }
    if let Some(language) = &q.language {
        args.push("LANGUAGE").push(language);
    }
    if let Some(expander) = &q.expander {
        args.push("EXPANDER").push(expander);
    }
    if let Some(payload) = &q.payload {
        args.push("PAYLOAD").push(payload);
    }
    if let Some(sort) = &q.sort_by {
        args.push("SORTBY").push(&sort.field).push(sort.order);
    }

    if let Some(hl) = &q.highlight {
        args.push("HIGHLIGHT");
        if !hl.fields.is_empty() {
            args.push_counted("FIELDS", &hl.fields);
        }
        args.push("TAGS").push(&hl.tags.0).push(&hl.tags.1);
    }

    if let Some(sum) = &q.summarize {
        args.push("SUMMARIZE");
        if !sum.fields.is_empty() {
            args.push_counted("FIELDS", &sum.fields);
        }
        if let Some(len) = sum.fragment_len {
            args.push("LEN").push(len);
        }
        if let Some(frags) = sum.num_fragments {
            args.push("FRAGS").push(frags);
        }
        if let Some(separator) = &sum.separator {
            args.push("SEPARATOR").push(separator);
        }
    }

    args
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
