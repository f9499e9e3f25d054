// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::{Document, IndexingOptions};

use crate::Args;

/// Append `NOSAVE`, `LANGUAGE l` and `REPLACE [PARTIAL] [IF cond]`, in that
/// order. Partial updates always carry `REPLACE`.
pub fn indexing_options_args(opts: &IndexingOptions, args: &mut Args) {
    if opts.no_save {
        args.push("NOSAVE");
    }
    if let Some(language) = &opts.language {
        args.push("LANGUAGE").push(language);
    }
    if opts.effective_replace() {
        args.push("REPLACE");
        if opts.partial {
            args.push("PARTIAL");
        }
        if let Some(condition) = &opts.replace_condition {
            args.push("IF").push(condition);
        }
    }
}

/// Arguments of `FT.ADD` for one document
pub fn add_args(index: &str, doc: &Document, opts: &IndexingOptions) -> Args {
    let mut args = Args::with_capacity(6 + doc.fields.len() * 2);
    args.push(index).push(&doc.id).push(doc.score);
    indexing_options_args(opts, &mut args);

    if let Some(payload) = &doc.payload {
        args.push("PAYLOAD").push(payload);
    }

    args.push("FIELDS");
    for (name, value) in &doc.fields {
        args.push(name).push(value);
    }
    args
}

/// Arguments of `FT.GET`
pub fn get_args(index: &str, id: &str) -> Args {
    let mut args = Args::new();
    args.push(index).push(id);
    args
}

/// Arguments of `FT.MGET`; replies follow the id order
pub fn mget_args<S: AsRef<str>>(index: &str, ids: &[S]) -> Args {
    let mut args = Args::with_capacity(ids.len() + 1);
    args.push(index);
    for id in ids {
        let id: &str = id.as_ref();
        args.push(id);
    }
    args
}

/// Arguments of `FT.DEL`. `DD` also deletes the stored document.
pub fn del_args(index: &str, id: &str, delete_document: bool) -> Args {
    let mut args = get_args(index, id);
    if delete_document {
        args.push("DD");
    }
    args
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
