// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::{Field, FieldOptions, Schema};

use crate::{Args, BuildError};

/// Index options, then `SCHEMA`, then each field in declaration order
pub fn schema_args(schema: &Schema) -> Result<Args, BuildError> {
    let mut args = Args::new();
    let opts = &schema.options;
    if opts.no_field_flags {
        args.push("NOFIELDS");
    }
    if opts.no_frequencies {
        args.push("NOFREQS");
    }
    if opts.no_offset_vectors {
        args.push("NOOFFSETS");
    }
    if let Some(words) = &opts.stopwords {
        args.push_counted("STOPWORDS", words);
    }

    args.push("SCHEMA");
    for field in &schema.fields {
        push_field(&mut args, field)?;
    }
    Ok(args)
}

fn push_field(args: &mut Args, field: &Field) -> Result<(), BuildError> {
    args.push(&field.name).push(field.field_type);
    let Some(options) = &field.options else {
        return Ok(());
    };
    if options.field_type() != field.field_type {
        return Err(BuildError::FieldOptionsMismatch {
            field: field.name.clone(),
            expected: field.field_type,
            got: options.field_type(),
        });
    }

    match options {
        FieldOptions::Text(text) => {
            // 0 and 1 both mean "server default"
            if text.weight != 0.0 && text.weight != 1.0 {
                args.push("WEIGHT").push(text.weight);
            }
            if text.no_stem {
                args.push("NOSTEM");
            }
            push_common(args, text.sortable, text.no_index);
        }
        FieldOptions::Numeric(numeric) => push_common(args, numeric.sortable, numeric.no_index),
        FieldOptions::Tag(tag) => {
            if let Some(separator) = tag.separator {
                args.push("SEPARATOR").push(separator);
            }
            push_common(args, tag.sortable, tag.no_index);
        }
    }
    Ok(())
}

fn push_common(args: &mut Args, sortable: bool, no_index: bool) {
    if sortable {
        args.push("SORTABLE");
    }
    if no_index {
        args.push("NOINDEX");
    }
}

/// Arguments of `FT.CREATE`
pub fn create_args(index: &str, schema: &Schema) -> Result<Args, BuildError> {
    let mut args = index_args(index);
    args.append(schema_args(schema)?);
    Ok(args)
}

/// The lone index name taken by `FT.DROP` and `FT.INFO`
pub fn index_args(index: &str) -> Args {
    let mut args = Args::new();
    args.push(index);
    args
}

/// Arguments of the alias commands. `FT.ALIASDEL` takes no index.
pub fn alias_args(alias: &str, index: Option<&str>) -> Args {
    let mut args = Args::new();
    args.push(alias);
    if let Some(index) = index {
        args.push(index);
    }
    args
}

/// Arguments of `FT.DICTADD` / `FT.DICTDEL`. The server rejects an empty
/// term list, so it is refused here before any I/O.
pub fn dict_args<S: AsRef<str>>(
    command: &'static str,
    dict: &str,
    terms: &[S],
) -> Result<Args, BuildError> {
    if terms.is_empty() {
        return Err(BuildError::EmptyTerms { command });
    }
    let mut args = Args::with_capacity(terms.len() + 1);
    args.push(dict);
    for term in terms {
        let term: &str = term.as_ref();
        args.push(term);
    }
    Ok(args)
}

/// Arguments of `FT.DICTDUMP`
pub fn dict_dump_args(dict: &str) -> Args {
    index_args(dict)
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
