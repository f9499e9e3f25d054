// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `FT.INFO` decoding.
//!
//! The reply is a flat key/value array. Scalar keys are looked up in static
//! tables that pair the wire key with a setter on [`IndexInfo`]; anything
//! not listed is ignored so newer servers can add keys freely.

use fts_core::{
    Field, FieldOptions, FieldType, IndexInfo, IndexOptions, NumericFieldOptions, TagFieldOptions,
    TextFieldOptions,
};

use super::{into_array, into_f64, into_text, into_u64, pairs};
use crate::{DecodeError, Reply};

type Setter<T> = fn(&mut IndexInfo, T);

const COUNTS: [(&str, Setter<u64>); 4] = [
    ("num_docs", |i, v| i.doc_count = v),
    ("num_records", |i, v| i.record_count = v),
    ("num_terms", |i, v| i.term_count = v),
    ("max_doc_id", |i, v| i.max_doc_id = v),
];

const SIZES: [(&str, Setter<f64>); 8] = [
    ("inverted_sz_mb", |i, v| i.inverted_index_size_mb = v),
    ("offset_vector_sz_mb", |i, v| i.offset_vector_size_mb = v),
    ("doc_table_size_mb", |i, v| i.doc_table_size_mb = v),
    ("key_table_size_mb", |i, v| i.key_table_size_mb = v),
    ("records_per_doc_avg", |i, v| i.records_per_doc_avg = v),
    ("bytes_per_record_avg", |i, v| i.bytes_per_record_avg = v),
    ("offsets_per_term_avg", |i, v| i.offsets_per_term_avg = v),
    ("offset_bits_per_record_avg", |i, v| i.offset_bits_per_term_avg = v),
];

/// Decode an `FT.INFO` reply
pub fn index_info(reply: Reply) -> Result<IndexInfo, DecodeError> {
    let mut info = IndexInfo::default();
    for (key, value) in pairs(into_array(reply)?)? {
        if let Some((_, set)) = COUNTS.iter().find(|(k, _)| *k == key) {
            set(&mut info, into_u64(value)?);
        } else if let Some((_, set)) = SIZES.iter().find(|(k, _)| *k == key) {
            set(&mut info, into_f64(value)?);
        } else {
            match key.as_str() {
                "index_name" => info.name = into_text(value)?,
                "index_options" => index_options(value, &mut info.schema.options)?,
                "stopwords_list" => info.schema.options.stopwords = Some(strings(value)?),
                "fields" => info.schema.fields = fields(value)?,
                _ => {}
            }
        }
    }
    Ok(info)
}

fn strings(reply: Reply) -> Result<Vec<String>, DecodeError> {
    into_array(reply)?.into_iter().map(into_text).collect()
}

fn index_options(reply: Reply, opts: &mut IndexOptions) -> Result<(), DecodeError> {
    for flag in strings(reply)? {
        match flag.to_ascii_uppercase().as_str() {
            "NOFIELDS" => opts.no_field_flags = true,
            "NOFREQS" => opts.no_frequencies = true,
            "NOOFFSETS" => opts.no_offset_vectors = true,
            _ => {}
        }
    }
    Ok(())
}

fn fields(reply: Reply) -> Result<Vec<Field>, DecodeError> {
    let mut out = Vec::new();
    for entry in into_array(reply)? {
        if let Some(field) = field(strings(entry)?)? {
            out.push(field);
        }
    }
    Ok(out)
}

/// One field description: `[name, "type", TYPE, option..]`. Fields of a
/// type this client does not model are skipped.
fn field(tokens: Vec<String>) -> Result<Option<Field>, DecodeError> {
    let mut tokens = tokens.into_iter();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };

    let mut field_type = None;
    let mut weight = None;
    let mut separator = None;
    let (mut sortable, mut no_stem, mut no_index) = (false, false, false);
    while let Some(token) = tokens.next() {
        match token.to_ascii_uppercase().as_str() {
            "TYPE" => {
                field_type = match tokens.next().as_deref().and_then(FieldType::from_keyword) {
                    Some(t) => Some(t),
                    None => return Ok(None),
                };
            }
            "WEIGHT" => {
                let text = tokens.next().unwrap_or_default();
                weight = Some(text.parse::<f64>().map_err(|_| DecodeError::InvalidNumber(text))?);
            }
            "SEPARATOR" => separator = tokens.next().and_then(|s| s.chars().next()),
            "SORTABLE" => sortable = true,
            "NOSTEM" => no_stem = true,
            "NOINDEX" => no_index = true,
            _ => {}
        }
    }

    let Some(field_type) = field_type else {
        return Ok(None);
    };
    let options = match field_type {
        FieldType::Text => FieldOptions::Text(TextFieldOptions {
            weight: weight.unwrap_or(1.0),
            no_stem,
            sortable,
            no_index,
        }),
        FieldType::Numeric => FieldOptions::Numeric(NumericFieldOptions { sortable, no_index }),
        FieldType::Tag => FieldOptions::Tag(TagFieldOptions { separator, sortable, no_index }),
    };
    Ok(Some(Field::new(name, field_type, Some(options))))
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
