// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Index schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Numeric,
    Tag,
}

crate::keywords! {
    FieldType {
        Text => "TEXT",
        Numeric => "NUMERIC",
        Tag => "TAG",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextFieldOptions {
    /// Relative importance of the field when ranking (server default 1)
    pub weight: f64,
    pub no_stem: bool,
    pub sortable: bool,
    pub no_index: bool,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self { weight: 1.0, no_stem: false, sortable: false, no_index: false }
    }
}

impl TextFieldOptions {
    crate::setters!(weight: f64, no_stem: bool, sortable: bool, no_index: bool);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericFieldOptions {
    pub sortable: bool,
    pub no_index: bool,
}

impl NumericFieldOptions {
    crate::setters!(sortable: bool, no_index: bool);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFieldOptions {
    /// Tag separator (server default ',')
    pub separator: Option<char>,
    pub sortable: bool,
    pub no_index: bool,
}

impl TagFieldOptions {
    crate::setters!(?separator: char, sortable: bool, no_index: bool);
}

/// Type-specific field options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldOptions {
    Text(TextFieldOptions),
    Numeric(NumericFieldOptions),
    Tag(TagFieldOptions),
}

impl FieldOptions {
    /// The field type these options apply to
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldOptions::Text(_) => FieldType::Text,
            FieldOptions::Numeric(_) => FieldType::Numeric,
            FieldOptions::Tag(_) => FieldType::Tag,
        }
    }
}

/// A single schema field.
///
/// `options` is checked against `field_type` when the create command is
/// built; a mismatch is rejected rather than ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub options: Option<FieldOptions>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, options: Option<FieldOptions>) -> Self {
        Self { name: name.into(), field_type, options }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text, None)
    }

    pub fn text_with(name: impl Into<String>, opts: TextFieldOptions) -> Self {
        Self::new(name, FieldType::Text, Some(FieldOptions::Text(opts)))
    }

    /// Sortable text field
    pub fn sortable_text(name: impl Into<String>) -> Self {
        Self::text_with(name, TextFieldOptions::default().sortable(true))
    }

    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Numeric, None)
    }

    pub fn numeric_with(name: impl Into<String>, opts: NumericFieldOptions) -> Self {
        Self::new(name, FieldType::Numeric, Some(FieldOptions::Numeric(opts)))
    }

    /// Sortable numeric field
    pub fn sortable_numeric(name: impl Into<String>) -> Self {
        Self::numeric_with(name, NumericFieldOptions::default().sortable(true))
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Tag, None)
    }

    pub fn tag_with(name: impl Into<String>, opts: TagFieldOptions) -> Self {
        Self::new(name, FieldType::Tag, Some(FieldOptions::Tag(opts)))
    }
}

/// Index-wide options sent before the field list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    /// Do not store per-term field flags (disables field filtering)
    pub no_field_flags: bool,
    /// Do not store term frequencies
    pub no_frequencies: bool,
    /// Do not store term offsets (disables exact phrases and highlighting)
    pub no_offset_vectors: bool,
    /// Custom stopword list; `Some(vec![])` disables stopwords entirely
    pub stopwords: Option<Vec<String>>,
}

impl IndexOptions {
    crate::setters!(no_field_flags: bool, no_frequencies: bool, no_offset_vectors: bool);

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(words.into_iter().map(Into::into).collect());
        self
    }
}

/// Index options plus fields, in index column order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub options: IndexOptions,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(options: IndexOptions) -> Self {
        Self { options, fields: Vec::new() }
    }

    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}
