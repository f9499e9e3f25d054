// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fts_core::{FieldType, FieldValue, ReducerFn, SortOrder};

/// Conversion of a value into one command argument
pub trait ToArg {
    fn to_arg(&self) -> Vec<u8>;
}

impl ToArg for str {
    fn to_arg(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl ToArg for String {
    fn to_arg(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl ToArg for [u8] {
    fn to_arg(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl ToArg for Vec<u8> {
    fn to_arg(&self) -> Vec<u8> {
        self.clone()
    }
}

impl<T: ToArg + ?Sized> ToArg for &T {
    fn to_arg(&self) -> Vec<u8> {
        (**self).to_arg()
    }
}

macro_rules! display_arg {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToArg for $ty {
                fn to_arg(&self) -> Vec<u8> {
                    self.to_string().into_bytes()
                }
            }
        )+
    };
}

display_arg!(i32, i64, u32, u64, usize, f64, char, FieldValue, FieldType, ReducerFn, SortOrder);

/// An ordered, flat argument list for one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(Vec<Vec<u8>>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, arg: impl ToArg) -> &mut Self {
        self.0.push(arg.to_arg());
        self
    }

    pub fn extend<I>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToArg,
    {
        self.0.extend(args.into_iter().map(|a| a.to_arg()));
        self
    }

    /// `keyword n item..`: the count always precedes the items, even when zero
    pub fn push_counted<T: ToArg>(&mut self, keyword: &str, items: &[T]) -> &mut Self {
        self.push(keyword).push(items.len()).extend(items)
    }

    /// Append another argument list
    pub fn append(&mut self, other: Args) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Lossy text rendering, for logs and tests
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|a| String::from_utf8_lossy(a).into_owned()).collect()
    }
}

impl<T: ToArg> FromIterator<T> for Args {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(|a| a.to_arg()).collect())
    }
}
