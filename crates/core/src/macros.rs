// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the request types.

/// Give a fieldless enum its protocol keyword.
///
/// Generates `keyword()`, a case-insensitive `from_keyword()` for reading
/// the keyword back out of server replies, and a `Display` impl that
/// writes the keyword.
///
/// ```ignore
/// crate::keywords! {
///     SortOrder {
///         Asc => "ASC",
///         Desc => "DESC",
///     }
/// }
/// ```
#[macro_export]
macro_rules! keywords {
    ($enum:ident { $( $variant:ident => $keyword:literal ),+ $(,)? }) => {
        impl $enum {
            pub const fn keyword(&self) -> &'static str {
                match self {
                    $( Self::$variant => $keyword, )+
                }
            }

            pub fn from_keyword(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case($keyword) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }

        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

/// Consuming builder setters, one per listed field.
///
/// `name: Type` assigns the value as given. A leading `?` marks an
/// `Option<Type>` field whose setter takes `impl Into<Type>`.
///
/// ```ignore
/// impl IndexingOptions {
///     crate::setters!(no_save: bool, ?language: String);
/// }
/// ```
#[macro_export]
macro_rules! setters {
    () => {};
    (? $field:ident : $ty:ty $(, $($rest:tt)*)?) => {
        pub fn $field(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
        $( $crate::setters!($($rest)*); )?
    };
    ($field:ident : $ty:ty $(, $($rest:tt)*)?) => {
        pub fn $field(mut self, value: $ty) -> Self {
            self.$field = value;
            self
        }
        $( $crate::setters!($($rest)*); )?
    };
}
