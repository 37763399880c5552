use crate::prelude::*;
use derive_more::Display;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

///
/// StorageKind
///
/// Closed taxonomy of column storage types understood by the compiler.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum StorageKind {
    Blob,
    Boolean,
    Byte,
    Double,
    Float,
    Int,
    Long,
    Short,
    Text,
}

impl StorageKind {
    // byte, short, int, long, float and double; never boolean, text or blob
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    #[must_use]
    pub const fn supports_ordering(self) -> bool {
        self.is_numeric()
    }

    /// Kinds with a value representation that cannot express absence.
    #[must_use]
    pub const fn is_primitive_capable(self) -> bool {
        self.is_numeric() || matches!(self, Self::Boolean)
    }

    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// SQLite type affinity used in `CREATE TABLE`.
    #[must_use]
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Boolean | Self::Byte | Self::Short | Self::Int | Self::Long => "INTEGER",
            Self::Float | Self::Double => "REAL",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
        }
    }

    /// Rust value type used by generated code for this kind.
    #[must_use]
    pub fn rust_type(self) -> TokenStream {
        match self {
            Self::Blob => quote!(::std::vec::Vec<u8>),
            Self::Boolean => quote!(bool),
            Self::Byte => quote!(i8),
            Self::Short => quote!(i16),
            Self::Int => quote!(i32),
            Self::Long => quote!(i64),
            Self::Float => quote!(f32),
            Self::Double => quote!(f64),
            Self::Text => quote!(::std::string::String),
        }
    }
}

///
/// OnConflict
///
/// Resolution strategy applied when a write violates a uniqueness constraint.
/// `None` means "no clause"; the engine default applies.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnConflict {
    #[display("ABORT")]
    Abort,

    #[default]
    #[display("NONE")]
    None,

    #[display("REPLACE")]
    Replace,

    #[display("ROLLBACK")]
    Rollback,

    #[display("FAIL")]
    Fail,

    #[display("IGNORE")]
    Ignore,
}

impl OnConflict {
    /// The `ON CONFLICT` clause keyword, if any.
    #[must_use]
    pub const fn clause(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Abort => Some("ABORT"),
            Self::Replace => Some("REPLACE"),
            Self::Rollback => Some("ROLLBACK"),
            Self::Fail => Some("FAIL"),
            Self::Ignore => Some("IGNORE"),
        }
    }

    const fn variant_name(self) -> &'static str {
        match self {
            Self::Abort => "Abort",
            Self::None => "None",
            Self::Replace => "Replace",
            Self::Rollback => "Rollback",
            Self::Fail => "Fail",
            Self::Ignore => "Ignore",
        }
    }
}

impl ToTokens for OnConflict {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{}", self.variant_name());

        tokens.extend(quote!(::tablecraft::core::OnConflict::#ident));
    }
}
