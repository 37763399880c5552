//! Per-column condition operations.
//!
//! For each indexed or primary-key column, rules apply in this order:
//!
//! 1. primary key: `find` only, nothing else
//! 2. nullable: `<col>_is_null`, `<col>_is_not_null`
//! 3. always: `<col>_eq`, `<col>_not_eq`, `<col>_in`, `<col>_not_in`
//! 4. numeric kinds: `<col>_lt`, `<col>_le`, `<col>_gt`, `<col>_ge`
//!
//! Kinds without ordering (boolean, text, blob) silently get no rule-4 ops.

#[cfg(test)]
mod tests;

use crate::{
    OpGen,
    naming::{conditions_trait_ident, ident, schema_ident, snake},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tablecraft_schema::{
    ddl::quote_identifier,
    node::{Column, Table},
    types::StorageKind,
};
use tracing::debug;

///
/// ConditionKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionKind {
    Find,
    IsNull,
    IsNotNull,
    Eq,
    NotEq,
    In,
    NotIn,
    Lt,
    Le,
    Gt,
    Ge,
}

impl ConditionKind {
    /// Method-name suffix appended to the column stem.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Find => "",
            Self::IsNull => "is_null",
            Self::IsNotNull => "is_not_null",
            Self::Eq => "eq",
            Self::NotEq => "not_eq",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
        }
    }

    // comparison operator for the scalar forms
    const fn operator(self) -> Option<&'static str> {
        match self {
            Self::Find | Self::Eq => Some("="),
            Self::NotEq => Some("<>"),
            Self::Lt => Some("<"),
            Self::Le => Some("<="),
            Self::Gt => Some(">"),
            Self::Ge => Some(">="),
            Self::IsNull | Self::IsNotNull | Self::In | Self::NotIn => None,
        }
    }

    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    #[must_use]
    pub const fn takes_param(self) -> bool {
        !matches!(self, Self::IsNull | Self::IsNotNull)
    }
}

///
/// ParamNullability
///
/// How a generated parameter is annotated. Primitive columns get no
/// annotation; otherwise the parameter mirrors the column's nullability.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParamNullability {
    Unannotated,
    Nullable,
    NonNull,
}

impl ParamNullability {
    #[must_use]
    pub const fn for_column(column: &Column) -> Self {
        if column.is_primitive() {
            Self::Unannotated
        } else if column.nullable {
            Self::Nullable
        } else {
            Self::NonNull
        }
    }
}

///
/// ParamSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: StorageKind,
    pub nullability: ParamNullability,
    pub collection: bool,
}

impl ParamSpec {
    /// Non-null scalar text parameters accept anything convertible to `String`.
    #[must_use]
    pub const fn is_into_string(&self) -> bool {
        self.kind.is_text()
            && !self.collection
            && matches!(self.nullability, ParamNullability::NonNull)
    }
}

///
/// ConditionOp
///
/// One generated condition method. `sql` is the predicate fragment; for
/// `In`/`NotIn` it is the quoted column, and placeholders are rendered at
/// runtime from the collection length.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConditionOp {
    pub method: String,
    pub kind: ConditionKind,
    pub param: Option<ParamSpec>,
    pub sql: String,
}

impl ConditionOp {
    fn new(column: &Column, kind: ConditionKind) -> Self {
        let stem = snake(&column.name);
        let method = match kind {
            ConditionKind::Find => "find".to_string(),
            _ => format!("{stem}_{}", kind.suffix()),
        };
        let quoted = quote_identifier(column.resolved_name());
        let sql = match kind {
            ConditionKind::IsNull => format!("{quoted} IS NULL"),
            ConditionKind::IsNotNull => format!("{quoted} IS NOT NULL"),
            ConditionKind::In | ConditionKind::NotIn => quoted,
            _ => {
                let op = kind.operator().unwrap_or("=");
                format!("{quoted} {op} ?")
            }
        };
        let param = kind.takes_param().then(|| {
            if kind.is_collection() {
                ParamSpec {
                    name: "values".to_string(),
                    kind: column.kind,
                    nullability: ParamNullability::NonNull,
                    collection: true,
                }
            } else {
                ParamSpec {
                    name: stem,
                    kind: column.kind,
                    nullability: ParamNullability::for_column(column),
                    collection: false,
                }
            }
        });

        Self {
            method,
            kind,
            param,
            sql,
        }
    }
}

/// Derive the condition operations of one column. Columns that are neither
/// indexed nor a primary key yield nothing.
#[must_use]
pub fn column_ops(column: &Column) -> Vec<ConditionOp> {
    if !column.is_conditional() {
        return Vec::new();
    }

    if column.primary_key {
        return vec![ConditionOp::new(column, ConditionKind::Find)];
    }

    let mut kinds = Vec::with_capacity(10);
    if column.nullable {
        kinds.extend([ConditionKind::IsNull, ConditionKind::IsNotNull]);
    }
    kinds.extend([
        ConditionKind::Eq,
        ConditionKind::NotEq,
        ConditionKind::In,
        ConditionKind::NotIn,
    ]);
    if column.kind.supports_ordering() {
        kinds.extend([
            ConditionKind::Lt,
            ConditionKind::Le,
            ConditionKind::Gt,
            ConditionKind::Ge,
        ]);
    }

    kinds
        .into_iter()
        .map(|kind| ConditionOp::new(column, kind))
        .collect()
}

///
/// ConditionGen
///
/// Emits `<Model>Conditions`, an extension trait carrying every condition
/// method of the table, blanket-implemented for all builders over the
/// table's schema.
///

pub struct ConditionGen<'a>(pub &'a Table);

impl OpGen for ConditionGen<'_> {
    type Op = ConditionOp;

    fn ops(&self) -> Vec<ConditionOp> {
        self.0.columns.iter().flat_map(column_ops).collect()
    }

    fn generate(&self) -> TokenStream {
        let table = self.0;
        let ops = self.ops();
        debug!(table = %table.name, ops = ops.len(), "condition ops");

        let trait_ident = conditions_trait_ident(table);
        let schema_ident = schema_ident(table);
        let methods = ops.iter().map(render_op);
        let doc = format!(" Condition helpers for `{}`.", table.name);

        quote! {
            #[doc = #doc]
            pub trait #trait_ident:
                ::tablecraft::core::Conditional<Schema = #schema_ident>
            {
                #(#methods)*
            }

            impl<T> #trait_ident for T
            where
                T: ::tablecraft::core::Conditional<Schema = #schema_ident>,
            {
            }
        }
    }
}

fn render_op(op: &ConditionOp) -> TokenStream {
    let method = format_ident!("{}", op.method);
    let sql = &op.sql;
    let doc = format!(" `WHERE {sql}`");

    let Some(param) = &op.param else {
        return quote! {
            #[doc = #doc]
            #[must_use]
            fn #method(self) -> Self {
                ::tablecraft::core::Conditional::where_(self, #sql, ::tablecraft::core::NO_PARAMS)
            }
        };
    };

    let name = ident(&param.name);
    let ty = param_type(param);

    if param.collection {
        let negate = matches!(op.kind, ConditionKind::NotIn);
        let doc = if negate {
            format!(" `WHERE {sql} NOT IN (...)`; an empty collection matches every row.")
        } else {
            format!(" `WHERE {sql} IN (...)`; an empty collection matches no row.")
        };

        return quote! {
            #[doc = #doc]
            #[must_use]
            fn #method(self, #name: #ty) -> Self {
                let values = ::std::iter::IntoIterator::into_iter(#name)
                    .map(|value| ::tablecraft::core::ToValue::to_value(&value));

                ::tablecraft::core::Conditional::where_in(self, #negate, #sql, values)
            }
        };
    }

    let convert = param.is_into_string().then(|| {
        quote!(let #name: ::std::string::String = ::std::convert::Into::into(#name);)
    });

    quote! {
        #[doc = #doc]
        #[must_use]
        fn #method(self, #name: #ty) -> Self {
            #convert
            let value = ::tablecraft::core::ToValue::to_value(&#name);

            ::tablecraft::core::Conditional::where_(self, #sql, [value])
        }
    }
}

/// Rust type of a generated parameter. Nullable parameters are `Option<T>`,
/// non-null text takes `impl Into<String>` and collections take any iterator
/// of the element type.
pub fn param_type(param: &ParamSpec) -> TokenStream {
    let elem = param.kind.rust_type();

    if param.collection {
        return quote!(impl ::std::iter::IntoIterator<Item = #elem>);
    }
    if param.is_into_string() {
        return quote!(impl ::std::convert::Into<::std::string::String>);
    }

    match param.nullability {
        ParamNullability::Nullable => quote!(::std::option::Option<#elem>),
        ParamNullability::NonNull | ParamNullability::Unannotated => elem,
    }
}
