use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Path, parse_str};
use tablecraft_schema::node::{Database, Table};

/// An identifier token, falling back to a raw identifier for keywords.
pub fn ident(name: &str) -> Ident {
    parse_str::<Ident>(name).unwrap_or_else(|_| Ident::new_raw(name, Span::call_site()))
}

#[must_use]
pub fn snake(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Last path segment of a possibly qualified type name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

/// The model type path: qualified names are used as-is, bare names are
/// resolved inside the database package.
pub fn model_path(database: &Database, table: &Table) -> TokenStream {
    let model = &table.types.model;
    let full = if model.contains("::") || database.package.is_empty() {
        model.clone()
    } else {
        format!("{}::{model}", database.package)
    };
    let path: Path = parse_str(&full).unwrap_or_else(|_| panic!("invalid model path: {full}"));

    quote!(#path)
}

/// Generated type identifiers are emitted unqualified next to the schema.
pub fn type_ident(name: &str) -> Ident {
    format_ident!("{}", simple_name(name))
}

/// snake_case stem used in access-surface method names (`select_from_<stem>`).
pub fn model_stem(table: &Table) -> String {
    snake(simple_name(&table.types.model))
}

pub fn schema_ident(table: &Table) -> Ident {
    format_ident!("{}Schema", simple_name(&table.types.model))
}

pub fn conditions_trait_ident(table: &Table) -> Ident {
    format_ident!("{}Conditions", simple_name(&table.types.model))
}

pub fn updates_trait_ident(table: &Table) -> Ident {
    format_ident!("{}Updates", simple_name(&table.types.model))
}
