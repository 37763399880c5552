use crate::naming::{ident, model_path, schema_ident, snake, type_ident, updates_trait_ident};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tablecraft_schema::{
    ddl::quote_identifier,
    node::{Column, Database, Table},
};

/// Emit the schema unit struct, its `TableSchema`/`ModelSchema` impls, the
/// builder type aliases and the column setter trait for one table.
#[must_use]
pub fn generate(database: &Database, table: &Table) -> TokenStream {
    let schema = schema_struct(database, table);
    let aliases = type_aliases(table);
    let updates = updates_trait(table);

    quote! {
        #schema
        #aliases
        #updates
    }
}

fn schema_struct(database: &Database, table: &Table) -> TokenStream {
    let schema_ident = schema_ident(table);
    let model = model_path(database, table);

    let table_name = &table.name;
    let quoted_table = quote_identifier(&table.name);
    let create_table = &table.create_table;
    let create_indexes = &table.create_indexes;
    let column_count = table.columns.len();
    let index_count = table.create_indexes.len();

    let column_infos = table.columns.iter().map(column_info);
    let field_reads = table.columns.iter().enumerate().map(|(i, column)| {
        let field = ident(&column.name);
        quote!(#field: row.get(#i)?)
    });
    let field_writes = table.columns.iter().map(|column| {
        let field = ident(&column.name);
        quote!(::tablecraft::core::ToValue::to_value(&model.#field))
    });
    let doc = format!(" Schema of table `{table_name}`.");

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #schema_ident;

        impl #schema_ident {
            pub const TABLE_NAME: &'static str = #table_name;
            pub const CREATE_TABLE: &'static str = #create_table;
            pub const CREATE_INDEXES: [&'static str; #index_count] = [#(#create_indexes),*];
            pub const COLUMNS: [::tablecraft::core::ColumnInfo; #column_count] = [#(#column_infos),*];
        }

        impl ::tablecraft::core::TableSchema for #schema_ident {
            fn table_name(&self) -> &'static str {
                Self::TABLE_NAME
            }

            fn quoted_table_name(&self) -> &'static str {
                #quoted_table
            }

            fn columns(&self) -> &'static [::tablecraft::core::ColumnInfo] {
                &Self::COLUMNS
            }

            fn create_table_statement(&self) -> &'static str {
                Self::CREATE_TABLE
            }

            fn create_index_statements(&self) -> &'static [&'static str] {
                &Self::CREATE_INDEXES
            }
        }

        impl ::tablecraft::core::ModelSchema for #schema_ident {
            type Model = #model;

            fn from_row(
                row: &::tablecraft::core::Row,
            ) -> ::std::result::Result<#model, ::tablecraft::core::Error> {
                ::std::result::Result::Ok(#model {
                    #(#field_reads,)*
                })
            }

            fn to_values(model: &#model) -> ::std::vec::Vec<::tablecraft::core::Value> {
                ::std::vec![#(#field_writes),*]
            }
        }
    }
}

fn column_info(column: &Column) -> TokenStream {
    let name = column.resolved_name();
    let quoted = quote_identifier(name);
    let nullable = column.nullable;
    let primary_key = column.primary_key;
    let auto_id = column.auto_id;

    quote! {
        ::tablecraft::core::ColumnInfo {
            name: #name,
            quoted: #quoted,
            nullable: #nullable,
            primary_key: #primary_key,
            auto_id: #auto_id,
        }
    }
}

// type_aliases
// the table's generated-type names bound to the runtime builders
fn type_aliases(table: &Table) -> TokenStream {
    let schema_ident = schema_ident(table);
    let types = &table.types;
    let relation = type_ident(&types.relation);
    let selector = type_ident(&types.selector);
    let updater = type_ident(&types.updater);
    let deleter = type_ident(&types.deleter);
    let inserter = type_ident(&types.inserter);

    quote! {
        pub type #relation<'c> = ::tablecraft::core::Relation<'c, #schema_ident>;
        pub type #selector<'c> = ::tablecraft::core::Selector<'c, #schema_ident>;
        pub type #updater<'c> = ::tablecraft::core::Updater<'c, #schema_ident>;
        pub type #deleter<'c> = ::tablecraft::core::Deleter<'c, #schema_ident>;
        pub type #inserter<'c> = ::tablecraft::core::Inserter<'c, #schema_ident>;
    }
}

// updates_trait
// one `set_<col>` per non-primary-key column
fn updates_trait(table: &Table) -> TokenStream {
    let trait_ident = updates_trait_ident(table);
    let schema_ident = schema_ident(table);
    let columns: Vec<&Column> = table.columns.iter().filter(|c| !c.primary_key).collect();

    let decls = columns.iter().map(|column| {
        let method = format_ident!("set_{}", snake(&column.name));
        let param = ident(&snake(&column.name));
        let ty = value_type(column);
        quote! {
            #[must_use]
            fn #method(self, #param: #ty) -> Self;
        }
    });
    let impls = columns.iter().map(|column| {
        let method = format_ident!("set_{}", snake(&column.name));
        let param = ident(&snake(&column.name));
        let ty = value_type(column);
        let quoted = quote_identifier(column.resolved_name());
        quote! {
            fn #method(self, #param: #ty) -> Self {
                self.set(#quoted, #param)
            }
        }
    });

    quote! {
        pub trait #trait_ident {
            #(#decls)*
        }

        impl #trait_ident for ::tablecraft::core::Updater<'_, #schema_ident> {
            #(#impls)*
        }
    }
}

fn value_type(column: &Column) -> TokenStream {
    let ty = column.kind.rust_type();
    if column.nullable {
        quote!(::std::option::Option<#ty>)
    } else {
        ty
    }
}
