//! Per-table CRUD entry points on the generated database handle.

use crate::{
    OpGen,
    naming::{model_path, model_stem, schema_ident, type_ident},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tablecraft_schema::{
    node::{Database, Table},
    types::OnConflict,
};
use tracing::debug;

///
/// AccessKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AccessKind {
    LoadFromRow,
    Create,
    RelationOf,
    SelectFrom,
    UpdateFrom,
    DeleteFrom,
    InsertInto,
    PrepareInsert,
    PrepareInsertOnConflict,
    PrepareInsertWith,
}

impl AccessKind {
    pub const ALL: [Self; 10] = [
        Self::LoadFromRow,
        Self::Create,
        Self::RelationOf,
        Self::SelectFrom,
        Self::UpdateFrom,
        Self::DeleteFrom,
        Self::InsertInto,
        Self::PrepareInsert,
        Self::PrepareInsertOnConflict,
        Self::PrepareInsertWith,
    ];

    #[must_use]
    pub fn method(self, stem: &str) -> String {
        match self {
            Self::LoadFromRow => format!("load_{stem}_from_row"),
            Self::Create => format!("create_{stem}"),
            Self::RelationOf => format!("relation_of_{stem}"),
            Self::SelectFrom => format!("select_from_{stem}"),
            Self::UpdateFrom => format!("update_from_{stem}"),
            Self::DeleteFrom => format!("delete_from_{stem}"),
            Self::InsertInto => format!("insert_into_{stem}"),
            Self::PrepareInsert => format!("prepare_insert_into_{stem}"),
            Self::PrepareInsertOnConflict => format!("prepare_insert_into_{stem}_on_conflict"),
            Self::PrepareInsertWith => format!("prepare_insert_into_{stem}_with"),
        }
    }

    /// Arguments a prepared-insert shape fixes before forwarding to the
    /// canonical two-argument form. `None` means the caller supplies it.
    #[must_use]
    pub const fn insert_defaults(self) -> Option<(Option<OnConflict>, Option<bool>)> {
        match self {
            Self::PrepareInsert => Some((Some(OnConflict::None), Some(false))),
            Self::PrepareInsertOnConflict => Some((None, Some(false))),
            Self::PrepareInsertWith => Some((None, None)),
            _ => None,
        }
    }
}

///
/// AccessOp
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessOp {
    pub method: String,
    pub kind: AccessKind,
}

///
/// AccessGen
///
/// Emits the handle methods for one table. The output is a list of
/// associated functions meant to sit inside the handle's `impl` block.
///

pub struct AccessGen<'a> {
    pub database: &'a Database,
    pub table: &'a Table,
}

impl OpGen for AccessGen<'_> {
    type Op = AccessOp;

    fn ops(&self) -> Vec<AccessOp> {
        let stem = model_stem(self.table);

        AccessKind::ALL
            .into_iter()
            .map(|kind| AccessOp {
                method: kind.method(&stem),
                kind,
            })
            .collect()
    }

    fn generate(&self) -> TokenStream {
        let ops = self.ops();
        debug!(table = %self.table.name, ops = ops.len(), "access ops");

        let methods = ops.iter().map(|op| self.render(op));

        quote!(#(#methods)*)
    }
}

impl AccessGen<'_> {
    fn method_ident(&self, kind: AccessKind) -> proc_macro2::Ident {
        format_ident!("{}", kind.method(&model_stem(self.table)))
    }

    fn render(&self, op: &AccessOp) -> TokenStream {
        let table = self.table;
        let method = format_ident!("{}", op.method);
        let model = model_path(self.database, table);
        let schema = schema_ident(table);
        let types = &table.types;
        let canonical = self.method_ident(AccessKind::PrepareInsertWith);

        match op.kind {
            AccessKind::LoadFromRow => quote! {
                /// Materialize one row into a model.
                pub fn #method(
                    &self,
                    row: &::tablecraft::core::Row,
                ) -> ::std::result::Result<#model, ::tablecraft::core::Error> {
                    <#schema as ::tablecraft::core::ModelSchema>::from_row(row)
                }
            },
            AccessKind::Create => quote! {
                /// Insert the model built by `factory` and read it back with its row id.
                pub fn #method(
                    &self,
                    factory: impl ::std::ops::FnOnce() -> #model,
                ) -> ::std::result::Result<#model, ::tablecraft::core::Error> {
                    ::tablecraft::core::create_model(self.connection, #schema, factory)
                }
            },
            AccessKind::RelationOf => {
                let ty = type_ident(&types.relation);
                let doc = format!(
                    " Relation of `{}`, the entry point of every table operation.",
                    table.name
                );
                quote! {
                    #[doc = #doc]
                    #[must_use]
                    pub const fn #method(&self) -> #ty<'c> {
                        ::tablecraft::core::Relation::new(self.connection, #schema)
                    }
                }
            }
            AccessKind::SelectFrom => {
                let ty = type_ident(&types.selector);
                let doc = format!(" Start `SELECT * FROM {} ...`.", table.name);
                quote! {
                    #[doc = #doc]
                    #[must_use]
                    pub const fn #method(&self) -> #ty<'c> {
                        ::tablecraft::core::Selector::new(self.connection, #schema)
                    }
                }
            }
            AccessKind::UpdateFrom => {
                let ty = type_ident(&types.updater);
                let doc = format!(" Start `UPDATE {} ...`.", table.name);
                quote! {
                    #[doc = #doc]
                    #[must_use]
                    pub const fn #method(&self) -> #ty<'c> {
                        ::tablecraft::core::Updater::new(self.connection, #schema)
                    }
                }
            }
            AccessKind::DeleteFrom => {
                let ty = type_ident(&types.deleter);
                let doc = format!(" Start `DELETE FROM {} ...`.", table.name);
                quote! {
                    #[doc = #doc]
                    #[must_use]
                    pub const fn #method(&self) -> #ty<'c> {
                        ::tablecraft::core::Deleter::new(self.connection, #schema)
                    }
                }
            }
            AccessKind::InsertInto => {
                let prepare = self.method_ident(AccessKind::PrepareInsert);
                quote! {
                    /// Insert one model with the default prepared statement; returns its row id.
                    pub fn #method(
                        &self,
                        model: &#model,
                    ) -> ::std::result::Result<i64, ::tablecraft::core::Error> {
                        self.#prepare().execute(model)
                    }
                }
            }
            AccessKind::PrepareInsert => {
                let ty = type_ident(&types.inserter);
                let on_conflict = OnConflict::None;
                quote! {
                    /// Prepared `INSERT INTO` with no conflict clause and engine-assigned ids.
                    #[must_use]
                    pub fn #method(&self) -> #ty<'c> {
                        self.#canonical(#on_conflict, false)
                    }
                }
            }
            AccessKind::PrepareInsertOnConflict => {
                let ty = type_ident(&types.inserter);
                quote! {
                    /// Prepared `INSERT OR <on_conflict> INTO` with engine-assigned ids.
                    #[must_use]
                    pub fn #method(
                        &self,
                        on_conflict: ::tablecraft::core::OnConflict,
                    ) -> #ty<'c> {
                        self.#canonical(on_conflict, false)
                    }
                }
            }
            AccessKind::PrepareInsertWith => {
                let ty = type_ident(&types.inserter);
                quote! {
                    /// Prepared `INSERT OR <on_conflict> INTO`. With `skip_auto_id`
                    /// the model's own id is written instead of an engine-assigned one.
                    #[must_use]
                    pub fn #method(
                        &self,
                        on_conflict: ::tablecraft::core::OnConflict,
                        skip_auto_id: bool,
                    ) -> #ty<'c> {
                        ::tablecraft::core::Inserter::new(
                            self.connection,
                            #schema,
                            on_conflict,
                            skip_auto_id,
                        )
                    }
                }
            }
        }
    }
}
