use crate::{DatabaseBuilder, OpGen, access::AccessGen, naming::schema_ident};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the fingerprint constant, the ordered schema list and the database
/// handle with its transaction passthroughs and per-table entry points.
#[must_use]
pub fn generate(builder: &DatabaseBuilder<'_>) -> TokenStream {
    let database = builder.database;
    let handle = format_ident!("{}", database.output_type);
    let schema_hash = builder.fingerprint().as_hex();

    let schemas = database.tables.iter().map(schema_ident);
    let table_methods = database
        .tables
        .iter()
        .map(|table| AccessGen { database, table }.generate());

    quote! {
        /// SHA-256 of every `CREATE TABLE` and `CREATE INDEX` statement, in order.
        pub const SCHEMA_HASH: &str = #schema_hash;

        /// Table schemas in declaration order.
        pub static SCHEMAS: &[&dyn ::tablecraft::core::TableSchema] = &[#(&#schemas),*];

        /// Database handle bound to one connection.
        ///
        /// `*_sync` transactions and `migrate` block the calling thread; keep
        /// them off latency-sensitive threads. `*_async` transactions are
        /// queued on the connection's background context and report through
        /// the returned handle.
        #[derive(Clone, Copy)]
        pub struct #handle<'c> {
            connection: &'c dyn ::tablecraft::core::Connection,
        }

        impl<'c> #handle<'c> {
            pub const SCHEMA_HASH: &'static str = SCHEMA_HASH;

            #[must_use]
            pub const fn new(connection: &'c dyn ::tablecraft::core::Connection) -> Self {
                Self { connection }
            }

            #[must_use]
            pub const fn connection(&self) -> &'c dyn ::tablecraft::core::Connection {
                self.connection
            }

            #[must_use]
            pub fn schemas(&self) -> &'static [&'static dyn ::tablecraft::core::TableSchema] {
                SCHEMAS
            }

            #[must_use]
            pub const fn schema_hash(&self) -> &'static str {
                SCHEMA_HASH
            }

            /// Run migration now instead of on first access.
            ///
            /// Fails with `Error::SchemaViolation` when the persisted schema
            /// cannot be reconciled.
            pub fn migrate(&self) -> ::std::result::Result<(), ::tablecraft::core::Error> {
                self.connection.migrate(SCHEMAS, SCHEMA_HASH)
            }

            /// Run `task` in an exclusive transaction on this thread.
            pub fn transaction_sync(
                &self,
                mut task: impl ::std::ops::FnMut(
                    &dyn ::tablecraft::core::Connection,
                ) -> ::std::result::Result<(), ::tablecraft::core::Error>,
            ) -> ::std::result::Result<(), ::tablecraft::core::Error> {
                self.connection
                    .transaction_sync(::tablecraft::core::TransactionMode::Exclusive, &mut task)
            }

            /// Queue `task` as an exclusive transaction.
            pub fn transaction_async(
                &self,
                task: impl ::std::ops::FnOnce(
                    &dyn ::tablecraft::core::Connection,
                ) -> ::std::result::Result<(), ::tablecraft::core::Error>
                    + ::std::marker::Send
                    + 'static,
            ) -> ::tablecraft::core::AsyncTransaction {
                self.connection.transaction_async(
                    ::tablecraft::core::TransactionMode::Exclusive,
                    ::std::boxed::Box::new(task),
                )
            }

            /// Run `task` in a non-exclusive transaction on this thread.
            pub fn transaction_non_exclusive_sync(
                &self,
                mut task: impl ::std::ops::FnMut(
                    &dyn ::tablecraft::core::Connection,
                ) -> ::std::result::Result<(), ::tablecraft::core::Error>,
            ) -> ::std::result::Result<(), ::tablecraft::core::Error> {
                self.connection
                    .transaction_sync(::tablecraft::core::TransactionMode::NonExclusive, &mut task)
            }

            /// Queue `task` as a non-exclusive transaction.
            pub fn transaction_non_exclusive_async(
                &self,
                task: impl ::std::ops::FnOnce(
                    &dyn ::tablecraft::core::Connection,
                ) -> ::std::result::Result<(), ::tablecraft::core::Error>
                    + ::std::marker::Send
                    + 'static,
            ) -> ::tablecraft::core::AsyncTransaction {
                self.connection.transaction_async(
                    ::tablecraft::core::TransactionMode::NonExclusive,
                    ::std::boxed::Box::new(task),
                )
            }

            #(#table_methods)*
        }
    }
}
