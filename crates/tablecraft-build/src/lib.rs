//! Compile-time code generator for tablecraft databases.
//!
//! Given a [`Database`] it emits, per table, a schema type with its DDL, the
//! builder aliases, a column setter trait and a condition trait; then one
//! database handle carrying the schema fingerprint, the transaction
//! passthroughs and every table's CRUD entry points.

pub mod access;
pub mod condition;
pub mod config;
mod db;
mod error;
pub mod fingerprint;
mod macros;
mod model;
mod naming;


pub use config::{BuildConfig, BuildOutput, DEFAULT_OUTPUT_FILE, run};
pub use error::BuildError;
pub use fingerprint::{SchemaFingerprint, schema_fingerprint};

use condition::ConditionGen;
use proc_macro2::TokenStream;
use quote::quote;
use tablecraft_schema::node::Database;
use tracing::debug;

///
/// OpGen
///
/// A generator that first derives its operation list from the schema and
/// then renders it. Operation lists are deterministic in declaration order.
///

pub trait OpGen {
    type Op;

    fn ops(&self) -> Vec<Self::Op>;

    fn generate(&self) -> TokenStream;
}

// generate
#[must_use]
/// Generate the database source for `database`.
pub fn generate(database: &Database) -> String {
    generate_with_fingerprint(database).0
}

pub(crate) fn generate_with_fingerprint(database: &Database) -> (String, SchemaFingerprint) {
    let builder = DatabaseBuilder::new(database);
    let fingerprint = builder.fingerprint();

    (builder.generate().to_string(), fingerprint)
}

///
/// DatabaseBuilder
///

pub struct DatabaseBuilder<'a> {
    pub database: &'a Database,
    fingerprint: SchemaFingerprint,
}

impl<'a> DatabaseBuilder<'a> {
    #[must_use]
    pub fn new(database: &'a Database) -> Self {
        Self {
            database,
            fingerprint: schema_fingerprint(database),
        }
    }

    #[must_use]
    pub const fn fingerprint(&self) -> SchemaFingerprint {
        self.fingerprint
    }

    #[must_use]
    /// Generate every table's items followed by the database handle.
    pub fn generate(&self) -> TokenStream {
        let mut tokens = quote!();

        for table in &self.database.tables {
            debug!(table = %table.name, model = %table.types.model, "generating table");

            tokens.extend(model::generate(self.database, table));
            tokens.extend(ConditionGen(table).generate());
        }
        tokens.extend(db::generate(self));

        tokens
    }
}
