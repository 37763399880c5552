//! Runtime contract for code emitted by the tablecraft compiler.
//!
//! Generated database handles, schema impls and condition traits bind to the
//! types here; the storage engine plugs in through [`Connection`].

pub mod conflict;
pub mod connection;
pub mod error;
pub mod query;
pub mod schema;
pub mod value;

#[cfg(test)]
pub(crate) mod test_support;

pub use conflict::OnConflict;
pub use connection::{
    AsyncTransaction, Connection, TransactionCompleter, TransactionMode, TransactionTask,
};
pub use error::Error;
pub use query::{
    Conditional, Conditions, Deleter, Inserter, NO_PARAMS, Relation, Selector, Updater,
    create_model,
};
pub use schema::{ColumnInfo, ModelSchema, TableSchema};
pub use value::{FromValue, Row, ToValue, Value};
