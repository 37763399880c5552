//! Schema model for the tablecraft compiler.
//!
//! Columns, tables and databases are plain immutable values produced once by
//! the front end and read by every generation stage.

pub mod ddl;
pub mod load;
pub mod node;
pub mod types;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        node::*,
        types::{OnConflict, StorageKind},
    };
    pub use serde::{Deserialize, Serialize};
}

pub use load::LoadError;
