//! ## Crate layout
//! - `build`: code generator and the `build!` build-script macro.
//! - `core`: runtime contract the generated code binds to.
//! - `schema`: schema model, DDL rendering and the TOML front end.
//!
//! Generated sources refer to `::tablecraft::core` only, so a crate that
//! includes them needs just this one dependency.

pub use tablecraft_build as build;
pub use tablecraft_core as core;
pub use tablecraft_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use tablecraft_build::build;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        Conditional as _, Connection, Error, OnConflict, Row, TableSchema as _, ToValue as _,
        TransactionMode, Value,
    };
}
