mod column;
mod database;
mod table;

pub use column::*;
pub use database::*;
pub use table::*;
