//! End-to-end coverage: `build.rs` compiles `schema/schema.toml` and the
//! generated source is included in [`db`].

pub mod db;
pub mod model;
pub mod script;

#[cfg(test)]
mod test;
