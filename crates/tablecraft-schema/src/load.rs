//! TOML front end for the schema model.
//!
//! This is the boundary with the upstream parser: definitions are decoded
//! as-is and turned into immutable [`Database`] values. Nothing here checks
//! primary-key uniqueness or identifier legality.

use crate::prelude::*;
use thiserror::Error as ThisError;

///
/// LoadError
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("schema decode failed: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// DatabaseDef
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseDef {
    pub package: String,
    pub output_type: String,

    #[serde(default, rename = "table")]
    pub tables: Vec<TableDef>,
}

///
/// TableDef
///
/// Generated-type names are optional and default to `<Model>Relation` and so on.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    pub name: String,
    pub model: String,

    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub updater: Option<String>,
    #[serde(default)]
    pub deleter: Option<String>,
    #[serde(default)]
    pub inserter: Option<String>,

    #[serde(default, rename = "column")]
    pub columns: Vec<ColumnDef>,
}

///
/// ColumnDef
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    pub name: String,
    pub kind: StorageKind,

    #[serde(default)]
    pub column_name: Option<String>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_id: bool,
    #[serde(default)]
    pub on_conflict: OnConflict,
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        Self {
            name: def.name,
            column_name: def.column_name,
            kind: def.kind,
            nullable: def.nullable,
            indexed: def.indexed,
            unique: def.unique,
            primary_key: def.primary_key,
            auto_id: def.auto_id,
            on_conflict: def.on_conflict,
        }
    }
}

impl From<TableDef> for Table {
    fn from(def: TableDef) -> Self {
        let defaults = TypeNames::for_model(&def.model);
        let types = TypeNames {
            model: def.model,
            relation: def.relation.unwrap_or(defaults.relation),
            selector: def.selector.unwrap_or(defaults.selector),
            updater: def.updater.unwrap_or(defaults.updater),
            deleter: def.deleter.unwrap_or(defaults.deleter),
            inserter: def.inserter.unwrap_or(defaults.inserter),
        };
        let columns = def.columns.into_iter().map(Column::from).collect();

        Self::new(def.name, types, columns)
    }
}

impl From<DatabaseDef> for Database {
    fn from(def: DatabaseDef) -> Self {
        let tables = def.tables.into_iter().map(Table::from).collect();

        Self::new(def.package, def.output_type, tables)
    }
}

impl Database {
    /// Decode a database definition from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, LoadError> {
        let def: DatabaseDef = toml::from_str(s)?;

        Ok(def.into())
    }
}
