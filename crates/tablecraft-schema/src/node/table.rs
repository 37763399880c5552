use crate::{ddl, prelude::*};

///
/// Table
///
/// A fully resolved table schema: columns in declaration order, the names of
/// the generated types, and the rendered DDL.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub types: TypeNames,
    pub create_table: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub create_indexes: Vec<String>,
}

impl Table {
    /// Build a table and render its DDL from the columns.
    #[must_use]
    pub fn new(name: impl Into<String>, types: TypeNames, columns: Vec<Column>) -> Self {
        let name = name.into();
        let create_table = ddl::create_table_statement(&name, &columns);
        let create_indexes = ddl::create_index_statements(&name, &columns);

        Self {
            name,
            columns,
            types,
            create_table,
            create_indexes,
        }
    }

    #[must_use]
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.primary_key)
    }

    #[must_use]
    pub fn auto_id_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.auto_id)
    }

    pub fn conditional_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_conditional())
    }
}

///
/// TypeNames
///
/// Identifiers of the model type and the per-table generated builder types.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TypeNames {
    pub model: String,
    pub relation: String,
    pub selector: String,
    pub updater: String,
    pub deleter: String,
    pub inserter: String,
}

impl TypeNames {
    /// Conventional names derived from the model identifier.
    #[must_use]
    pub fn for_model(model: &str) -> Self {
        Self {
            model: model.to_string(),
            relation: format!("{model}Relation"),
            selector: format!("{model}Selector"),
            updater: format!("{model}Updater"),
            deleter: format!("{model}Deleter"),
            inserter: format!("{model}Inserter"),
        }
    }
}
