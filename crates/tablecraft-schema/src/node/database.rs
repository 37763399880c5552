use crate::prelude::*;

///
/// Database
///
/// Ordered tables plus the module path of the model types and the
/// identifier of the generated database handle.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Database {
    pub package: String,
    pub output_type: String,
    pub tables: Vec<Table>,
}

impl Database {
    #[must_use]
    pub fn new(
        package: impl Into<String>,
        output_type: impl Into<String>,
        tables: Vec<Table>,
    ) -> Self {
        Self {
            package: package.into(),
            output_type: output_type.into(),
            tables,
        }
    }

    /// Every DDL statement in fingerprint order: each table's `CREATE TABLE`
    /// followed by its `CREATE INDEX` statements.
    pub fn ddl_statements(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().flat_map(|table| {
            std::iter::once(table.create_table.as_str())
                .chain(table.create_indexes.iter().map(String::as_str))
        })
    }
}
