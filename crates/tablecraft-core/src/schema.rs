use crate::{
    error::Error,
    value::{Row, Value},
};

///
/// ColumnInfo
///
/// Static per-column metadata emitted by the compiler. `quoted` is the
/// already-escaped SQL identifier.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub quoted: &'static str,
    pub nullable: bool,
    pub primary_key: bool,
    pub auto_id: bool,
}

///
/// TableSchema
///
/// Object-safe table metadata. The migration collaborator receives the
/// database's schemas as `&[&dyn TableSchema]`.
///

pub trait TableSchema: Sync {
    fn table_name(&self) -> &'static str;

    /// The quoted table identifier.
    fn quoted_table_name(&self) -> &'static str;

    /// Columns in declaration order.
    fn columns(&self) -> &'static [ColumnInfo];

    fn create_table_statement(&self) -> &'static str;

    fn create_index_statements(&self) -> &'static [&'static str];

    fn auto_id_column(&self) -> Option<&'static ColumnInfo> {
        self.columns().iter().find(|c| c.auto_id)
    }
}

///
/// ModelSchema
///
/// Binds a table schema to its model type. Generated schemas are unit
/// structs, so builders carry them by value.
///

pub trait ModelSchema: TableSchema + Copy + Default + 'static {
    type Model;

    /// Materialize one row whose values follow column declaration order.
    fn from_row(row: &Row) -> Result<Self::Model, Error>;

    /// Encode a model into values in column declaration order.
    fn to_values(model: &Self::Model) -> Vec<Value>;
}
