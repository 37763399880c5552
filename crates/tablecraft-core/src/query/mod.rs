//! Table-scoped builders bound to a connection and a model schema.
//!
//! Every builder accumulates predicate fragments through [`Conditional`];
//! fragments always compose by conjunction in the order they were added.

mod conditions;
mod deleter;
mod inserter;
mod relation;
mod selector;
mod updater;


pub use conditions::*;
pub use deleter::Deleter;
pub use inserter::{Inserter, create_model};
pub use relation::Relation;
pub use selector::Selector;
pub use updater::Updater;

use crate::schema::TableSchema;

// column_list
// quoted column identifiers joined for SELECT / INSERT lists
fn column_list<'a>(columns: impl Iterator<Item = &'a crate::schema::ColumnInfo>) -> String {
    columns.map(|c| c.quoted).collect::<Vec<_>>().join(", ")
}

fn append_where(sql: &mut String, conditions: &Conditions) {
    if let Some(clause) = conditions.where_clause() {
        sql.push_str(" WHERE ");
        sql.push_str(&clause);
    }
}

fn select_all_sql(schema: &dyn TableSchema) -> String {
    format!(
        "SELECT {} FROM {}",
        column_list(schema.columns().iter()),
        schema.quoted_table_name()
    )
}
