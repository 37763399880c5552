use crate::{
    conflict::OnConflict,
    connection::Connection,
    error::Error,
    query::{Conditional, Selector, column_list},
    schema::{ModelSchema, TableSchema},
    value::Value,
};
use tracing::trace;

///
/// Inserter
///
/// A prepared `INSERT [OR <policy>] INTO` statement. Unless `skip_auto_id`
/// is set, the auto-id column is left out so the engine assigns identity;
/// with it set, the model's explicit id is written as-is.
///

pub struct Inserter<'c, S: ModelSchema> {
    connection: &'c dyn Connection,
    on_conflict: OnConflict,
    skip_auto_id: bool,
    mask: Vec<bool>,
    sql: String,
    _schema: S,
}

impl<'c, S: ModelSchema> Inserter<'c, S> {
    /// The one constructor every prepared-insert shape routes through.
    #[must_use]
    pub fn new(
        connection: &'c dyn Connection,
        schema: S,
        on_conflict: OnConflict,
        skip_auto_id: bool,
    ) -> Self {
        let mask: Vec<bool> = schema
            .columns()
            .iter()
            .map(|c| skip_auto_id || !c.auto_id)
            .collect();
        let sql = insert_sql(&schema, on_conflict, &mask);

        Self {
            connection,
            on_conflict,
            skip_auto_id,
            mask,
            sql,
            _schema: schema,
        }
    }

    #[must_use]
    pub const fn on_conflict(&self) -> OnConflict {
        self.on_conflict
    }

    #[must_use]
    pub const fn skip_auto_id(&self) -> bool {
        self.skip_auto_id
    }

    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Values of `model` that this statement binds.
    #[must_use]
    pub fn bind_values(&self, model: &S::Model) -> Vec<Value> {
        S::to_values(model)
            .into_iter()
            .zip(&self.mask)
            .filter_map(|(value, keep)| keep.then_some(value))
            .collect()
    }

    /// Insert one model and return its row id.
    pub fn execute(&self, model: &S::Model) -> Result<i64, Error> {
        trace!(sql = %self.sql, "insert");

        self.connection.insert(&self.sql, &self.bind_values(model))
    }

    /// Insert every model in order, returning their row ids.
    pub fn execute_all<'m>(
        &self,
        models: impl IntoIterator<Item = &'m S::Model>,
    ) -> Result<Vec<i64>, Error>
    where
        S::Model: 'm,
    {
        models.into_iter().map(|model| self.execute(model)).collect()
    }
}

fn insert_sql(schema: &dyn TableSchema, on_conflict: OnConflict, mask: &[bool]) -> String {
    let verb = match on_conflict.or_clause() {
        Some(policy) => format!("INSERT OR {policy} INTO"),
        None => "INSERT INTO".to_string(),
    };
    let bound = mask.iter().filter(|keep| **keep).count();

    // every column engine-assigned
    if bound == 0 {
        return format!("{verb} {} DEFAULT VALUES", schema.quoted_table_name());
    }

    let columns = column_list(
        schema
            .columns()
            .iter()
            .zip(mask)
            .filter_map(|(c, keep)| keep.then_some(c)),
    );
    let placeholders = vec!["?"; bound].join(", ");

    format!(
        "{verb} {} ({columns}) VALUES ({placeholders})",
        schema.quoted_table_name()
    )
}

/// Insert the model produced by `factory` and read it back by row id, so the
/// returned model carries engine-assigned identity.
pub fn create_model<S: ModelSchema>(
    connection: &dyn Connection,
    schema: S,
    factory: impl FnOnce() -> S::Model,
) -> Result<S::Model, Error> {
    let model = factory();
    let row_id = Inserter::new(connection, schema, OnConflict::None, false).execute(&model)?;

    Selector::new(connection, schema)
        .where_("rowid = ?", [Value::Integer(row_id)])
        .value()
}
