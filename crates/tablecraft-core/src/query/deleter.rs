use crate::{
    connection::Connection,
    error::Error,
    query::{Conditional, Conditions, append_where},
    schema::ModelSchema,
};
use tracing::trace;

///
/// Deleter
///

#[derive(Clone)]
pub struct Deleter<'c, S: ModelSchema> {
    connection: &'c dyn Connection,
    schema: S,
    conditions: Conditions,
}

impl<'c, S: ModelSchema> Deleter<'c, S> {
    #[must_use]
    pub const fn new(connection: &'c dyn Connection, schema: S) -> Self {
        Self::with_conditions(connection, schema, Conditions::new())
    }

    pub(crate) const fn with_conditions(
        connection: &'c dyn Connection,
        schema: S,
        conditions: Conditions,
    ) -> Self {
        Self {
            connection,
            schema,
            conditions,
        }
    }

    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.schema.quoted_table_name());
        append_where(&mut sql, &self.conditions);

        sql
    }

    /// Run the delete and return the number of removed rows.
    pub fn execute(&self) -> Result<usize, Error> {
        let sql = self.to_sql();
        trace!(%sql, "delete");

        self.connection.execute(&sql, self.conditions.params())
    }
}

impl<S: ModelSchema> Conditional for Deleter<'_, S> {
    type Schema = S;

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}
