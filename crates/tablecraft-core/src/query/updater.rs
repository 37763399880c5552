use crate::{
    connection::Connection,
    error::Error,
    query::{Conditional, Conditions, append_where},
    schema::ModelSchema,
    value::{ToValue, Value},
};
use tracing::trace;

///
/// Updater
///
/// Builds `UPDATE <table> SET ... [WHERE]`. Assignment parameters bind
/// before condition parameters.
///

#[derive(Clone)]
pub struct Updater<'c, S: ModelSchema> {
    connection: &'c dyn Connection,
    schema: S,
    conditions: Conditions,
    assignments: Vec<(&'static str, Value)>,
}

impl<'c, S: ModelSchema> Updater<'c, S> {
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
            assignments: Vec::new(),
        }
    }

    /// Assign `value` to the column with the given quoted identifier.
    #[must_use]
    pub fn set(mut self, quoted_column: &'static str, value: impl ToValue) -> Self {
        self.assignments.push((quoted_column, value.to_value()));
        self
    }

    /// `None` when no assignment has been made.
    #[must_use]
    pub fn to_sql(&self) -> Option<String> {
        if self.assignments.is_empty() {
            return None;
        }

        let sets: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect();
        let mut sql = format!(
            "UPDATE {} SET {}",
            self.schema.quoted_table_name(),
            sets.join(", ")
        );
        append_where(&mut sql, &self.conditions);

        Some(sql)
    }

    #[must_use]
    pub fn params(&self) -> Vec<Value> {
        self.assignments
            .iter()
            .map(|(_, value)| value.clone())
            .chain(self.conditions.params().iter().cloned())
            .collect()
    }

    /// Run the update and return the number of affected rows. An updater
    /// with no assignments touches nothing and returns 0.
    pub fn execute(&self) -> Result<usize, Error> {
        let Some(sql) = self.to_sql() else {
            return Ok(0);
        };
        trace!(%sql, "update");

        self.connection.execute(&sql, &self.params())
    }
}

impl<S: ModelSchema> Conditional for Updater<'_, S> {
    type Schema = S;

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}
