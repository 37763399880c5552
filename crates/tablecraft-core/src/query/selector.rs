use crate::{
    connection::Connection,
    error::Error,
    query::{Conditional, Conditions, append_where, select_all_sql},
    schema::ModelSchema,
    value::Value,
};
use tracing::trace;

///
/// Selector
///
/// Builds `SELECT <columns> FROM <table> [WHERE] [ORDER BY] [LIMIT] [OFFSET]`.
///

#[derive(Clone)]
pub struct Selector<'c, S: ModelSchema> {
    connection: &'c dyn Connection,
    schema: S,
    conditions: Conditions,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl<'c, S: ModelSchema> Selector<'c, S> {
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
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Append an ordering term, e.g. `"\"score\" DESC"`.
    #[must_use]
    pub fn order_by(mut self, term: impl Into<String>) -> Self {
        self.order_by.push(term.into());
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = select_all_sql(&self.schema);
        append_where(&mut sql, &self.conditions);

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        sql
    }

    #[must_use]
    pub fn params(&self) -> &[Value] {
        self.conditions.params()
    }

    pub fn execute(&self) -> Result<Vec<S::Model>, Error> {
        let sql = self.to_sql();
        trace!(%sql, "select");

        self.connection
            .query(&sql, self.conditions.params())?
            .iter()
            .map(S::from_row)
            .collect()
    }

    /// The first matching model, if any.
    pub fn first(&self) -> Result<Option<S::Model>, Error> {
        let mut rows = self.clone().limit(1).execute()?;

        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// The first matching model; `Error::NotFound` when nothing matches.
    pub fn value(&self) -> Result<S::Model, Error> {
        self.first()?.ok_or(Error::NotFound)
    }

    pub fn count(&self) -> Result<i64, Error> {
        let mut sql = format!("SELECT COUNT(*) FROM {}", self.schema.quoted_table_name());
        append_where(&mut sql, &self.conditions);
        trace!(%sql, "count");

        let rows = self.connection.query(&sql, self.conditions.params())?;
        let row = rows.first().ok_or(Error::NotFound)?;

        row.get(0)
    }
}

impl<S: ModelSchema> Conditional for Selector<'_, S> {
    type Schema = S;

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}
