use crate::{
    conflict::OnConflict,
    connection::Connection,
    error::Error,
    query::{Conditional, Conditions, Deleter, Inserter, Selector, Updater},
    schema::ModelSchema,
};

///
/// Relation
///
/// Entry point for table-scoped operations. Conditions added to a relation
/// carry over into every builder it starts.
///

#[derive(Clone)]
pub struct Relation<'c, S: ModelSchema> {
    connection: &'c dyn Connection,
    schema: S,
    conditions: Conditions,
}

impl<'c, S: ModelSchema> Relation<'c, S> {
    #[must_use]
    pub const fn new(connection: &'c dyn Connection, schema: S) -> Self {
        Self {
            connection,
            schema,
            conditions: Conditions::new(),
        }
    }

    #[must_use]
    pub const fn schema(&self) -> S {
        self.schema
    }

    #[must_use]
    pub fn selector(&self) -> Selector<'c, S> {
        Selector::with_conditions(self.connection, self.schema, self.conditions.clone())
    }

    #[must_use]
    pub fn updater(&self) -> Updater<'c, S> {
        Updater::with_conditions(self.connection, self.schema, self.conditions.clone())
    }

    #[must_use]
    pub fn deleter(&self) -> Deleter<'c, S> {
        Deleter::with_conditions(self.connection, self.schema, self.conditions.clone())
    }

    #[must_use]
    pub fn inserter(&self, on_conflict: OnConflict, skip_auto_id: bool) -> Inserter<'c, S> {
        Inserter::new(self.connection, self.schema, on_conflict, skip_auto_id)
    }

    pub fn count(&self) -> Result<i64, Error> {
        self.selector().count()
    }

    pub fn select_all(&self) -> Result<Vec<S::Model>, Error> {
        self.selector().execute()
    }
}

impl<S: ModelSchema> Conditional for Relation<'_, S> {
    type Schema = S;

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}
