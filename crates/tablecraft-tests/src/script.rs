//! Scripted storage double: records every call and answers queries from a
//! queue of canned result sets.

use std::{collections::VecDeque, sync::Mutex};
use tablecraft::core::{
    AsyncTransaction, Connection, Error, Row, TableSchema, TransactionMode, TransactionTask, Value,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Execute(String, Vec<Value>),
    Insert(String, Vec<Value>),
    Query(String, Vec<Value>),
    Transaction(TransactionMode),
    Migrate(Vec<&'static str>, String),
}

///
/// ScriptedConnection
///

#[derive(Debug, Default)]
pub struct ScriptedConnection {
    calls: Mutex<Vec<Call>>,
    results: Mutex<VecDeque<Vec<Row>>>,
    next_id: Mutex<i64>,
    migrate_error: Option<Error>,
}

impl ScriptedConnection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one result set for the next query.
    #[must_use]
    pub fn then_rows(self, rows: Vec<Row>) -> Self {
        self.results
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(rows);
        self
    }

    #[must_use]
    pub fn failing_migration(mut self, error: Error) -> Self {
        self.migrate_error = Some(error);
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(call);
    }
}

impl Connection for ScriptedConnection {
    fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, Error> {
        self.record(Call::Execute(sql.to_string(), params.to_vec()));
        Ok(1)
    }

    fn insert(&self, sql: &str, params: &[Value]) -> Result<i64, Error> {
        self.record(Call::Insert(sql.to_string(), params.to_vec()));

        let mut id = self
            .next_id
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *id += 1;

        Ok(*id)
    }

    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, Error> {
        self.record(Call::Query(sql.to_string(), params.to_vec()));

        Ok(self
            .results
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_default())
    }

    fn transaction_sync(
        &self,
        mode: TransactionMode,
        task: &mut dyn FnMut(&dyn Connection) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.record(Call::Transaction(mode));
        task(self)
    }

    fn transaction_async(&self, mode: TransactionMode, task: TransactionTask) -> AsyncTransaction {
        self.record(Call::Transaction(mode));
        AsyncTransaction::completed(task(self))
    }

    fn migrate(&self, schemas: &[&dyn TableSchema], fingerprint: &str) -> Result<(), Error> {
        let names = schemas.iter().map(|s| s.table_name()).collect();
        self.record(Call::Migrate(names, fingerprint.to_string()));

        self.migrate_error.clone().map_or(Ok(()), Err)
    }
}
