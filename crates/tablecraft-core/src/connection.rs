//! The storage collaborator boundary.
//!
//! Synchronous transaction and migration calls block; keep them off any
//! latency-sensitive thread. Asynchronous calls enqueue the task on the
//! connection's background context and return at once. A submitted task
//! always runs to completion or aborts; there is no cancel primitive.

use crate::{
    error::Error,
    schema::TableSchema,
    value::{Row, Value},
};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};

///
/// TransactionMode
///
/// `Exclusive` serializes against every other user of the connection;
/// `NonExclusive` lets concurrent readers proceed while it is open.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TransactionMode {
    #[default]
    Exclusive,
    NonExclusive,
}

/// A unit of work submitted for asynchronous execution.
pub type TransactionTask = Box<dyn FnOnce(&dyn Connection) -> Result<(), Error> + Send>;

///
/// Connection
///
/// Implemented by the storage engine. Generated code only forwards to it.
///

pub trait Connection: Sync {
    /// Run a statement and return the number of affected rows.
    fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, Error>;

    /// Run an insert and return the new row id.
    fn insert(&self, sql: &str, params: &[Value]) -> Result<i64, Error>;

    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, Error>;

    /// Run `task` inside a transaction on the calling thread. An `Err` from
    /// the task rolls back and is returned unchanged.
    fn transaction_sync(
        &self,
        mode: TransactionMode,
        task: &mut dyn FnMut(&dyn Connection) -> Result<(), Error>,
    ) -> Result<(), Error>;

    /// Enqueue `task` on the background context.
    fn transaction_async(&self, mode: TransactionMode, task: TransactionTask) -> AsyncTransaction;

    /// Compare `fingerprint` against persisted metadata and apply DDL if they
    /// differ. Fails with `Error::SchemaViolation` when the difference cannot
    /// be reconciled.
    fn migrate(&self, schemas: &[&dyn TableSchema], fingerprint: &str) -> Result<(), Error>;
}

///
/// AsyncTransaction
///
/// Failure channel for an asynchronous transaction.
///

#[derive(Debug)]
pub struct AsyncTransaction {
    receiver: Receiver<Result<(), Error>>,
}

impl AsyncTransaction {
    /// Create a pending transaction and the completer the engine resolves.
    #[must_use]
    pub fn pending() -> (TransactionCompleter, Self) {
        let (sender, receiver) = mpsc::sync_channel(1);

        (TransactionCompleter { sender }, Self { receiver })
    }

    /// An already-resolved transaction.
    #[must_use]
    pub fn completed(result: Result<(), Error>) -> Self {
        let (completer, tx) = Self::pending();
        completer.complete(result);

        tx
    }

    /// Block until the task has finished.
    pub fn wait(self) -> Result<(), Error> {
        self.receiver.recv().unwrap_or(Err(Error::Disconnected))
    }

    /// Poll for the outcome without blocking.
    #[must_use]
    pub fn try_result(&self) -> Option<Result<(), Error>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(Error::Disconnected)),
        }
    }
}

///
/// TransactionCompleter
///

#[derive(Debug)]
pub struct TransactionCompleter {
    sender: SyncSender<Result<(), Error>>,
}

impl TransactionCompleter {
    pub fn complete(self, result: Result<(), Error>) {
        // the caller may have dropped its handle; the outcome is then unobserved
        let _ = self.sender.send(result);
    }
}
