use thiserror::Error as ThisError;

///
/// Error
///
/// Failures surfaced by the generated access surface. `SchemaViolation` and
/// `TransactionAbort` are the two kinds the schema layer defines; the rest
/// are reported by the storage collaborator or by row decoding.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// Persisted schema state cannot be reconciled with the declared schema.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// A submitted transaction task aborted explicitly.
    #[error("transaction aborted: {0}")]
    TransactionAbort(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("cannot decode column {index}: expected {expected}, found {found}")]
    Decode {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("row has no column at index {0}")]
    MissingColumn(usize),

    #[error("no row matched")]
    NotFound,

    #[error("transaction completion channel closed before a result was delivered")]
    Disconnected,
}

impl Error {
    pub fn schema_violation(message: impl Into<String>) -> Self {
        Self::SchemaViolation(message.into())
    }

    pub fn transaction_abort(message: impl Into<String>) -> Self {
        Self::TransactionAbort(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    #[must_use]
    pub const fn is_transaction_abort(&self) -> bool {
        matches!(self, Self::TransactionAbort(_))
    }

    #[must_use]
    pub const fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation(_))
    }
}
