use crate::prelude::*;
use std::ops::Not;

///
/// Column
///
/// One declared column of a table. `name` is the model field identifier;
/// `column_name` overrides the SQL identifier when the two differ.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,

    pub kind: StorageKind,

    #[serde(skip_serializing_if = "Not::not")]
    pub nullable: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub indexed: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub unique: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub primary_key: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub auto_id: bool,

    pub on_conflict: OnConflict,
}

impl Column {
    /// A plain, non-null, unindexed column.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: StorageKind) -> Self {
        Self {
            name: name.into(),
            column_name: None,
            kind,
            nullable: false,
            indexed: false,
            unique: false,
            primary_key: false,
            auto_id: false,
            on_conflict: OnConflict::None,
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    #[must_use]
    pub fn auto_id(mut self) -> Self {
        self.auto_id = true;
        self
    }

    #[must_use]
    pub fn on_conflict(mut self, policy: OnConflict) -> Self {
        self.on_conflict = policy;
        self
    }

    #[must_use]
    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    #[must_use]
    /// Resolve the SQL identifier of this column.
    pub fn resolved_name(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }

    /// True when the value type cannot represent absence.
    /// A nullable numeric column is stored boxed and is therefore not primitive.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        self.kind.is_primitive_capable() && !self.nullable
    }

    /// Columns that receive condition operations.
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        self.indexed || self.primary_key
    }
}
