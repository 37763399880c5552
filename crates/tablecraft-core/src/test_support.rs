//! In-memory connection double that records every statement it receives.

use crate::{
    connection::{AsyncTransaction, Connection, TransactionMode, TransactionTask},
    error::Error,
    schema::{ColumnInfo, ModelSchema, TableSchema},
    value::{Row, Value},
};
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Execute(String, Vec<Value>),
    Insert(String, Vec<Value>),
    Query(String, Vec<Value>),
    Transaction(TransactionMode),
    Migrate(Vec<&'static str>, String),
}

#[derive(Debug, Default)]
pub struct RecordingConnection {
    calls: Mutex<Vec<Call>>,
    rows: Mutex<Vec<Row>>,
    next_id: Mutex<i64>,
    fail_insert_at: Option<i64>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows returned by every subsequent query.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        let conn = Self::default();
        *conn.rows.lock().unwrap() = rows;
        conn
    }

    /// The insert that would be assigned row id `id` fails with a storage error.
    pub fn failing_insert_at(mut self, id: i64) -> Self {
        self.fail_insert_at = Some(id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Connection for RecordingConnection {
    fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, Error> {
        self.record(Call::Execute(sql.to_string(), params.to_vec()));
        Ok(1)
    }

    fn insert(&self, sql: &str, params: &[Value]) -> Result<i64, Error> {
        self.record(Call::Insert(sql.to_string(), params.to_vec()));
        let mut id = self.next_id.lock().unwrap();
        if self.fail_insert_at == Some(*id + 1) {
            return Err(Error::storage("UNIQUE constraint failed"));
        }
        *id += 1;
        Ok(*id)
    }

    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, Error> {
        self.record(Call::Query(sql.to_string(), params.to_vec()));
        Ok(self.rows.lock().unwrap().clone())
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
        Ok(())
    }
}

///
/// Player
///
/// Hand-written equivalent of a compiler-emitted schema:
/// `id` auto-id primary key, `name` text, `score` int, `guild` nullable text.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub score: i32,
    pub guild: Option<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerSchema;

static PLAYER_COLUMNS: [ColumnInfo; 4] = [
    ColumnInfo {
        name: "id",
        quoted: "\"id\"",
        nullable: false,
        primary_key: true,
        auto_id: true,
    },
    ColumnInfo {
        name: "name",
        quoted: "\"name\"",
        nullable: false,
        primary_key: false,
        auto_id: false,
    },
    ColumnInfo {
        name: "score",
        quoted: "\"score\"",
        nullable: false,
        primary_key: false,
        auto_id: false,
    },
    ColumnInfo {
        name: "guild",
        quoted: "\"guild\"",
        nullable: true,
        primary_key: false,
        auto_id: false,
    },
];

impl TableSchema for PlayerSchema {
    fn table_name(&self) -> &'static str {
        "player"
    }

    fn quoted_table_name(&self) -> &'static str {
        "\"player\""
    }

    fn columns(&self) -> &'static [ColumnInfo] {
        &PLAYER_COLUMNS
    }

    fn create_table_statement(&self) -> &'static str {
        "CREATE TABLE \"player\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \"name\" TEXT NOT NULL, \"score\" INTEGER NOT NULL, \"guild\" TEXT)"
    }

    fn create_index_statements(&self) -> &'static [&'static str] {
        &["CREATE INDEX \"index_score_on_player\" ON \"player\" (\"score\")"]
    }
}

impl ModelSchema for PlayerSchema {
    type Model = Player;

    fn from_row(row: &Row) -> Result<Player, Error> {
        Ok(Player {
            id: row.get(0)?,
            name: row.get(1)?,
            score: row.get(2)?,
            guild: row.get(3)?,
        })
    }

    fn to_values(model: &Player) -> Vec<Value> {
        use crate::value::ToValue;

        vec![
            model.id.to_value(),
            model.name.to_value(),
            model.score.to_value(),
            model.guild.to_value(),
        ]
    }
}

pub fn player_row(id: i64, name: &str, score: i32) -> Row {
    Row::new(vec![
        Value::Integer(id),
        Value::Text(name.to_string()),
        Value::Integer(i64::from(score)),
        Value::Null,
    ])
}

///
/// TagSchema
///
/// A table whose only column is the auto-id primary key.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TagSchema;

static TAG_COLUMNS: [ColumnInfo; 1] = [ColumnInfo {
    name: "id",
    quoted: "\"id\"",
    nullable: false,
    primary_key: true,
    auto_id: true,
}];

impl TableSchema for TagSchema {
    fn table_name(&self) -> &'static str {
        "tag"
    }

    fn quoted_table_name(&self) -> &'static str {
        "\"tag\""
    }

    fn columns(&self) -> &'static [ColumnInfo] {
        &TAG_COLUMNS
    }

    fn create_table_statement(&self) -> &'static str {
        "CREATE TABLE \"tag\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT)"
    }

    fn create_index_statements(&self) -> &'static [&'static str] {
        &[]
    }
}

impl ModelSchema for TagSchema {
    type Model = i64;

    fn from_row(row: &Row) -> Result<i64, Error> {
        row.get(0)
    }

    fn to_values(model: &i64) -> Vec<Value> {
        vec![Value::Integer(*model)]
    }
}
