mod conditions;

use crate::script::ScriptedConnection;
use tablecraft::core::{Row, Value};

fn player_row(id: i64, name: &str, score: i32, guild: Option<&str>) -> Row {
    Row::new(vec![
        Value::Integer(id),
        Value::Text(name.to_string()),
        Value::Integer(i64::from(score)),
        guild.map_or(Value::Null, |g| Value::Text(g.to_string())),
        Value::Null,
    ])
}

fn connection() -> ScriptedConnection {
    ScriptedConnection::new()
}
