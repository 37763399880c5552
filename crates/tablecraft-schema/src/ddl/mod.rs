//! Identifier quoting and DDL rendering.
//!
//! Output is a pure function of the table name and its columns in declaration
//! order; the schema fingerprint is computed over this text, so any change to
//! token order here changes every downstream fingerprint.


use crate::node::Column;

const QUOTE: char = '"';

/// Wrap an identifier in double quotes, doubling any embedded quote.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push(QUOTE);
    for ch in name.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);

    out
}

/// Inverse of [`quote_identifier`]. Returns `None` for text that quoting
/// could not have produced.
#[must_use]
pub fn unquote_identifier(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix(QUOTE)?.strip_suffix(QUOTE)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == QUOTE {
            // a lone quote inside the body is not a valid escape
            if chars.next() != Some(QUOTE) {
                return None;
            }
        }
        out.push(ch);
    }

    Some(out)
}

/// Render `CREATE TABLE` for the given columns.
#[must_use]
pub fn create_table_statement(table_name: &str, columns: &[Column]) -> String {
    let defs = columns
        .iter()
        .map(column_definition)
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE {} ({defs})", quote_identifier(table_name))
}

/// Render one `CREATE INDEX` per indexed, non-primary-key column.
#[must_use]
pub fn create_index_statements(table_name: &str, columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .filter(|c| c.indexed && !c.primary_key)
        .map(|c| create_index_statement(table_name, c))
        .collect()
}

#[must_use]
pub fn create_index_statement(table_name: &str, column: &Column) -> String {
    let column_name = column.resolved_name();
    let index_name = format!("index_{column_name}_on_{table_name}");

    format!(
        "CREATE INDEX {} ON {} ({})",
        quote_identifier(&index_name),
        quote_identifier(table_name),
        quote_identifier(column_name),
    )
}

// column_definition
// name, type, then constraints in a fixed order:
// PRIMARY KEY [ON CONFLICT p] [AUTOINCREMENT] | [UNIQUE [ON CONFLICT p]] [NOT NULL]
fn column_definition(column: &Column) -> String {
    let mut parts = vec![
        quote_identifier(column.resolved_name()),
        column.kind.sql_type().to_string(),
    ];

    if column.primary_key {
        parts.push("PRIMARY KEY".to_string());
        push_conflict_clause(&mut parts, column);
        if column.auto_id {
            parts.push("AUTOINCREMENT".to_string());
        }
    } else {
        if column.unique {
            parts.push("UNIQUE".to_string());
            push_conflict_clause(&mut parts, column);
        }
        if !column.nullable {
            parts.push("NOT NULL".to_string());
        }
    }

    parts.join(" ")
}

fn push_conflict_clause(parts: &mut Vec<String>, column: &Column) {
    if let Some(policy) = column.on_conflict.clause() {
        parts.push(format!("ON CONFLICT {policy}"));
    }
}
