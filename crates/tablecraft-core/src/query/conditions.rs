use crate::{schema::ModelSchema, value::Value};

/// Parameter list for fragments that bind nothing.
pub const NO_PARAMS: [Value; 0] = [];

/// Fragment used for `IN` over an empty collection; matches nothing.
pub const ALWAYS_FALSE: &str = "1 = 0";

/// Fragment used for `NOT IN` over an empty collection; matches everything.
pub const ALWAYS_TRUE: &str = "1 = 1";

///
/// Conditions
///
/// Ordered predicate fragments plus their bound parameters. Rendering joins
/// parenthesized fragments with `AND`; parameters bind in append order.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conditions {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl Conditions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clauses: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Append one fragment with its parameters.
    pub fn push(&mut self, clause: impl Into<String>, params: impl IntoIterator<Item = Value>) {
        self.clauses.push(clause.into());
        self.params.extend(params);
    }

    /// Append `column IN (?, ...)` or `column NOT IN (?, ...)`, one placeholder
    /// per value. An empty collection renders a constant fragment instead:
    /// always-false for `IN`, always-true for `NOT IN`.
    pub fn push_in(
        &mut self,
        negate: bool,
        quoted_column: &str,
        values: impl IntoIterator<Item = Value>,
    ) {
        let values: Vec<Value> = values.into_iter().collect();

        if values.is_empty() {
            let constant = if negate { ALWAYS_TRUE } else { ALWAYS_FALSE };
            self.clauses.push(constant.to_string());
            return;
        }

        let placeholders = vec!["?"; values.len()].join(", ");
        let op = if negate { "NOT IN" } else { "IN" };
        self.clauses
            .push(format!("{quoted_column} {op} ({placeholders})"));
        self.params.extend(values);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// The rendered conjunction, or `None` when nothing was added.
    #[must_use]
    pub fn where_clause(&self) -> Option<String> {
        if self.clauses.is_empty() {
            return None;
        }

        let parts: Vec<String> = self.clauses.iter().map(|c| format!("({c})")).collect();

        Some(parts.join(" AND "))
    }

    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

///
/// Conditional
///
/// Capability shared by every builder that narrows rows. Generated
/// per-table condition traits are blanket-implemented over it.
///

pub trait Conditional: Sized {
    type Schema: ModelSchema;

    fn conditions(&self) -> &Conditions;

    fn conditions_mut(&mut self) -> &mut Conditions;

    /// AND one fragment onto the accumulated predicate.
    #[must_use]
    fn where_(mut self, clause: &str, params: impl IntoIterator<Item = Value>) -> Self {
        self.conditions_mut().push(clause, params);
        self
    }

    /// AND an `IN` / `NOT IN` fragment onto the accumulated predicate.
    #[must_use]
    fn where_in(
        mut self,
        negate: bool,
        quoted_column: &str,
        values: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.conditions_mut().push_in(negate, quoted_column, values);
        self
    }
}
