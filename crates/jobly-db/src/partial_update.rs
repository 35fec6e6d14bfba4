//! `SET` clause generation for partial-record updates.
//!
//! Turns an ordered list of field/value pairs into a `"column"=$N, ...`
//! fragment plus the values to bind, position for position. Column names are
//! quoted but otherwise emitted verbatim: they must come from program code
//! (a [`ColumnMap`] or known field names), never from a request body's keys
//! unless those keys have been checked against an allow-list first.

use std::collections::HashMap;

use anyhow::anyhow;
use serde_json::{Map, Value};
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

use jobly_core::AppError;

/// Ordered field/value pairs to write.
///
/// Order is fixed at construction and is the order placeholders are numbered
/// in. Building from a JSON object keeps the object's key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialUpdate {
    pairs: Vec<(String, Value)>,
}

impl PartialUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(field, value);
        self
    }

    pub fn push(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.pairs.push((field.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for PartialUpdate
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}

impl From<Vec<(String, Value)>> for PartialUpdate {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        Self { pairs }
    }
}

impl From<Map<String, Value>> for PartialUpdate {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<Value> for PartialUpdate {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            _ => Err(AppError::bad_request(anyhow!(
                "Update payload must be a JSON object"
            ))),
        }
    }
}

/// Field name to column name translation. Fields without an entry are used
/// as the column name unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: HashMap<String, String>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.columns.insert(field.into(), column.into());
        self
    }

    /// An empty mapping counts as no mapping.
    pub fn resolve<'a>(&'a self, field: &'a str) -> &'a str {
        self.columns
            .get(field)
            .map(String::as_str)
            .filter(|column| !column.is_empty())
            .unwrap_or(field)
    }
}

impl<K, V> FromIterator<(K, V)> for ColumnMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(field, column)| (field.into(), column.into()))
                .collect(),
        }
    }
}

/// A generated `SET` clause and the values for its placeholders.
///
/// `values[i]` binds to `$i+1` in `set_cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub set_cols: String,
    pub values: Vec<Value>,
}

impl Clause {
    /// Placeholder index for the first parameter after the `SET` values,
    /// typically the `WHERE` key.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// Binds every value onto `query` in placeholder order.
    pub fn bind<'q>(
        &'q self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        self.values.iter().fold(query, bind_value)
    }
}

fn bind_value<'q>(
    q: Query<'q, Postgres, PgArguments>,
    v: &'q Value,
) -> Query<'q, Postgres, PgArguments> {
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        // JSONB
        Value::Array(_) | Value::Object(_) => q.bind(v.clone()),
    }
}

/// Builds the `SET` clause for a partial update.
///
/// ```text
/// {firstName: "Aliya", age: 32} + {firstName: "first_name"}
///   => "\"first_name\"=$1, \"age\"=$2", ["Aliya", 32]
/// ```
///
/// # Errors
///
/// Returns a 400 `No data` error when `data` has no pairs.
pub fn sql_for_partial_update(
    data: &PartialUpdate,
    columns: &ColumnMap,
) -> Result<Clause, AppError> {
    if data.is_empty() {
        return Err(AppError::bad_request(anyhow!("No data")));
    }

    let cols: Vec<String> = data
        .iter()
        .enumerate()
        .map(|(idx, (field, _))| format!("\"{}\"=${}", columns.resolve(field), idx + 1))
        .collect();

    Ok(Clause {
        set_cols: cols.join(", "),
        values: data.iter().map(|(_, value)| value.clone()).collect(),
    })
}
