//! The result of building a statement.

use crate::error::{ClauseError, ClauseResult};
use crate::placeholder::{Registry, Value, scan_tokens};
use std::ops::Range;
use tokio_postgres::types::ToSql;

/// SQL text plus the values for its placeholders, in position order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    sql: String,
    params: Vec<Value>,
    prefix: String,
    first_id: u32,
}

impl BuiltQuery {
    /// Create a query using `$1, $2, ...` placeholders.
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
            prefix: "$".to_string(),
            first_id: 1,
        }
    }

    /// Start a hand-written query; add its values with [`BuiltQuery::bind`].
    ///
    /// ```ignore
    /// let sub = BuiltQuery::raw("SELECT id FROM teams WHERE name = $1").bind("ops");
    /// ```
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::new(sql, Vec::new())
    }

    /// Append the value for the next placeholder position.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub(crate) fn from_registry(sql: String, params: Vec<Value>, registry: &Registry) -> Self {
        Self {
            sql,
            params,
            prefix: registry.prefix().to_string(),
            first_id: registry.first_id(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Placeholder prefix used in the SQL text.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Id of the first parameter position.
    pub fn first_id(&self) -> u32 {
        self.first_id
    }

    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }

    /// Check that every placeholder refers to a bound value and every value is referenced.
    pub fn validate(&self) -> ClauseResult<()> {
        let tokens = self.tokens()?;
        let mut used = vec![false; self.params.len()];
        for (_, index) in tokens {
            used[index] = true;
        }
        match used.iter().position(|u| !u) {
            Some(index) => Err(ClauseError::allocation(format!(
                "parameter {}{} is never referenced",
                self.prefix,
                self.first_id as usize + index
            ))),
            None => Ok(()),
        }
    }

    /// Placeholder tokens in the SQL, each with the index of the value it refers to.
    pub(crate) fn tokens(&self) -> ClauseResult<Vec<(Range<usize>, usize)>> {
        scan_tokens(&self.sql, &self.prefix)
            .into_iter()
            .map(|(range, id)| {
                id.checked_sub(self.first_id)
                    .map(|i| i as usize)
                    .filter(|i| *i < self.params.len())
                    .map(|i| (range, i))
                    .ok_or_else(|| {
                        ClauseError::allocation(format!(
                            "query references {}{id} but binds {} values",
                            self.prefix,
                            self.params.len()
                        ))
                    })
            })
            .collect()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}
