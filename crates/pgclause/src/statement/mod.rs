//! Statement assemblers.
//!
//! Each assembler owns one [`Registry`] and one fragment per clause it
//! supports. Setters take `Option<args>`: `Some` configures the clause, `None`
//! clears it. [`Statement::build`] renders the clauses in grammar order and
//! pulls the parameter list from the registry.
//!
//! # Usage
//!
//! ```ignore
//! use pgclause::statement::{AlterTable, Statement};
//! use pgclause::clause::AddColumnArgs;
//!
//! let mut alter = AlterTable::new();
//! alter.set_name(Some("users".into()))?;
//! alter.set_action(Some(AddColumnArgs::new("age", "integer").into()))?;
//!
//! let query = alter.build()?;
//! assert_eq!(query.sql(), "ALTER TABLE $1 ADD COLUMN $2 $3");
//! client.execute(query.sql(), &query.params_ref()).await?;
//! ```

/// Generate `set_<clause>` / `<clause>` pairs over fragment fields.
macro_rules! accessors {
    (@get single $field:ident, $clause:ty) => {
        pub fn $field(&self) -> ClauseResult<Option<&$clause>> {
            self.$field.get(&self.registry)
        }
    };
    (@get list $field:ident, $clause:ty) => {
        pub fn $field(&self) -> ClauseResult<Option<&[$clause]>> {
            self.$field.get(&self.registry)
        }
    };
    ($($(#[$meta:meta])* $kind:ident $field:ident / $setter:ident: $clause:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $setter(
                &mut self,
                args: Option<<$clause as Clause>::Args>,
            ) -> ClauseResult<()> {
                self.$field.set(args, &mut self.registry)
            }

            accessors!(@get $kind $field, $clause);
        )*
    };
}

mod alter_index;
mod alter_policy;
mod alter_publication;
mod alter_sequence;
mod alter_table;
mod begin;
mod query;


pub use alter_index::AlterIndex;
pub use alter_policy::AlterPolicy;
pub use alter_publication::AlterPublication;
pub use alter_sequence::AlterSequence;
pub use alter_table::AlterTable;
pub use begin::Begin;
pub use query::BuiltQuery;

use crate::error::{ClauseError, ClauseResult};
use crate::placeholder::Registry;

/// A complete SQL statement assembled from clause fragments.
pub trait Statement {
    /// Leading command keywords, e.g. `ALTER TABLE`.
    const COMMAND: &'static str;

    /// The registry holding every value bound by this statement.
    fn registry(&self) -> &Registry;

    /// Render the SQL text, checking that the configured clauses form a valid statement.
    fn build_sql(&self) -> ClauseResult<String>;

    /// Clear every clause and release all placeholders.
    fn reset(&mut self);

    /// Render the SQL and collect its parameters.
    fn build(&self) -> ClauseResult<BuiltQuery> {
        let sql = self.build_sql()?;
        let params = self.registry().bound_values()?;
        tracing::debug!(
            target: "pgclause.sql",
            statement = Self::COMMAND,
            param_count = params.len(),
            sql = %sql,
            "built"
        );
        Ok(BuiltQuery::from_registry(sql, params, self.registry()))
    }
}

/// Space-separated SQL under construction; absent fragments are skipped.
#[derive(Debug, Default)]
pub(crate) struct SqlParts {
    parts: Vec<String>,
}

impl SqlParts {
    pub(crate) fn new(command: &str) -> Self {
        Self {
            parts: vec![command.to_string()],
        }
    }

    pub(crate) fn push(&mut self, part: impl Into<String>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    pub(crate) fn push_opt(&mut self, part: Option<String>) -> &mut Self {
        if let Some(part) = part {
            self.parts.push(part);
        }
        self
    }

    pub(crate) fn finish(&self) -> String {
        self.parts.join(" ")
    }
}

/// A required clause, or `Incomplete` naming it.
pub(crate) fn required(command: &str, clause: &str, part: Option<String>) -> ClauseResult<String> {
    part.ok_or_else(|| ClauseError::incomplete(format!("{command} requires {clause}")))
}

/// Exactly one of several mutually exclusive forms must be configured.
pub(crate) fn exactly_one(
    command: &str,
    forms: Vec<(&'static str, Option<String>)>,
) -> ClauseResult<String> {
    let names: Vec<&str> = forms.iter().map(|(name, _)| *name).collect();
    let mut present: Vec<(&'static str, String)> = forms
        .into_iter()
        .filter_map(|(name, part)| part.map(|p| (name, p)))
        .collect();

    match present.len() {
        1 => Ok(present.remove(0).1),
        0 => Err(ClauseError::incomplete(format!(
            "{command} requires one of: {}",
            names.join(", ")
        ))),
        _ => {
            let set: Vec<&str> = present.iter().map(|(name, _)| *name).collect();
            Err(ClauseError::incomplete(format!(
                "{command} accepts only one of: {}",
                set.join(", ")
            )))
        }
    }
}

/// Reject a clause that has no meaning in the chosen form.
pub(crate) fn forbidden(command: &str, clause: &str, context: &str, present: bool) -> ClauseResult<()> {
    if present {
        return Err(ClauseError::incomplete(format!(
            "{command} does not accept {clause} {context}"
        )));
    }
    Ok(())
}
