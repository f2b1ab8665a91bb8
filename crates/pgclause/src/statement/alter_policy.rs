//! `ALTER POLICY`

use super::{SqlParts, Statement, exactly_one, required};
use crate::clause::{
    Clause, Fragment, ListFragment, Name, OnTable, RenameTo, ToRole, UsingExpression,
    WithCheckExpression,
};
use crate::config::BuilderConfig;
use crate::error::ClauseResult;
use crate::placeholder::Registry;

/// `ALTER POLICY name ON table` followed by either `RENAME TO new` or any
/// combination of `TO roles`, `USING (...)` and `WITH CHECK (...)`.
#[derive(Debug, Default)]
pub struct AlterPolicy {
    registry: Registry,
    name: Fragment<Name>,
    on_table: Fragment<OnTable>,
    rename_to: Fragment<RenameTo>,
    to_roles: ListFragment<ToRole>,
    using: Fragment<UsingExpression>,
    with_check: Fragment<WithCheckExpression>,
}

impl AlterPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            registry: Registry::with_config(config),
            ..Self::default()
        }
    }

    accessors! {
        single name / set_name: Name;
        single on_table / set_on_table: OnTable;
        single rename_to / set_rename_to: RenameTo;
        /// Appends one role to `TO`.
        list to_roles / set_to_role: ToRole;
        single using / set_using: UsingExpression;
        single with_check / set_with_check: WithCheckExpression;
    }

    fn build_changes(&self) -> ClauseResult<Option<String>> {
        let reg = &self.registry;
        let changes: Vec<String> = [
            self.to_roles.build(reg)?,
            self.using.build(reg)?,
            self.with_check.build(reg)?,
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok((!changes.is_empty()).then(|| changes.join(" ")))
    }
}

impl Statement for AlterPolicy {
    const COMMAND: &'static str = "ALTER POLICY";

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn build_sql(&self) -> ClauseResult<String> {
        let reg = &self.registry;
        let cmd = Self::COMMAND;
        let name = required(cmd, "a policy name", self.name.build(reg)?)?;
        let table = required(cmd, "ON table", self.on_table.build(reg)?)?;

        let form = exactly_one(
            cmd,
            vec![
                ("RENAME TO", self.rename_to.build(reg)?),
                ("TO / USING / WITH CHECK", self.build_changes()?),
            ],
        )?;

        Ok(SqlParts::new(cmd).push(name).push(table).push(form).finish())
    }

    fn reset(&mut self) {
        let mut registry = std::mem::take(&mut self.registry);
        registry.reset();
        *self = Self {
            registry,
            ..Self::default()
        };
    }
}
