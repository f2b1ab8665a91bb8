//! `ALTER TABLE`

use super::{SqlParts, Statement, exactly_one, forbidden, required};
use crate::clause::{
    AllInTablespace, Clause, Fragment, IfExists, ListFragment, Name, NoWait, Only, OwnedBy,
    RenameColumn, RenameTo, SetSchema, SetTablespace, TableAction, Wildcard,
};
use crate::config::BuilderConfig;
use crate::error::ClauseResult;
use crate::keyword;
use crate::placeholder::Registry;

/// `ALTER TABLE` builder.
///
/// Two shapes are supported:
///
/// - `ALTER TABLE [IF EXISTS] [ONLY] name [*] form`, where form is exactly
///   one of the action list, `RENAME COLUMN`, `RENAME TO`, `SET SCHEMA` or
///   `SET TABLESPACE`.
/// - `ALTER TABLE ALL IN TABLESPACE name [OWNED BY role, ...] SET TABLESPACE
///   new [NOWAIT]`, selected with [`AlterTable::set_all_in_tablespace`].
#[derive(Debug, Default)]
pub struct AlterTable {
    registry: Registry,
    if_exists: Fragment<IfExists>,
    only: Fragment<Only>,
    name: Fragment<Name>,
    wildcard: Fragment<Wildcard>,
    all_in_tablespace: Fragment<AllInTablespace>,
    owned_by: ListFragment<OwnedBy>,
    actions: ListFragment<TableAction>,
    rename_column: Fragment<RenameColumn>,
    rename_to: Fragment<RenameTo>,
    schema: Fragment<SetSchema>,
    tablespace: Fragment<SetTablespace>,
    no_wait: Fragment<NoWait>,
}

impl AlterTable {
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
        single if_exists / set_if_exists: IfExists;
        single only / set_only: Only;
        /// The table, or the source tablespace in the `ALL IN TABLESPACE` form.
        single name / set_name: Name;
        single wildcard / set_wildcard: Wildcard;
        single all_in_tablespace / set_all_in_tablespace: AllInTablespace;
        /// Appends one role to `OWNED BY`.
        list owned_by / set_owned_by: OwnedBy;
        /// Appends one action to the comma-separated action list.
        list actions / set_action: TableAction;
        single rename_column / set_rename_column: RenameColumn;
        single rename_to / set_rename_to: RenameTo;
        single schema / set_schema: SetSchema;
        /// The new tablespace; required in the `ALL IN TABLESPACE` form.
        single tablespace / set_tablespace: SetTablespace;
        single no_wait / set_no_wait: NoWait;
    }

    fn build_all_in_tablespace(&self, name: String) -> ClauseResult<String> {
        const FORM: &str = "in the ALL IN TABLESPACE form";
        let reg = &self.registry;
        let cmd = Self::COMMAND;

        forbidden(cmd, "IF EXISTS", FORM, self.if_exists.build(reg)?.is_some())?;
        forbidden(cmd, "ONLY", FORM, self.only.build(reg)?.is_some())?;
        forbidden(cmd, "*", FORM, self.wildcard.build(reg)?.is_some())?;
        forbidden(cmd, "table actions", FORM, self.actions.is_set())?;
        forbidden(cmd, "RENAME COLUMN", FORM, self.rename_column.is_set())?;
        forbidden(cmd, "RENAME TO", FORM, self.rename_to.is_set())?;
        forbidden(cmd, "SET SCHEMA", FORM, self.schema.is_set())?;
        let tablespace = required(cmd, "SET TABLESPACE", self.tablespace.build(reg)?)?;

        Ok(SqlParts::new(cmd)
            .push(keyword::ALL_IN_TABLESPACE)
            .push(name)
            .push_opt(self.owned_by.build(reg)?)
            .push(tablespace)
            .push_opt(self.no_wait.build(reg)?)
            .finish())
    }
}

impl Statement for AlterTable {
    const COMMAND: &'static str = "ALTER TABLE";

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn build_sql(&self) -> ClauseResult<String> {
        let reg = &self.registry;
        let cmd = Self::COMMAND;
        let name = required(cmd, "a table name", self.name.build(reg)?)?;

        if self.all_in_tablespace.build(reg)?.is_some() {
            return self.build_all_in_tablespace(name);
        }

        const FORM: &str = "outside the ALL IN TABLESPACE form";
        forbidden(cmd, "OWNED BY", FORM, self.owned_by.is_set())?;
        forbidden(cmd, "NOWAIT", FORM, self.no_wait.build(reg)?.is_some())?;

        let only = self.only.build(reg)?;
        let wildcard = self.wildcard.build(reg)?;
        forbidden(cmd, "ONLY", "together with *", only.is_some() && wildcard.is_some())?;

        let form = exactly_one(
            cmd,
            vec![
                ("table actions", self.actions.build(reg)?),
                ("RENAME COLUMN", self.rename_column.build(reg)?),
                ("RENAME TO", self.rename_to.build(reg)?),
                ("SET SCHEMA", self.schema.build(reg)?),
                ("SET TABLESPACE", self.tablespace.build(reg)?),
            ],
        )?;

        Ok(SqlParts::new(cmd)
            .push_opt(self.if_exists.build(reg)?)
            .push_opt(only)
            .push(name)
            .push_opt(wildcard)
            .push(form)
            .finish())
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
