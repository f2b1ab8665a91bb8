//! `ALTER PUBLICATION`

use super::{SqlParts, Statement, exactly_one, required};
use crate::clause::{
    AddTable, Clause, DropTable, Fragment, ListFragment, Name, OwnerTo, RenameTo, SetTable,
};
use crate::config::BuilderConfig;
use crate::error::ClauseResult;
use crate::placeholder::Registry;

/// `ALTER PUBLICATION name` followed by exactly one of `ADD TABLE`,
/// `SET TABLE`, `DROP TABLE`, `RENAME TO` or `OWNER TO`.
#[derive(Debug, Default)]
pub struct AlterPublication {
    registry: Registry,
    name: Fragment<Name>,
    add_tables: ListFragment<AddTable>,
    set_tables: ListFragment<SetTable>,
    drop_tables: ListFragment<DropTable>,
    rename_to: Fragment<RenameTo>,
    owner_to: Fragment<OwnerTo>,
}

impl AlterPublication {
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
        /// Appends one table to `ADD TABLE`.
        list add_tables / set_add_table: AddTable;
        /// Appends one table to `SET TABLE`.
        list set_tables / set_set_table: SetTable;
        /// Appends one table to `DROP TABLE`.
        list drop_tables / set_drop_table: DropTable;
        single rename_to / set_rename_to: RenameTo;
        single owner_to / set_owner_to: OwnerTo;
    }
}

impl Statement for AlterPublication {
    const COMMAND: &'static str = "ALTER PUBLICATION";

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn build_sql(&self) -> ClauseResult<String> {
        let reg = &self.registry;
        let cmd = Self::COMMAND;
        let name = required(cmd, "a publication name", self.name.build(reg)?)?;

        let form = exactly_one(
            cmd,
            vec![
                ("ADD TABLE", self.add_tables.build(reg)?),
                ("SET TABLE", self.set_tables.build(reg)?),
                ("DROP TABLE", self.drop_tables.build(reg)?),
                ("RENAME TO", self.rename_to.build(reg)?),
                ("OWNER TO", self.owner_to.build(reg)?),
            ],
        )?;

        Ok(SqlParts::new(cmd).push(name).push(form).finish())
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
