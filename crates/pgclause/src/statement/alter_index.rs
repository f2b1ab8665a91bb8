//! `ALTER INDEX`

use super::{SqlParts, Statement, exactly_one, forbidden, required};
use crate::clause::{
    Clause, DependsOnExtension, Fragment, IfExists, ListFragment, Name, RenameTo,
    ResetStorageParameters, SetStorageParameters, SetTablespace,
};
use crate::config::BuilderConfig;
use crate::error::ClauseResult;
use crate::placeholder::Registry;

/// `ALTER INDEX [IF EXISTS] name` followed by exactly one of `RENAME TO`,
/// `SET TABLESPACE`, `DEPENDS ON EXTENSION`, `SET (...)` or `RESET (...)`.
#[derive(Debug, Default)]
pub struct AlterIndex {
    registry: Registry,
    if_exists: Fragment<IfExists>,
    name: Fragment<Name>,
    rename_to: Fragment<RenameTo>,
    tablespace: Fragment<SetTablespace>,
    depends_on_extension: Fragment<DependsOnExtension>,
    storage_parameters: ListFragment<SetStorageParameters>,
    reset_parameters: ListFragment<ResetStorageParameters>,
}

impl AlterIndex {
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
        single name / set_name: Name;
        single rename_to / set_rename_to: RenameTo;
        single tablespace / set_tablespace: SetTablespace;
        single depends_on_extension / set_depends_on_extension: DependsOnExtension;
        /// Appends one `parameter = value` pair to `SET (...)`.
        list storage_parameters / set_storage_parameter: SetStorageParameters;
        /// Appends one parameter to `RESET (...)`.
        list reset_parameters / set_reset_parameter: ResetStorageParameters;
    }
}

impl Statement for AlterIndex {
    const COMMAND: &'static str = "ALTER INDEX";

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn build_sql(&self) -> ClauseResult<String> {
        let reg = &self.registry;
        let cmd = Self::COMMAND;
        let name = required(cmd, "an index name", self.name.build(reg)?)?;
        let if_exists = self.if_exists.build(reg)?;

        forbidden(
            cmd,
            "IF EXISTS",
            "with DEPENDS ON EXTENSION",
            if_exists.is_some() && self.depends_on_extension.is_set(),
        )?;

        let form = exactly_one(
            cmd,
            vec![
                ("RENAME TO", self.rename_to.build(reg)?),
                ("SET TABLESPACE", self.tablespace.build(reg)?),
                ("DEPENDS ON EXTENSION", self.depends_on_extension.build(reg)?),
                ("SET (...)", self.storage_parameters.build(reg)?),
                ("RESET (...)", self.reset_parameters.build(reg)?),
            ],
        )?;

        Ok(SqlParts::new(cmd)
            .push_opt(if_exists)
            .push(name)
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
