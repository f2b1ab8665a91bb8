//! `ALTER SEQUENCE`

use super::{SqlParts, Statement, exactly_one, required};
use crate::clause::{
    AsDataType, Cache, Clause, Cycle, Fragment, IfExists, IncrementBy, MaxValue, MinValue, Name,
    OwnerTo, RenameTo, RestartWith, SetSchema, StartWith,
};
use crate::config::BuilderConfig;
use crate::error::ClauseResult;
use crate::placeholder::Registry;

/// `ALTER SEQUENCE [IF EXISTS] name` followed by exactly one of `OWNER TO`,
/// `RENAME TO`, `SET SCHEMA`, or a list of sequence options.
///
/// Options render in the order `AS`, `INCREMENT BY`, `MINVALUE`, `MAXVALUE`,
/// `START WITH`, `RESTART`, `CACHE`, `CYCLE`, whatever order they were set in.
#[derive(Debug, Default)]
pub struct AlterSequence {
    registry: Registry,
    if_exists: Fragment<IfExists>,
    name: Fragment<Name>,
    owner_to: Fragment<OwnerTo>,
    rename_to: Fragment<RenameTo>,
    schema: Fragment<SetSchema>,
    data_type: Fragment<AsDataType>,
    increment_by: Fragment<IncrementBy>,
    min_value: Fragment<MinValue>,
    max_value: Fragment<MaxValue>,
    start_with: Fragment<StartWith>,
    restart: Fragment<RestartWith>,
    cache: Fragment<Cache>,
    cycle: Fragment<Cycle>,
}

impl AlterSequence {
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
        single owner_to / set_owner_to: OwnerTo;
        single rename_to / set_rename_to: RenameTo;
        single schema / set_schema: SetSchema;
        single data_type / set_data_type: AsDataType;
        single increment_by / set_increment_by: IncrementBy;
        /// `Some(None)` renders `NO MINVALUE`.
        single min_value / set_min_value: MinValue;
        /// `Some(None)` renders `NO MAXVALUE`.
        single max_value / set_max_value: MaxValue;
        single start_with / set_start_with: StartWith;
        /// `Some(None)` renders a bare `RESTART`.
        single restart / set_restart: RestartWith;
        single cache / set_cache: Cache;
        single cycle / set_cycle: Cycle;
    }

    fn build_options(&self) -> ClauseResult<Option<String>> {
        let reg = &self.registry;
        let options: Vec<String> = [
            self.data_type.build(reg)?,
            self.increment_by.build(reg)?,
            self.min_value.build(reg)?,
            self.max_value.build(reg)?,
            self.start_with.build(reg)?,
            self.restart.build(reg)?,
            self.cache.build(reg)?,
            self.cycle.build(reg)?,
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok((!options.is_empty()).then(|| options.join(" ")))
    }
}

impl Statement for AlterSequence {
    const COMMAND: &'static str = "ALTER SEQUENCE";

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn build_sql(&self) -> ClauseResult<String> {
        let reg = &self.registry;
        let cmd = Self::COMMAND;
        let name = required(cmd, "a sequence name", self.name.build(reg)?)?;

        let form = exactly_one(
            cmd,
            vec![
                ("OWNER TO", self.owner_to.build(reg)?),
                ("RENAME TO", self.rename_to.build(reg)?),
                ("SET SCHEMA", self.schema.build(reg)?),
                ("sequence options", self.build_options()?),
            ],
        )?;

        Ok(SqlParts::new(cmd)
            .push_opt(self.if_exists.build(reg)?)
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
