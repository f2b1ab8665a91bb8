//! `BEGIN`

use super::{SqlParts, Statement};
use crate::clause::{Clause, Fragment, ListFragment, TransactionActionClause, TransactionModes};
use crate::config::BuilderConfig;
use crate::error::ClauseResult;
use crate::keyword;
use crate::placeholder::Registry;

/// `BEGIN [TRANSACTION | WORK] [mode, ...]`. Every clause is optional.
#[derive(Debug, Default)]
pub struct Begin {
    registry: Registry,
    action: Fragment<TransactionActionClause>,
    modes: ListFragment<TransactionModes>,
}

impl Begin {
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
        single action / set_action: TransactionActionClause;
        /// Appends one transaction mode.
        list modes / set_mode: TransactionModes;
    }
}

impl Statement for Begin {
    const COMMAND: &'static str = keyword::BEGIN;

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn build_sql(&self) -> ClauseResult<String> {
        let reg = &self.registry;
        Ok(SqlParts::new(Self::COMMAND)
            .push_opt(self.action.build(reg)?)
            .push_opt(self.modes.build(reg)?)
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
