//! `ALTER TABLE` actions, several of which may be combined in one statement.

use super::column::{
    AddColumn, AddColumnArgs, AlterColumn, AlterColumnArgs, DropColumn, DropColumnArgs,
};
use super::storage::{
    StorageParameterArg, StorageSetting, ensure_distinct, render_reset, render_settings,
};
use super::{Clause, ListClause};
use crate::code::{CodeArg, StorageParameter};
use crate::error::{ClauseError, ClauseResult};
use crate::keyword;
use crate::placeholder::{Placeholder, Registry};

/// Setter input for one table action.
#[derive(Debug, Clone, PartialEq)]
pub enum TableActionArgs {
    AddColumn(AddColumnArgs),
    AlterColumn(AlterColumnArgs),
    DropColumn(DropColumnArgs),
    SetStorage(Vec<StorageParameterArg>),
    ResetStorage(Vec<CodeArg<StorageParameter>>),
}

impl From<AddColumnArgs> for TableActionArgs {
    fn from(v: AddColumnArgs) -> Self {
        TableActionArgs::AddColumn(v)
    }
}

impl From<AlterColumnArgs> for TableActionArgs {
    fn from(v: AlterColumnArgs) -> Self {
        TableActionArgs::AlterColumn(v)
    }
}

impl From<DropColumnArgs> for TableActionArgs {
    fn from(v: DropColumnArgs) -> Self {
        TableActionArgs::DropColumn(v)
    }
}

/// One bound table action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    AddColumn(AddColumn),
    AlterColumn(AlterColumn),
    DropColumn(DropColumn),
    SetStorage(Vec<StorageSetting>),
    ResetStorage(Vec<StorageParameter>),
}

impl Clause for TableAction {
    type Args = TableActionArgs;
    const NAME: &'static str = "table_action";

    fn bind(args: TableActionArgs, registry: &mut Registry) -> ClauseResult<Self> {
        match args {
            TableActionArgs::AddColumn(a) => AddColumn::bind(a, registry).map(Self::AddColumn),
            TableActionArgs::AlterColumn(a) => AlterColumn::bind(a, registry).map(Self::AlterColumn),
            TableActionArgs::DropColumn(a) => DropColumn::bind(a, registry).map(Self::DropColumn),
            TableActionArgs::SetStorage(params) => {
                if params.is_empty() {
                    return Err(ClauseError::invalid_argument(
                        Self::NAME,
                        "parameters",
                        "SET needs at least one storage parameter",
                    ));
                }
                StorageSetting::bind_all(Self::NAME, params, registry).map(Self::SetStorage)
            }
            TableActionArgs::ResetStorage(params) => {
                if params.is_empty() {
                    return Err(ClauseError::invalid_argument(
                        Self::NAME,
                        "parameters",
                        "RESET needs at least one storage parameter",
                    ));
                }
                let parameters = params
                    .into_iter()
                    .map(|p| p.resolve(Self::NAME, "parameter"))
                    .collect::<ClauseResult<Vec<_>>>()?;
                ensure_distinct(Self::NAME, &parameters)?;
                Ok(Self::ResetStorage(parameters))
            }
        }
    }

    fn render(&self) -> Option<String> {
        match self {
            Self::AddColumn(c) => c.render(),
            Self::AlterColumn(c) => c.render(),
            Self::DropColumn(c) => c.render(),
            Self::SetStorage(settings) => {
                let settings: Vec<&StorageSetting> = settings.iter().collect();
                Some(render_settings(keyword::SET, &settings))
            }
            Self::ResetStorage(parameters) => Some(render_reset(parameters)),
        }
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        match self {
            Self::AddColumn(c) => c.placeholders(),
            Self::AlterColumn(c) => c.placeholders(),
            Self::DropColumn(c) => c.placeholders(),
            Self::SetStorage(settings) => settings.iter().map(|s| &s.value).collect(),
            Self::ResetStorage(_) => Vec::new(),
        }
    }
}

impl ListClause for TableAction {
    fn render_list(items: &[Self]) -> Option<String> {
        let actions: Vec<String> = items.iter().filter_map(Clause::render).collect();
        if actions.is_empty() {
            return None;
        }
        Some(actions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::ListFragment;
    use crate::code::AlterColumnKind;

    #[test]
    fn test_actions_join_with_commas() {
        let mut registry = Registry::new();
        let mut actions = ListFragment::<TableAction>::new();
        actions
            .set(Some(AddColumnArgs::new("age", "integer").into()), &mut registry)
            .unwrap();
        actions
            .set(
                Some(AlterColumnArgs::new("name", AlterColumnKind::SetNotNull).into()),
                &mut registry,
            )
            .unwrap();
        actions
            .set(
                Some(TableActionArgs::ResetStorage(vec![StorageParameter::FillFactor.into()])),
                &mut registry,
            )
            .unwrap();
        assert_eq!(
            actions.render().as_deref(),
            Some("ADD COLUMN $1 $2, ALTER COLUMN $3 SET NOT NULL, RESET (fillfactor)")
        );
    }

    #[test]
    fn test_set_storage_action_is_atomic() {
        let mut registry = Registry::new();
        let err = TableAction::bind(
            TableActionArgs::SetStorage(vec![
                StorageParameterArg::new(StorageParameter::FillFactor, 50),
                StorageParameterArg::new(99i32, 1),
            ]),
            &mut registry,
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("parameter"));
        assert!(registry.is_empty());

        let err = TableAction::bind(TableActionArgs::SetStorage(Vec::new()), &mut registry)
            .unwrap_err();
        assert_eq!(err.argument(), Some("parameters"));
    }

    #[test]
    fn test_storage_action_rejects_repeated_parameter() {
        let mut registry = Registry::new();
        let err = TableAction::bind(
            TableActionArgs::SetStorage(vec![
                StorageParameterArg::new(StorageParameter::FillFactor, 50),
                StorageParameterArg::new(StorageParameter::FillFactor, 60),
            ]),
            &mut registry,
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("parameter"));
        assert!(registry.is_empty());

        let err = TableAction::bind(
            TableActionArgs::ResetStorage(vec![
                StorageParameter::AutovacuumEnabled.into(),
                6i32.into(),
            ]),
            &mut registry,
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), Some("parameter"));
    }
}
