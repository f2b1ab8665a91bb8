//! Column actions for `ALTER TABLE`.

use super::{Clause, checked_text};
use crate::code::{AlterColumnKind, Cascade, Code, CodeArg, StorageMode};
use crate::error::{ClauseError, ClauseResult};
use crate::keyword;
use crate::placeholder::{Placeholder, Registry};

// ==================== ADD COLUMN ====================

/// Arguments for `ADD COLUMN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddColumnArgs {
    pub column: String,
    pub data_type: String,
    pub collation: Option<String>,
    pub constraints: Vec<String>,
}

impl AddColumnArgs {
    pub fn new(column: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            data_type: data_type.into(),
            collation: None,
            constraints: Vec::new(),
        }
    }

    pub fn with_collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }
}

/// `ADD COLUMN column data_type [COLLATE collation] [constraint ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddColumn {
    pub column: Placeholder,
    pub data_type: Placeholder,
    pub collation: Option<Placeholder>,
    pub constraints: Vec<Placeholder>,
}

impl Clause for AddColumn {
    type Args = AddColumnArgs;
    const NAME: &'static str = "add_column";

    fn bind(args: AddColumnArgs, registry: &mut Registry) -> ClauseResult<Self> {
        let column = checked_text(Self::NAME, "column", args.column)?;
        let data_type = checked_text(Self::NAME, "data_type", args.data_type)?;
        let collation = args
            .collation
            .map(|c| checked_text(Self::NAME, "collation", c))
            .transpose()?;
        let constraints = args
            .constraints
            .into_iter()
            .map(|c| checked_text(Self::NAME, "constraint", c))
            .collect::<ClauseResult<Vec<_>>>()?;

        Ok(Self {
            column: registry.allocate(column)?,
            data_type: registry.allocate(data_type)?,
            collation: collation.map(|c| registry.allocate(c)).transpose()?,
            constraints: constraints
                .into_iter()
                .map(|c| registry.allocate(c))
                .collect::<ClauseResult<Vec<_>>>()?,
        })
    }

    fn render(&self) -> Option<String> {
        let mut sql = format!("{} {} {}", keyword::ADD_COLUMN, self.column, self.data_type);
        if let Some(collation) = &self.collation {
            sql.push_str(&format!(" {} {collation}", keyword::COLLATE));
        }
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(&constraint.to_string());
        }
        Some(sql)
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        let mut all = vec![&self.column, &self.data_type];
        all.extend(self.collation.iter());
        all.extend(self.constraints.iter());
        all
    }
}

// ==================== DROP COLUMN ====================

/// Arguments for `DROP COLUMN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropColumnArgs {
    pub column: String,
    pub if_exists: bool,
    pub cascade: Option<CodeArg<Cascade>>,
}

impl DropColumnArgs {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            if_exists: false,
            cascade: None,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub fn with_cascade(mut self, cascade: impl Into<CodeArg<Cascade>>) -> Self {
        self.cascade = Some(cascade.into());
        self
    }
}

/// `DROP COLUMN [IF EXISTS] column [CASCADE | RESTRICT]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropColumn {
    pub column: Placeholder,
    pub if_exists: bool,
    pub cascade: Option<Cascade>,
}

impl Clause for DropColumn {
    type Args = DropColumnArgs;
    const NAME: &'static str = "drop_column";

    fn bind(args: DropColumnArgs, registry: &mut Registry) -> ClauseResult<Self> {
        let column = checked_text(Self::NAME, "column", args.column)?;
        let cascade = args
            .cascade
            .map(|c| c.resolve(Self::NAME, "cascade"))
            .transpose()?;
        Ok(Self {
            column: registry.allocate(column)?,
            if_exists: args.if_exists,
            cascade,
        })
    }

    fn render(&self) -> Option<String> {
        let mut sql = keyword::DROP_COLUMN.to_string();
        if self.if_exists {
            sql.push(' ');
            sql.push_str(keyword::IF_EXISTS);
        }
        sql.push_str(&format!(" {}", self.column));
        if let Some(cascade) = self.cascade {
            sql.push(' ');
            sql.push_str(cascade.keyword());
        }
        Some(sql)
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        vec![&self.column]
    }
}

// ==================== RENAME COLUMN ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameColumnArgs {
    pub from: String,
    pub to: String,
}

impl RenameColumnArgs {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// `RENAME COLUMN from TO to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameColumn {
    pub from: Placeholder,
    pub to: Placeholder,
}

impl Clause for RenameColumn {
    type Args = RenameColumnArgs;
    const NAME: &'static str = "rename_column";

    fn bind(args: RenameColumnArgs, registry: &mut Registry) -> ClauseResult<Self> {
        let from = checked_text(Self::NAME, "from", args.from)?;
        let to = checked_text(Self::NAME, "to", args.to)?;
        Ok(Self {
            from: registry.allocate(from)?,
            to: registry.allocate(to)?,
        })
    }

    fn render(&self) -> Option<String> {
        Some(format!(
            "{} {} {} {}",
            keyword::RENAME_COLUMN,
            self.from,
            keyword::TO,
            self.to
        ))
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        vec![&self.from, &self.to]
    }
}

// ==================== ALTER COLUMN ====================

/// The value argument of an `ALTER COLUMN` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterColumnValue {
    Text(String),
    Int(i64),
}

impl From<&str> for AlterColumnValue {
    fn from(v: &str) -> Self {
        AlterColumnValue::Text(v.to_string())
    }
}

impl From<String> for AlterColumnValue {
    fn from(v: String) -> Self {
        AlterColumnValue::Text(v)
    }
}

impl From<i64> for AlterColumnValue {
    fn from(v: i64) -> Self {
        AlterColumnValue::Int(v)
    }
}

impl From<i32> for AlterColumnValue {
    fn from(v: i32) -> Self {
        AlterColumnValue::Int(i64::from(v))
    }
}

/// Arguments for `ALTER COLUMN`. Which of `value` and `collation` are
/// required depends on `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterColumnArgs {
    pub column: String,
    pub kind: CodeArg<AlterColumnKind>,
    pub value: Option<AlterColumnValue>,
    pub collation: Option<String>,
}

impl AlterColumnArgs {
    pub fn new(column: impl Into<String>, kind: impl Into<CodeArg<AlterColumnKind>>) -> Self {
        Self {
            column: column.into(),
            kind: kind.into(),
            value: None,
            collation: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<AlterColumnValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn set_data_type(column: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self::new(column, AlterColumnKind::SetDataType)
            .with_value(AlterColumnValue::Text(data_type.into()))
    }

    pub fn set_default(column: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(column, AlterColumnKind::SetDefault)
            .with_value(AlterColumnValue::Text(default.into()))
    }

    pub fn set_statistics(column: impl Into<String>, target: i64) -> Self {
        Self::new(column, AlterColumnKind::SetStatistics).with_value(target)
    }

    pub fn set_storage(column: impl Into<String>, mode: StorageMode) -> Self {
        Self::new(column, AlterColumnKind::SetStorage).with_value(mode.code())
    }
}

/// A validated `ALTER COLUMN` sub-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterColumnAction {
    DropNotNull,
    DropDefault,
    SetNotNull,
    SetDataType {
        data_type: Placeholder,
        collation: Option<Placeholder>,
    },
    SetDefault(Placeholder),
    SetStatistics(i64),
    SetStorage(StorageMode),
}

/// `ALTER COLUMN column action`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterColumn {
    pub column: Placeholder,
    pub action: AlterColumnAction,
}

/// Checked inputs, before any placeholder is allocated.
enum Pending {
    Keyword(AlterColumnAction),
    DataType(String, Option<String>),
    Default(String),
}

impl AlterColumn {
    fn validate(kind: AlterColumnKind, args: &AlterColumnArgs) -> ClauseResult<Pending> {
        const F: &str = AlterColumn::NAME;

        if args.collation.is_some() && kind != AlterColumnKind::SetDataType {
            return Err(ClauseError::invalid_argument(
                F,
                "collation",
                format!("only allowed with SET DATA TYPE, not {kind:?}"),
            ));
        }

        let no_value = |action: AlterColumnAction| match &args.value {
            None => Ok(Pending::Keyword(action)),
            Some(_) => Err(ClauseError::invalid_argument(
                F,
                "value",
                format!("{kind:?} does not take a value"),
            )),
        };
        let text = || match &args.value {
            Some(AlterColumnValue::Text(t)) => checked_text(F, "value", t.clone()),
            Some(AlterColumnValue::Int(_)) => Err(ClauseError::invalid_argument(
                F,
                "value",
                format!("{kind:?} requires a text value"),
            )),
            None => Err(ClauseError::invalid_argument(
                F,
                "value",
                format!("{kind:?} requires a value"),
            )),
        };
        let int = || match &args.value {
            Some(AlterColumnValue::Int(n)) => Ok(*n),
            _ => Err(ClauseError::invalid_argument(
                F,
                "value",
                format!("{kind:?} requires an integer value"),
            )),
        };

        match kind {
            AlterColumnKind::DropNotNull => no_value(AlterColumnAction::DropNotNull),
            AlterColumnKind::DropDefault => no_value(AlterColumnAction::DropDefault),
            AlterColumnKind::SetNotNull => no_value(AlterColumnAction::SetNotNull),
            AlterColumnKind::SetDataType => {
                let collation = args
                    .collation
                    .clone()
                    .map(|c| checked_text(F, "collation", c))
                    .transpose()?;
                Ok(Pending::DataType(text()?, collation))
            }
            AlterColumnKind::SetDefault => Ok(Pending::Default(text()?)),
            AlterColumnKind::SetStatistics => {
                let target = int()?;
                if !(-1..=10000).contains(&target) {
                    return Err(ClauseError::invalid_argument(
                        F,
                        "value",
                        format!("statistics target {target} is outside -1..=10000"),
                    ));
                }
                Ok(Pending::Keyword(AlterColumnAction::SetStatistics(target)))
            }
            AlterColumnKind::SetStorage => {
                let code = int()?;
                let mode = i32::try_from(code)
                    .ok()
                    .and_then(StorageMode::from_code)
                    .ok_or_else(|| {
                        ClauseError::invalid_argument(
                            F,
                            "value",
                            format!("unknown storage mode code {code}"),
                        )
                    })?;
                Ok(Pending::Keyword(AlterColumnAction::SetStorage(mode)))
            }
        }
    }
}

impl Clause for AlterColumn {
    type Args = AlterColumnArgs;
    const NAME: &'static str = "alter_column";

    fn bind(args: AlterColumnArgs, registry: &mut Registry) -> ClauseResult<Self> {
        let kind = args.kind.resolve(Self::NAME, "kind")?;
        let column = checked_text(Self::NAME, "column", args.column.clone())?;
        let pending = Self::validate(kind, &args)?;

        let column = registry.allocate(column)?;
        let action = match pending {
            Pending::Keyword(action) => action,
            Pending::DataType(data_type, collation) => AlterColumnAction::SetDataType {
                data_type: registry.allocate(data_type)?,
                collation: collation.map(|c| registry.allocate(c)).transpose()?,
            },
            Pending::Default(default) => AlterColumnAction::SetDefault(registry.allocate(default)?),
        };
        Ok(Self { column, action })
    }

    fn render(&self) -> Option<String> {
        let action = match &self.action {
            AlterColumnAction::DropNotNull => keyword::DROP_NOT_NULL.to_string(),
            AlterColumnAction::DropDefault => keyword::DROP_DEFAULT.to_string(),
            AlterColumnAction::SetNotNull => keyword::SET_NOT_NULL.to_string(),
            AlterColumnAction::SetDataType {
                data_type,
                collation: Some(collation),
            } => format!("{} {data_type} {} {collation}", keyword::SET_DATA_TYPE, keyword::COLLATE),
            AlterColumnAction::SetDataType {
                data_type,
                collation: None,
            } => format!("{} {data_type}", keyword::SET_DATA_TYPE),
            AlterColumnAction::SetDefault(default) => format!("{} {default}", keyword::SET_DEFAULT),
            AlterColumnAction::SetStatistics(n) => format!("{} {n}", keyword::SET_STATISTICS),
            AlterColumnAction::SetStorage(mode) => {
                format!("{} {}", keyword::SET_STORAGE, mode.keyword())
            }
        };
        Some(format!("{} {} {action}", keyword::ALTER_COLUMN, self.column))
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        let mut all = vec![&self.column];
        match &self.action {
            AlterColumnAction::SetDataType {
                data_type,
                collation,
            } => {
                all.push(data_type);
                all.extend(collation.iter());
            }
            AlterColumnAction::SetDefault(p) => all.push(p),
            _ => {}
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Fragment;
    use crate::placeholder::Value;

    #[test]
    fn test_add_column_with_collation_and_constraints() {
        let mut registry = Registry::new();
        let add = AddColumn::bind(
            AddColumnArgs::new("name", "text")
                .with_collation("C")
                .with_constraint("NOT NULL"),
            &mut registry,
        )
        .unwrap();
        assert_eq!(add.render().as_deref(), Some("ADD COLUMN $1 $2 COLLATE $3 $4"));
        assert_eq!(add.placeholders().len(), 4);
    }

    #[test]
    fn test_add_column_validates_before_allocating() {
        let mut registry = Registry::new();
        let err = AddColumn::bind(
            AddColumnArgs::new("name", "text").with_constraint(""),
            &mut registry,
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("constraint"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_drop_column() {
        let mut registry = Registry::new();
        let drop = DropColumn::bind(
            DropColumnArgs::new("age").if_exists().with_cascade(Cascade::Restrict),
            &mut registry,
        )
        .unwrap();
        assert_eq!(drop.render().as_deref(), Some("DROP COLUMN IF EXISTS $1 RESTRICT"));
    }

    #[test]
    fn test_drop_column_rejects_unknown_cascade_code() {
        let mut registry = Registry::new();
        let err = DropColumn::bind(DropColumnArgs::new("age").with_cascade(7i32), &mut registry)
            .unwrap_err();
        assert_eq!(err.argument(), Some("cascade"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rename_column() {
        let mut registry = Registry::new();
        let rename = RenameColumn::bind(RenameColumnArgs::new("a", "b"), &mut registry).unwrap();
        assert_eq!(rename.render().as_deref(), Some("RENAME COLUMN $1 TO $2"));
    }

    #[test]
    fn test_alter_column_forms() {
        let mut registry = Registry::new();
        let cases = [
            (AlterColumnArgs::new("c", AlterColumnKind::SetNotNull), "ALTER COLUMN $1 SET NOT NULL"),
            (
                AlterColumnArgs::set_data_type("c", "bigint").with_collation("C"),
                "ALTER COLUMN $2 SET DATA TYPE $3 COLLATE $4",
            ),
            (AlterColumnArgs::set_default("c", "0"), "ALTER COLUMN $5 SET DEFAULT $6"),
            (AlterColumnArgs::set_statistics("c", -1), "ALTER COLUMN $7 SET STATISTICS -1"),
            (
                AlterColumnArgs::set_storage("c", StorageMode::External),
                "ALTER COLUMN $8 SET STORAGE EXTERNAL",
            ),
        ];
        for (args, expected) in cases {
            let clause = AlterColumn::bind(args, &mut registry).unwrap();
            assert_eq!(clause.render().as_deref(), Some(expected));
        }
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_alter_column_cross_argument_rules() {
        let mut registry = Registry::new();

        let err = AlterColumn::bind(
            AlterColumnArgs::set_default("c", "1").with_collation("C"),
            &mut registry,
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("collation"));

        let err = AlterColumn::bind(
            AlterColumnArgs::new("c", AlterColumnKind::DropDefault).with_value("x"),
            &mut registry,
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("value"));

        let err = AlterColumn::bind(AlterColumnArgs::set_statistics("c", 10001), &mut registry)
            .unwrap_err();
        assert_eq!(err.argument(), Some("value"));

        let err = AlterColumn::bind(
            AlterColumnArgs::new("c", AlterColumnKind::SetStorage).with_value(9),
            &mut registry,
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("value"));

        let err = AlterColumn::bind(AlterColumnArgs::new("c", 0i32), &mut registry).unwrap_err();
        assert_eq!(err.argument(), Some("kind"));

        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejected_alter_keeps_previous_state() {
        let mut registry = Registry::new();
        let mut alter = Fragment::<AlterColumn>::new();
        alter
            .set(Some(AlterColumnArgs::set_data_type("c", "int")), &mut registry)
            .unwrap();
        let before = alter.render();

        assert!(alter
            .set(Some(AlterColumnArgs::set_statistics("c", 20_000)), &mut registry)
            .is_err());
        assert_eq!(alter.render(), before);
        assert_eq!(
            registry.bound_values().unwrap(),
            vec![Value::from("c"), Value::from("int")]
        );
    }
}
