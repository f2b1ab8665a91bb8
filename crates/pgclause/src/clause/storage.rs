//! Storage parameter lists: `SET (...)`, `WITH (...)` and `RESET (...)`.

use super::{Clause, ListClause};
use crate::code::{Code, CodeArg, StorageParameter};
use crate::error::{ClauseError, ClauseResult};
use crate::keyword;
use crate::placeholder::{Placeholder, Registry, Value};

/// Setter input for `parameter = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageParameterArg {
    pub parameter: CodeArg<StorageParameter>,
    pub value: Value,
}

impl StorageParameterArg {
    pub fn new(parameter: impl Into<CodeArg<StorageParameter>>, value: impl Into<Value>) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    pub(crate) fn validate(self, function: &'static str) -> ClauseResult<(StorageParameter, Value)> {
        let parameter = self.parameter.resolve(function, "parameter")?;
        let problem = match &self.value {
            Value::Text(t) if t.is_empty() || t.contains('\0') => {
                Some("text values cannot be empty or contain NUL")
            }
            Value::Json(_) => Some("storage parameters take scalar values"),
            _ => None,
        };
        match problem {
            Some(reason) => Err(ClauseError::invalid_argument(function, "value", reason)),
            None => Ok((parameter, self.value)),
        }
    }
}

/// A bound `parameter = $n` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSetting {
    pub parameter: StorageParameter,
    pub value: Placeholder,
}

impl StorageSetting {
    pub(crate) fn render(&self) -> String {
        format!("{} = {}", self.parameter.keyword(), self.value)
    }

    /// Validate every pair, then allocate them in order.
    pub(crate) fn bind_all(
        function: &'static str,
        args: Vec<StorageParameterArg>,
        registry: &mut Registry,
    ) -> ClauseResult<Vec<Self>> {
        let checked = args
            .into_iter()
            .map(|a| a.validate(function))
            .collect::<ClauseResult<Vec<_>>>()?;
        let parameters: Vec<StorageParameter> = checked.iter().map(|(p, _)| *p).collect();
        ensure_distinct(function, &parameters)?;
        checked
            .into_iter()
            .map(|(parameter, value)| {
                Ok(Self {
                    parameter,
                    value: registry.allocate(value)?,
                })
            })
            .collect()
    }
}

/// A parameter may appear only once per parameter list.
pub(crate) fn reject_repeat(
    function: &'static str,
    existing: impl IntoIterator<Item = StorageParameter>,
    next: StorageParameter,
) -> ClauseResult<()> {
    if existing.into_iter().any(|p| p == next) {
        return Err(ClauseError::invalid_argument(
            function,
            "parameter",
            format!("{next} is already in the list"),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_distinct(function: &'static str, parameters: &[StorageParameter]) -> ClauseResult<()> {
    for (i, next) in parameters.iter().enumerate() {
        reject_repeat(function, parameters[..i].iter().copied(), *next)?;
    }
    Ok(())
}

pub(crate) fn render_settings(keyword: &str, settings: &[&StorageSetting]) -> String {
    let body: Vec<String> = settings.iter().map(|s| s.render()).collect();
    format!("{keyword} ({})", body.join(", "))
}

pub(crate) fn render_reset(parameters: &[StorageParameter]) -> String {
    let body: Vec<&str> = parameters.iter().map(|p| p.keyword()).collect();
    format!("{} ({})", keyword::RESET, body.join(", "))
}

macro_rules! setting_list_clause {
    ($(#[$meta:meta])* $name:ident, $label:literal, $keyword:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(pub StorageSetting);

        impl Clause for $name {
            type Args = StorageParameterArg;
            const NAME: &'static str = $label;

            fn bind(args: StorageParameterArg, registry: &mut Registry) -> ClauseResult<Self> {
                let (parameter, value) = args.validate(Self::NAME)?;
                Ok(Self(StorageSetting {
                    parameter,
                    value: registry.allocate(value)?,
                }))
            }

            fn render(&self) -> Option<String> {
                Some(self.0.render())
            }

            fn placeholders(&self) -> Vec<&Placeholder> {
                vec![&self.0.value]
            }
        }

        impl ListClause for $name {
            fn render_list(items: &[Self]) -> Option<String> {
                let settings: Vec<&StorageSetting> = items.iter().map(|i| &i.0).collect();
                Some(render_settings($keyword, &settings))
            }

            fn check_append(existing: &[Self], next: &Self) -> ClauseResult<()> {
                reject_repeat(Self::NAME, existing.iter().map(|i| i.0.parameter), next.0.parameter)
            }
        }
    };
}

setting_list_clause!(
    /// One member of `SET (parameter = value, ...)`.
    SetStorageParameters,
    "set_storage_parameter",
    keyword::SET
);
setting_list_clause!(
    /// One member of `WITH (parameter = value, ...)`.
    WithStorageParameters,
    "with_storage_parameter",
    keyword::WITH
);

/// One member of `RESET (parameter, ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetStorageParameters(pub StorageParameter);

impl Clause for ResetStorageParameters {
    type Args = CodeArg<StorageParameter>;
    const NAME: &'static str = "reset_storage_parameter";

    fn bind(args: Self::Args, _registry: &mut Registry) -> ClauseResult<Self> {
        Ok(Self(args.resolve(Self::NAME, "parameter")?))
    }

    fn render(&self) -> Option<String> {
        Some(self.0.keyword().to_string())
    }
}

impl ListClause for ResetStorageParameters {
    fn render_list(items: &[Self]) -> Option<String> {
        let parameters: Vec<StorageParameter> = items.iter().map(|i| i.0).collect();
        Some(render_reset(&parameters))
    }

    fn check_append(existing: &[Self], next: &Self) -> ClauseResult<()> {
        reject_repeat(Self::NAME, existing.iter().map(|i| i.0), next.0)
    }
}
