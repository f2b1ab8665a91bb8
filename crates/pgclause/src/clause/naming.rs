//! Clauses carrying one free-text literal, bound through a placeholder.

use super::{Clause, checked_text};
use crate::error::ClauseResult;
use crate::keyword;
use crate::placeholder::{Placeholder, Registry};

macro_rules! literal_clause {
    ($(#[$meta:meta])* $name:ident, $label:literal, $argument:literal, $keyword:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            placeholder: Placeholder,
        }

        impl $name {
            pub fn placeholder(&self) -> &Placeholder {
                &self.placeholder
            }
        }

        impl Clause for $name {
            type Args = String;
            const NAME: &'static str = $label;

            fn bind(value: String, registry: &mut Registry) -> ClauseResult<Self> {
                let value = checked_text(Self::NAME, $argument, value)?;
                Ok(Self {
                    placeholder: registry.allocate(value)?,
                })
            }

            fn render(&self) -> Option<String> {
                let kw: &str = $keyword;
                if kw.is_empty() {
                    Some(self.placeholder.to_string())
                } else {
                    Some(format!("{kw} {}", self.placeholder))
                }
            }

            fn placeholders(&self) -> Vec<&Placeholder> {
                vec![&self.placeholder]
            }
        }
    };
}

literal_clause!(
    /// The object name a statement operates on.
    Name,
    "name",
    "name",
    ""
);
literal_clause!(
    /// `RENAME TO new_name`
    RenameTo,
    "rename_to",
    "name",
    keyword::RENAME_TO
);
literal_clause!(
    /// `SET SCHEMA schema`
    SetSchema,
    "set_schema",
    "schema",
    keyword::SET_SCHEMA
);
literal_clause!(
    /// `SET TABLESPACE tablespace`
    SetTablespace,
    "set_tablespace",
    "tablespace",
    keyword::SET_TABLESPACE
);
literal_clause!(
    /// `AS data_type`
    AsDataType,
    "as_data_type",
    "data_type",
    keyword::AS
);
literal_clause!(
    /// `ON table`
    OnTable,
    "on_table",
    "table",
    keyword::ON
);
literal_clause!(
    /// `DEPENDS ON EXTENSION extension`
    DependsOnExtension,
    "depends_on_extension",
    "extension",
    keyword::DEPENDS_ON_EXTENSION
);
