//! Publication table lists: `ADD TABLE`, `SET TABLE`, `DROP TABLE`.

use super::{Clause, ListClause, checked_text, keyword_list};
use crate::error::{ClauseError, ClauseResult};
use crate::keyword;
use crate::placeholder::{Placeholder, Registry};

/// One table reference: `[ONLY] name [*]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTargetArgs {
    pub name: String,
    pub only: bool,
    pub descendants: bool,
}

impl TableTargetArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            only: false,
            descendants: false,
        }
    }

    pub fn only(mut self) -> Self {
        self.only = true;
        self
    }

    pub fn with_descendants(mut self) -> Self {
        self.descendants = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTarget {
    pub name: Placeholder,
    pub only: bool,
    pub descendants: bool,
}

impl TableTarget {
    fn bind(
        function: &'static str,
        args: TableTargetArgs,
        registry: &mut Registry,
    ) -> ClauseResult<Self> {
        if args.only && args.descendants {
            return Err(ClauseError::invalid_argument(
                function,
                "descendants",
                "ONLY and * are mutually exclusive",
            ));
        }
        let name = checked_text(function, "name", args.name)?;
        Ok(Self {
            name: registry.allocate(name)?,
            only: args.only,
            descendants: args.descendants,
        })
    }

    fn render(&self) -> String {
        match (self.only, self.descendants) {
            (true, _) => format!("{} {}", keyword::ONLY, self.name),
            (false, true) => format!("{} {}", self.name, keyword::WILDCARD),
            (false, false) => self.name.to_string(),
        }
    }
}

macro_rules! table_list_clause {
    ($(#[$meta:meta])* $name:ident, $label:literal, $keyword:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(pub TableTarget);

        impl Clause for $name {
            type Args = TableTargetArgs;
            const NAME: &'static str = $label;

            fn bind(args: TableTargetArgs, registry: &mut Registry) -> ClauseResult<Self> {
                TableTarget::bind(Self::NAME, args, registry).map(Self)
            }

            fn render(&self) -> Option<String> {
                Some(self.0.render())
            }

            fn placeholders(&self) -> Vec<&Placeholder> {
                vec![&self.0.name]
            }
        }

        impl ListClause for $name {
            fn render_list(items: &[Self]) -> Option<String> {
                keyword_list($keyword, items)
            }
        }
    };
}

table_list_clause!(
    /// One member of `ADD TABLE t, ...`.
    AddTable,
    "add_table",
    keyword::ADD_TABLE
);
table_list_clause!(
    /// One member of `SET TABLE t, ...`.
    SetTable,
    "set_table",
    keyword::SET_TABLE
);
table_list_clause!(
    /// One member of `DROP TABLE t, ...`.
    DropTable,
    "drop_table",
    keyword::DROP_TABLE
);
