//! Boolean keyword clauses. Flags never allocate placeholders.

use super::Clause;
use crate::error::ClauseResult;
use crate::keyword;
use crate::placeholder::Registry;

macro_rules! flag_clause {
    ($(#[$meta:meta])* $name:ident, $label:literal, $keyword:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub bool);

        impl $name {
            pub fn enabled(self) -> bool {
                self.0
            }
        }

        impl Clause for $name {
            type Args = bool;
            const NAME: &'static str = $label;

            fn bind(enabled: bool, _registry: &mut Registry) -> ClauseResult<Self> {
                Ok(Self(enabled))
            }

            fn render(&self) -> Option<String> {
                self.0.then(|| $keyword.to_string())
            }
        }
    };
}

flag_clause!(
    /// `IF EXISTS`
    IfExists,
    "if_exists",
    keyword::IF_EXISTS
);
flag_clause!(
    /// `ONLY`, restricting a table operation to the named table.
    Only,
    "only",
    keyword::ONLY
);
flag_clause!(
    /// `*`, explicitly including descendant tables.
    Wildcard,
    "wildcard",
    keyword::WILDCARD
);
flag_clause!(NoWait, "no_wait", keyword::NOWAIT);
flag_clause!(
    /// Selects the `ALTER TABLE ALL IN TABLESPACE` form.
    AllInTablespace,
    "all_in_tablespace",
    keyword::ALL_IN_TABLESPACE
);

/// `CYCLE` or `NO CYCLE`; both states render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle(pub bool);

impl Clause for Cycle {
    type Args = bool;
    const NAME: &'static str = "cycle";

    fn bind(cycle: bool, _registry: &mut Registry) -> ClauseResult<Self> {
        Ok(Self(cycle))
    }

    fn render(&self) -> Option<String> {
        Some(if self.0 {
            keyword::CYCLE.to_string()
        } else {
            format!("{} {}", keyword::NO, keyword::CYCLE)
        })
    }
}
