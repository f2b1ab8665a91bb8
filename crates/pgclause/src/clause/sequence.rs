//! Integer-valued sequence options. Magnitudes are structural, not literals,
//! so they are written directly.

use super::Clause;
use crate::error::{ClauseError, ClauseResult};
use crate::keyword;
use crate::placeholder::Registry;

/// `INCREMENT BY n`, with `n != 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementBy(pub i64);

impl Clause for IncrementBy {
    type Args = i64;
    const NAME: &'static str = "increment_by";

    fn bind(increment: i64, _registry: &mut Registry) -> ClauseResult<Self> {
        if increment == 0 {
            return Err(ClauseError::invalid_argument(
                Self::NAME,
                "increment",
                "cannot be zero",
            ));
        }
        Ok(Self(increment))
    }

    fn render(&self) -> Option<String> {
        Some(format!("{} {}", keyword::INCREMENT_BY, self.0))
    }
}

macro_rules! bound_clause {
    ($(#[$meta:meta])* $name:ident, $label:literal, $keyword:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub Option<i64>);

        impl Clause for $name {
            type Args = Option<i64>;
            const NAME: &'static str = $label;

            fn bind(bound: Option<i64>, _registry: &mut Registry) -> ClauseResult<Self> {
                Ok(Self(bound))
            }

            fn render(&self) -> Option<String> {
                Some(match self.0 {
                    Some(n) => format!("{} {n}", $keyword),
                    None => format!("{} {}", keyword::NO, $keyword),
                })
            }
        }
    };
}

bound_clause!(
    /// `MINVALUE n`, or `NO MINVALUE` for the type's default.
    MinValue,
    "min_value",
    keyword::MINVALUE
);
bound_clause!(
    /// `MAXVALUE n`, or `NO MAXVALUE` for the type's default.
    MaxValue,
    "max_value",
    keyword::MAXVALUE
);

/// `START WITH n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartWith(pub i64);

impl Clause for StartWith {
    type Args = i64;
    const NAME: &'static str = "start_with";

    fn bind(start: i64, _registry: &mut Registry) -> ClauseResult<Self> {
        Ok(Self(start))
    }

    fn render(&self) -> Option<String> {
        Some(format!("{} {}", keyword::START_WITH, self.0))
    }
}

/// `RESTART WITH n`, or a bare `RESTART` back to the start value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartWith(pub Option<i64>);

impl Clause for RestartWith {
    type Args = Option<i64>;
    const NAME: &'static str = "restart_with";

    fn bind(restart: Option<i64>, _registry: &mut Registry) -> ClauseResult<Self> {
        Ok(Self(restart))
    }

    fn render(&self) -> Option<String> {
        Some(match self.0 {
            Some(n) => format!("{} {} {n}", keyword::RESTART, keyword::WITH),
            None => keyword::RESTART.to_string(),
        })
    }
}

/// `CACHE n`, with `n >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cache(pub i64);

impl Clause for Cache {
    type Args = i64;
    const NAME: &'static str = "cache";

    fn bind(cache: i64, _registry: &mut Registry) -> ClauseResult<Self> {
        if cache < 1 {
            return Err(ClauseError::invalid_argument(
                Self::NAME,
                "cache",
                format!("must be at least 1, got {cache}"),
            ));
        }
        Ok(Self(cache))
    }

    fn render(&self) -> Option<String> {
        Some(format!("{} {}", keyword::CACHE, self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Fragment;

    #[test]
    fn test_increment_rejects_zero() {
        let mut registry = Registry::new();
        let mut inc = Fragment::<IncrementBy>::new();
        inc.set(Some(-2), &mut registry).unwrap();
        let err = inc.set(Some(0), &mut registry).unwrap_err();
        assert_eq!(err.argument(), Some("increment"));
        assert_eq!(inc.render().as_deref(), Some("INCREMENT BY -2"));
    }

    #[test]
    fn test_bounds_and_restart() {
        assert_eq!(MinValue(None).render().as_deref(), Some("NO MINVALUE"));
        assert_eq!(MaxValue(Some(99)).render().as_deref(), Some("MAXVALUE 99"));
        assert_eq!(RestartWith(None).render().as_deref(), Some("RESTART"));
        assert_eq!(RestartWith(Some(5)).render().as_deref(), Some("RESTART WITH 5"));
    }

    #[test]
    fn test_cache_minimum() {
        let mut registry = Registry::new();
        assert!(Cache::bind(0, &mut registry).is_err());
        assert_eq!(Cache::bind(20, &mut registry).unwrap().render().as_deref(), Some("CACHE 20"));
    }
}
