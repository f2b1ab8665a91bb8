//! Policy expressions: `USING (...)` and `WITH CHECK (...)`.
//!
//! An expression is either a single text literal or a separately built,
//! parameterized query whose values are absorbed into the statement registry.

use super::{Clause, checked_text};
use crate::error::ClauseResult;
use crate::keyword;
use crate::placeholder::{Placeholder, Registry, SubQuery};
use crate::statement::BuiltQuery;

/// Setter input for an expression.
#[derive(Debug, Clone)]
pub enum ExpressionArg {
    Text(String),
    Query(BuiltQuery),
}

impl From<&str> for ExpressionArg {
    fn from(v: &str) -> Self {
        ExpressionArg::Text(v.to_string())
    }
}

impl From<String> for ExpressionArg {
    fn from(v: String) -> Self {
        ExpressionArg::Text(v)
    }
}

impl From<BuiltQuery> for ExpressionArg {
    fn from(v: BuiltQuery) -> Self {
        ExpressionArg::Query(v)
    }
}

/// A bound expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Placeholder),
    Query(SubQuery),
}

impl Expression {
    fn bind(
        function: &'static str,
        arg: ExpressionArg,
        registry: &mut Registry,
    ) -> ClauseResult<Self> {
        match arg {
            ExpressionArg::Text(text) => {
                let text = checked_text(function, "expression", text)?;
                Ok(Expression::Literal(registry.allocate(text)?))
            }
            ExpressionArg::Query(query) => Ok(Expression::Query(registry.allocate_query(&query)?)),
        }
    }

    fn sql(&self) -> String {
        match self {
            Expression::Literal(p) => p.to_string(),
            Expression::Query(sub) => sub.sql().to_string(),
        }
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        match self {
            Expression::Literal(p) => vec![p],
            Expression::Query(sub) => sub.placeholders().iter().collect(),
        }
    }
}

macro_rules! expression_clause {
    ($(#[$meta:meta])* $name:ident, $label:literal, $keyword:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(pub Expression);

        impl Clause for $name {
            type Args = ExpressionArg;
            const NAME: &'static str = $label;

            fn bind(args: ExpressionArg, registry: &mut Registry) -> ClauseResult<Self> {
                Expression::bind(Self::NAME, args, registry).map(Self)
            }

            fn render(&self) -> Option<String> {
                Some(format!("{} ({})", $keyword, self.0.sql()))
            }

            fn placeholders(&self) -> Vec<&Placeholder> {
                self.0.placeholders()
            }
        }
    };
}

expression_clause!(
    /// `USING (expression)`
    UsingExpression,
    "using",
    keyword::USING
);
expression_clause!(
    /// `WITH CHECK (expression)`
    WithCheckExpression,
    "with_check",
    keyword::WITH_CHECK
);
