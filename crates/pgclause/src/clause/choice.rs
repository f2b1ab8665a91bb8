//! Single-keyword clauses chosen from a closed set.

use super::Clause;
use crate::code::{Cascade, Code, CodeArg, TransactionAction};
use crate::error::ClauseResult;
use crate::placeholder::Registry;

/// `CASCADE` or `RESTRICT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeClause(pub Cascade);

impl Clause for CascadeClause {
    type Args = CodeArg<Cascade>;
    const NAME: &'static str = "cascade";

    fn bind(args: Self::Args, _registry: &mut Registry) -> ClauseResult<Self> {
        Ok(Self(args.resolve(Self::NAME, "cascade")?))
    }

    fn render(&self) -> Option<String> {
        Some(self.0.keyword().to_string())
    }
}

/// `TRANSACTION` or `WORK` after `BEGIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionActionClause(pub TransactionAction);

impl Clause for TransactionActionClause {
    type Args = CodeArg<TransactionAction>;
    const NAME: &'static str = "transaction_action";

    fn bind(args: Self::Args, _registry: &mut Registry) -> ClauseResult<Self> {
        Ok(Self(args.resolve(Self::NAME, "action")?))
    }

    fn render(&self) -> Option<String> {
        Some(self.0.keyword().to_string())
    }
}
