//! Clause fragments.
//!
//! A clause is one piece of PostgreSQL grammar (`IF EXISTS`, `ADD COLUMN ...`,
//! `OWNER TO ...`). Each clause type implements [`Clause`]: `bind` validates
//! the caller's arguments and turns every free-text literal into a
//! placeholder, `render` writes the fragment back out. Statements hold one
//! [`Fragment`] (or [`ListFragment`] for repeatable clauses) per clause they
//! support.
//!
//! All validation happens before the fragment is touched: a rejected `set`
//! leaves both the fragment and the registry exactly as they were.
//!
//! # Example
//!
//! ```ignore
//! use pgclause::clause::{AddColumn, AddColumnArgs, Fragment};
//! use pgclause::Registry;
//!
//! let mut registry = Registry::new();
//! let mut add = Fragment::<AddColumn>::new();
//! add.set(Some(AddColumnArgs::new("age", "integer")), &mut registry)?;
//! assert_eq!(add.render().as_deref(), Some("ADD COLUMN $1 $2"));
//! ```

mod action;
mod choice;
mod column;
mod expression;
mod flag;
mod naming;
mod role;
mod sequence;
mod storage;
mod table;
mod transaction;


pub use action::{TableAction, TableActionArgs};
pub use choice::{CascadeClause, TransactionActionClause};
pub use column::{
    AddColumn, AddColumnArgs, AlterColumn, AlterColumnAction, AlterColumnArgs, AlterColumnValue,
    DropColumn, DropColumnArgs, RenameColumn, RenameColumnArgs,
};
pub use expression::{Expression, ExpressionArg, UsingExpression, WithCheckExpression};
pub use flag::{AllInTablespace, Cycle, IfExists, NoWait, Only, Wildcard};
pub use naming::{AsDataType, DependsOnExtension, Name, OnTable, RenameTo, SetSchema, SetTablespace};
pub use role::{OwnedBy, OwnerTo, RoleArg, RoleSpec, ToRole};
pub use sequence::{Cache, IncrementBy, MaxValue, MinValue, RestartWith, StartWith};
pub use storage::{
    ResetStorageParameters, SetStorageParameters, StorageParameterArg, StorageSetting,
    WithStorageParameters,
};
pub use table::{AddTable, DropTable, SetTable, TableTarget, TableTargetArgs};
pub use transaction::TransactionModes;

use crate::error::{ClauseError, ClauseResult};
use crate::placeholder::{Placeholder, Registry};

/// One SQL clause: validated state plus its rendering.
pub trait Clause: Sized {
    /// Arguments accepted by the clause's setter.
    type Args;

    /// Clause name used in errors and log events.
    const NAME: &'static str;

    /// Validate `args` and allocate placeholders for their literals.
    fn bind(args: Self::Args, registry: &mut Registry) -> ClauseResult<Self>;

    /// Render the fragment; `None` when the stored state writes nothing.
    fn render(&self) -> Option<String>;

    /// Placeholders embedded in this clause.
    fn placeholders(&self) -> Vec<&Placeholder> {
        Vec::new()
    }
}

/// A clause that may be given several times, rendered as one comma-separated fragment.
pub trait ListClause: Clause {
    /// Render all items; called with at least one item.
    fn render_list(items: &[Self]) -> Option<String>;

    /// Reject `next` when it conflicts with an item already in the list.
    fn check_append(_existing: &[Self], _next: &Self) -> ClauseResult<()> {
        Ok(())
    }
}

/// Optional single-valued clause state.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment<C> {
    value: Option<C>,
}

impl<C> Default for Fragment<C> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<C: Clause> Fragment<C> {
    /// Create an unset fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the clause, or clear it with `None`.
    ///
    /// Clearing keeps the old placeholders allocated in the registry.
    pub fn set(&mut self, args: Option<C::Args>, registry: &mut Registry) -> ClauseResult<()> {
        let Some(args) = args else {
            self.clear();
            return Ok(());
        };
        self.value = Some(bind_atomic::<C>(args, registry, |_| Ok(()))?);
        Ok(())
    }

    /// Current state, checked against the registry that issued its placeholders.
    pub fn get(&self, registry: &Registry) -> ClauseResult<Option<&C>> {
        match &self.value {
            Some(clause) => {
                verify(clause, registry)?;
                Ok(Some(clause))
            }
            None => Ok(None),
        }
    }

    /// Render without registry checks.
    pub fn render(&self) -> Option<String> {
        self.value.as_ref().and_then(C::render)
    }

    /// Verify and render, as statement assemblers do.
    pub fn build(&self, registry: &Registry) -> ClauseResult<Option<String>> {
        Ok(self.get(registry)?.and_then(C::render))
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn clear(&mut self) {
        if self.value.take().is_some() {
            tracing::debug!(target: "pgclause.clause", clause = C::NAME, "cleared");
        }
    }
}

/// Repeatable clause state; each `set` appends one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFragment<C> {
    items: Vec<C>,
}

impl<C> Default for ListFragment<C> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<C: ListClause> ListFragment<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one item, or clear every item with `None`.
    pub fn set(&mut self, args: Option<C::Args>, registry: &mut Registry) -> ClauseResult<()> {
        let Some(args) = args else {
            self.clear();
            return Ok(());
        };
        let item = bind_atomic::<C>(args, registry, |next| C::check_append(&self.items, next))?;
        self.items.push(item);
        Ok(())
    }

    /// Current items, or `None` when the list is empty.
    pub fn get(&self, registry: &Registry) -> ClauseResult<Option<&[C]>> {
        if self.items.is_empty() {
            return Ok(None);
        }
        for item in &self.items {
            verify(item, registry)?;
        }
        Ok(Some(self.items.as_slice()))
    }

    pub fn render(&self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        C::render_list(&self.items)
    }

    pub fn build(&self, registry: &Registry) -> ClauseResult<Option<String>> {
        match self.get(registry)? {
            Some(items) => Ok(C::render_list(items)),
            None => Ok(None),
        }
    }

    pub fn is_set(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            tracing::debug!(
                target: "pgclause.clause",
                clause = C::NAME,
                items = self.items.len(),
                "cleared"
            );
            self.items.clear();
        }
    }
}

/// Bind and check `args`; on any failure the registry returns to where it was.
fn bind_atomic<C: Clause>(
    args: C::Args,
    registry: &mut Registry,
    check: impl FnOnce(&C) -> ClauseResult<()>,
) -> ClauseResult<C> {
    let mark = registry.mark();
    C::bind(args, registry)
        .and_then(|clause| check(&clause).map(|()| clause))
        .inspect_err(|e| {
            registry.rollback(mark);
            tracing::debug!(target: "pgclause.clause", clause = C::NAME, error = %e, "rejected");
        })
}

fn verify<C: Clause>(clause: &C, registry: &Registry) -> ClauseResult<()> {
    if let Some(stale) = clause.placeholders().into_iter().find(|p| !registry.contains(p)) {
        tracing::error!(
            target: "pgclause.clause",
            clause = C::NAME,
            placeholder = %stale,
            "placeholder does not belong to the statement registry"
        );
        return Err(ClauseError::invalid_variable(C::NAME, "placeholder"));
    }
    Ok(())
}

/// Reject text that cannot be a meaningful literal.
pub(crate) fn checked_text(
    function: &'static str,
    argument: &'static str,
    value: impl Into<String>,
) -> ClauseResult<String> {
    let value = value.into();
    if value.is_empty() {
        return Err(ClauseError::invalid_argument(function, argument, "cannot be empty"));
    }
    if value.contains('\0') {
        return Err(ClauseError::invalid_argument(
            function,
            argument,
            "cannot contain NUL characters",
        ));
    }
    Ok(value)
}

/// `KEYWORD item, item, ...`
pub(crate) fn keyword_list<C: Clause>(keyword: &str, items: &[C]) -> Option<String> {
    let rendered: Vec<String> = items.iter().filter_map(C::render).collect();
    if rendered.is_empty() {
        return None;
    }
    Some(format!("{keyword} {}", rendered.join(", ")))
}
