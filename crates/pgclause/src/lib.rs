//! # pgclause
//!
//! Placeholder-safe PostgreSQL clause fragments and DDL statement assemblers.
//!
//! ## Features
//!
//! - **No literals in SQL**: every user value goes through a [`Registry`] and renders as `$n`
//! - **Validated setters**: bad input is rejected at `set_*` time, leaving prior state intact
//! - **Grammar order**: each clause renders its keywords in the order PostgreSQL expects
//! - **Sub-queries**: a separately built query can be nested; its placeholders are renumbered
//! - **tokio-postgres ready**: [`BuiltQuery::params_ref`] feeds `execute` directly
//!
//! ## Statements
//!
//! ```ignore
//! use pgclause::clause::{AddColumnArgs, AlterColumnArgs};
//! use pgclause::{AlterTable, Statement};
//!
//! let mut alter = AlterTable::new();
//! alter.set_name(Some("users".into()))?;
//! alter.set_action(Some(AddColumnArgs::new("age", "integer").into()))?;
//! alter.set_action(Some(AlterColumnArgs::set_default("status", "active").into()))?;
//!
//! let query = alter.build()?;
//! // ALTER TABLE $1 ADD COLUMN $2 $3, ALTER COLUMN $4 SET DEFAULT $5
//! client.execute(query.sql(), &query.params_ref()).await?;
//! ```
//!
//! ## Fragments
//!
//! Clauses can also be used on their own with a shared registry:
//!
//! ```ignore
//! use pgclause::clause::{Fragment, IfExists, Name};
//! use pgclause::Registry;
//!
//! let mut registry = Registry::new();
//! let mut name = Fragment::<Name>::new();
//! name.set(Some("users".into()), &mut registry)?;
//! assert_eq!(name.render().as_deref(), Some("$1"));
//! ```

pub mod clause;
pub mod code;
pub mod config;
pub mod error;
pub mod keyword;
pub mod placeholder;
pub mod statement;

pub use code::{
    AlterColumnKind, Cascade, Code, CodeArg, RoleKind, StorageMode, StorageParameter,
    TransactionAction, TransactionMode,
};
pub use config::BuilderConfig;
pub use error::{ClauseError, ClauseResult};
pub use placeholder::{Placeholder, Registry, SubQuery, Value};
pub use statement::{
    AlterIndex, AlterPolicy, AlterPublication, AlterSequence, AlterTable, Begin, BuiltQuery,
    Statement,
};
