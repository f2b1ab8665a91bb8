//! Closed-set enumerations with stable integer codes.
//!
//! Every enumeration keeps the numbering callers already persist (code `0`
//! means "none" and is never a valid choice). Setters accept a [`CodeArg`],
//! which is either the enum itself or a raw code that is checked when the
//! clause is bound.

use crate::error::{ClauseError, ClauseResult};
use crate::keyword;
use std::fmt;

/// Common surface of the coded enumerations.
pub trait Code: Copy + fmt::Debug + 'static {
    /// Human readable name of the enumeration, used in error messages.
    const LABEL: &'static str;

    /// Every variant, in code order.
    fn all() -> &'static [Self];

    /// The stable integer code.
    fn code(self) -> i32;

    /// Look a variant up by code.
    fn from_code(code: i32) -> Option<Self>;

    /// SQL text written for this variant.
    fn keyword(self) -> &'static str;
}

/// A closed-set argument given either as the enum or as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeArg<T> {
    Variant(T),
    Code(i32),
}

impl<T: Code> CodeArg<T> {
    /// Resolve to a variant, rejecting unknown codes as `InvalidArgument`.
    pub fn resolve(self, function: &'static str, argument: &'static str) -> ClauseResult<T> {
        match self {
            CodeArg::Variant(v) => Ok(v),
            CodeArg::Code(code) => T::from_code(code).ok_or_else(|| {
                ClauseError::invalid_argument(
                    function,
                    argument,
                    format!("unknown {} code {code}", T::LABEL),
                )
            }),
        }
    }
}

impl<T: Code> From<i32> for CodeArg<T> {
    fn from(code: i32) -> Self {
        CodeArg::Code(code)
    }
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal => $kw:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code),+
        }

        impl Code for $name {
            const LABEL: &'static str = $label;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn code(self) -> i32 {
                self as i32
            }

            fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn keyword(self) -> &'static str {
                match self {
                    $($name::$variant => $kw),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }

        impl From<$name> for CodeArg<$name> {
            fn from(v: $name) -> Self {
                CodeArg::Variant(v)
            }
        }
    };
}

code_enum! {
    /// Dependent object behavior for DROP-like actions.
    Cascade("cascade") {
        Cascade = 1 => keyword::CASCADE,
        Restrict = 2 => keyword::RESTRICT,
    }
}

code_enum! {
    /// The sub-action of `ALTER COLUMN`.
    AlterColumnKind("alter column") {
        DropNotNull = 1 => keyword::DROP_NOT_NULL,
        DropDefault = 2 => keyword::DROP_DEFAULT,
        SetNotNull = 3 => keyword::SET_NOT_NULL,
        SetDataType = 4 => keyword::SET_DATA_TYPE,
        SetDefault = 5 => keyword::SET_DEFAULT,
        SetStatistics = 6 => keyword::SET_STATISTICS,
        SetStorage = 7 => keyword::SET_STORAGE,
    }
}

code_enum! {
    /// Column storage strategy.
    StorageMode("storage mode") {
        Extended = 1 => "EXTENDED",
        External = 2 => "EXTERNAL",
        Main = 3 => "MAIN",
        Plain = 4 => "PLAIN",
    }
}

code_enum! {
    /// Table and index storage parameters.
    ///
    /// Rendered as PostgreSQL spells them, which is lower case.
    StorageParameter("storage parameter") {
        Autosummarize = 1 => "autosummarize",
        AutovacuumAnalyzeScaleFactor = 2 => "autovacuum_analyze_scale_factor",
        AutovacuumAnalyzeThreshold = 3 => "autovacuum_analyze_threshold",
        AutovacuumCostDelay = 4 => "autovacuum_vacuum_cost_delay",
        AutovacuumCostLimit = 5 => "autovacuum_vacuum_cost_limit",
        AutovacuumEnabled = 6 => "autovacuum_enabled",
        AutovacuumFreezeMinAge = 7 => "autovacuum_freeze_min_age",
        AutovacuumFreezeMaxAge = 8 => "autovacuum_freeze_max_age",
        AutovacuumFreezeTableAge = 9 => "autovacuum_freeze_table_age",
        AutovacuumMultixactFreezeMinAge = 10 => "autovacuum_multixact_freeze_min_age",
        AutovacuumMultixactFreezeTableAge = 11 => "autovacuum_multixact_freeze_table_age",
        AutovacuumScaleFactor = 12 => "autovacuum_vacuum_scale_factor",
        AutovacuumVacuumThreshold = 13 => "autovacuum_vacuum_threshold",
        Buffering = 14 => "buffering",
        FastUpdate = 15 => "fastupdate",
        FillFactor = 16 => "fillfactor",
        GinPendingListLimit = 17 => "gin_pending_list_limit",
        LogAutovacuumMinDuration = 18 => "log_autovacuum_min_duration",
        PagesPerRange = 19 => "pages_per_range",
        ParallelWorkers = 20 => "parallel_workers",
        UserCatalogTable = 21 => "user_catalog_table",
    }
}

code_enum! {
    /// Role specification kinds.
    RoleKind("role") {
        All = 1 => keyword::ALL,
        CurrentUser = 2 => keyword::CURRENT_USER,
        /// A named role, bound through a placeholder.
        Name = 3 => "",
        Public = 4 => keyword::PUBLIC,
        SessionUser = 5 => keyword::SESSION_USER,
        CurrentRole = 6 => keyword::CURRENT_ROLE,
    }
}

code_enum! {
    /// The optional noise word after `BEGIN`.
    TransactionAction("transaction action") {
        Transaction = 1 => keyword::TRANSACTION,
        Work = 2 => keyword::WORK,
    }
}

code_enum! {
    /// Transaction modes accepted by `BEGIN` and `SET TRANSACTION`.
    TransactionMode("transaction mode") {
        Deferrable = 1 => "DEFERRABLE",
        IsolationLevelRepeatableRead = 2 => "ISOLATION LEVEL REPEATABLE READ",
        IsolationLevelReadCommitted = 3 => "ISOLATION LEVEL READ COMMITTED",
        IsolationLevelReadUncommitted = 4 => "ISOLATION LEVEL READ UNCOMMITTED",
        IsolationLevelSerializable = 5 => "ISOLATION LEVEL SERIALIZABLE",
        NotDeferrable = 6 => "NOT DEFERRABLE",
        ReadWrite = 7 => "READ WRITE",
        ReadOnly = 8 => "READ ONLY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_every_variant() {
        for kind in AlterColumnKind::all() {
            assert_eq!(AlterColumnKind::from_code(kind.code()), Some(*kind));
        }
        assert_eq!(StorageParameter::all().len(), 21);
    }

    #[test]
    fn zero_is_never_valid() {
        assert_eq!(Cascade::from_code(0), None);
        assert_eq!(TransactionMode::from_code(0), None);
    }

    #[test]
    fn resolve_accepts_variant_or_code() {
        let by_code: CodeArg<Cascade> = 2i32.into();
        assert_eq!(by_code.resolve("set_cascade", "cascade").unwrap(), Cascade::Restrict);
        let by_variant: CodeArg<Cascade> = Cascade::Cascade.into();
        assert_eq!(by_variant.resolve("set_cascade", "cascade").unwrap(), Cascade::Cascade);
    }

    #[test]
    fn resolve_rejects_unknown_code() {
        let err = CodeArg::<StorageMode>::Code(9)
            .resolve("set_alter_column", "storage")
            .unwrap_err();
        assert_eq!(err.argument(), Some("storage"));
        assert!(err.to_string().contains("unknown storage mode code 9"));
    }

    #[test]
    fn keywords() {
        assert_eq!(TransactionMode::ReadOnly.to_string(), "READ ONLY");
        assert_eq!(StorageParameter::FillFactor.keyword(), "fillfactor");
        assert_eq!(RoleKind::SessionUser.keyword(), "SESSION_USER");
    }
}
