//! Transaction modes.

use super::{Clause, ListClause};
use crate::code::{Code, CodeArg, TransactionMode};
use crate::error::{ClauseError, ClauseResult};
use crate::placeholder::Registry;

/// One entry of a comma-separated transaction mode list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionModes(pub TransactionMode);

/// Modes in the same group are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModeGroup {
    Isolation,
    Access,
    Deferrable,
}

fn group(mode: TransactionMode) -> ModeGroup {
    match mode {
        TransactionMode::IsolationLevelRepeatableRead
        | TransactionMode::IsolationLevelReadCommitted
        | TransactionMode::IsolationLevelReadUncommitted
        | TransactionMode::IsolationLevelSerializable => ModeGroup::Isolation,
        TransactionMode::ReadWrite | TransactionMode::ReadOnly => ModeGroup::Access,
        TransactionMode::Deferrable | TransactionMode::NotDeferrable => ModeGroup::Deferrable,
    }
}

impl Clause for TransactionModes {
    type Args = CodeArg<TransactionMode>;
    const NAME: &'static str = "transaction_mode";

    fn bind(args: Self::Args, _registry: &mut Registry) -> ClauseResult<Self> {
        Ok(Self(args.resolve(Self::NAME, "mode")?))
    }

    fn render(&self) -> Option<String> {
        Some(self.0.keyword().to_string())
    }
}

impl ListClause for TransactionModes {
    fn render_list(items: &[Self]) -> Option<String> {
        let modes: Vec<&str> = items.iter().map(|m| m.0.keyword()).collect();
        Some(modes.join(", "))
    }

    fn check_append(existing: &[Self], next: &Self) -> ClauseResult<()> {
        match existing.iter().find(|m| group(m.0) == group(next.0)) {
            Some(prior) => Err(ClauseError::invalid_argument(
                Self::NAME,
                "mode",
                format!("{} conflicts with {}", next.0, prior.0),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::ListFragment;

    fn modes(list: &[TransactionMode]) -> (ListFragment<TransactionModes>, Registry) {
        let mut registry = Registry::new();
        let mut fragment = ListFragment::new();
        for mode in list {
            fragment.set(Some((*mode).into()), &mut registry).unwrap();
        }
        (fragment, registry)
    }

    #[test]
    fn test_one_mode_per_group() {
        let (fragment, registry) = modes(&[
            TransactionMode::IsolationLevelSerializable,
            TransactionMode::ReadOnly,
            TransactionMode::Deferrable,
        ]);

        assert_eq!(
            fragment.render().as_deref(),
            Some("ISOLATION LEVEL SERIALIZABLE, READ ONLY, DEFERRABLE")
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejects_conflicting_access_modes() {
        let (mut fragment, mut registry) = modes(&[TransactionMode::ReadOnly]);
        let err = fragment
            .set(Some(TransactionMode::ReadWrite.into()), &mut registry)
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), Some("mode"));
        assert_eq!(fragment.render().as_deref(), Some("READ ONLY"));
    }

    #[test]
    fn test_rejects_second_isolation_level() {
        let (mut fragment, mut registry) = modes(&[TransactionMode::IsolationLevelSerializable]);
        let err = fragment
            .set(
                Some(TransactionMode::IsolationLevelReadCommitted.into()),
                &mut registry,
            )
            .unwrap_err();

        assert_eq!(err.argument(), Some("mode"));
        assert_eq!(fragment.len(), 1);
    }

    #[test]
    fn test_rejects_deferrable_pair_and_repeats() {
        let (mut fragment, mut registry) = modes(&[TransactionMode::NotDeferrable]);
        assert!(fragment
            .set(Some(TransactionMode::Deferrable.into()), &mut registry)
            .is_err());
        assert!(fragment
            .set(Some(TransactionMode::NotDeferrable.into()), &mut registry)
            .is_err());
        assert_eq!(fragment.len(), 1);
    }
}
