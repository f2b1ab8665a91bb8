//! Role specifications: `OWNER TO`, `OWNED BY` and `TO`.

use super::{Clause, ListClause, checked_text, keyword_list};
use crate::code::{Code, CodeArg, RoleKind};
use crate::error::{ClauseError, ClauseResult};
use crate::keyword;
use crate::placeholder::{Placeholder, Registry};

/// Setter input for a role: a kind code plus a name for [`RoleKind::Name`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoleArg {
    pub kind: CodeArg<RoleKind>,
    pub name: Option<String>,
}

impl RoleArg {
    pub fn new(kind: impl Into<CodeArg<RoleKind>>, name: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            name,
        }
    }

    /// A role given by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(RoleKind::Name, Some(name.into()))
    }

    /// A keyword role such as `CURRENT_USER`.
    pub fn keyword(kind: RoleKind) -> Self {
        Self::new(kind, None)
    }
}

/// A validated role: either a bound name or a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSpec {
    kind: RoleKind,
    name: Option<Placeholder>,
}

impl RoleSpec {
    pub fn kind(&self) -> RoleKind {
        self.kind
    }

    pub fn name(&self) -> Option<&Placeholder> {
        self.name.as_ref()
    }

    fn bind(
        function: &'static str,
        arg: RoleArg,
        allowed: &[RoleKind],
        registry: &mut Registry,
    ) -> ClauseResult<Self> {
        let kind = arg.kind.resolve(function, "role")?;
        if !allowed.contains(&kind) {
            return Err(ClauseError::invalid_argument(
                function,
                "role",
                format!("{kind:?} is not allowed here"),
            ));
        }

        let name = match (kind, arg.name) {
            (RoleKind::Name, Some(name)) => Some(checked_text(function, "name", name)?),
            (RoleKind::Name, None) => {
                return Err(ClauseError::invalid_argument(
                    function,
                    "name",
                    "a named role requires a name",
                ));
            }
            (_, Some(_)) => {
                return Err(ClauseError::invalid_argument(
                    function,
                    "name",
                    format!("{kind:?} does not take a name"),
                ));
            }
            (_, None) => None,
        };

        let name = name.map(|n| registry.allocate(n)).transpose()?;
        Ok(Self { kind, name })
    }

    fn render(&self) -> String {
        match &self.name {
            Some(p) => p.to_string(),
            None => self.kind.keyword().to_string(),
        }
    }
}

const ROLE_SPECIFICATION: &[RoleKind] = &[
    RoleKind::Name,
    RoleKind::CurrentUser,
    RoleKind::SessionUser,
    RoleKind::CurrentRole,
];

const ROLE_OR_PUBLIC: &[RoleKind] = &[
    RoleKind::Name,
    RoleKind::Public,
    RoleKind::CurrentUser,
    RoleKind::SessionUser,
    RoleKind::CurrentRole,
];

/// `OWNER TO role`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerTo(pub RoleSpec);

impl Clause for OwnerTo {
    type Args = RoleArg;
    const NAME: &'static str = "owner_to";

    fn bind(args: RoleArg, registry: &mut Registry) -> ClauseResult<Self> {
        RoleSpec::bind(Self::NAME, args, ROLE_SPECIFICATION, registry).map(Self)
    }

    fn render(&self) -> Option<String> {
        Some(format!("{} {}", keyword::OWNER_TO, self.0.render()))
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        self.0.name.iter().collect()
    }
}

/// One member of `OWNED BY role, ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedBy(pub RoleSpec);

impl Clause for OwnedBy {
    type Args = RoleArg;
    const NAME: &'static str = "owned_by";

    fn bind(args: RoleArg, registry: &mut Registry) -> ClauseResult<Self> {
        RoleSpec::bind(Self::NAME, args, ROLE_SPECIFICATION, registry).map(Self)
    }

    fn render(&self) -> Option<String> {
        Some(self.0.render())
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        self.0.name.iter().collect()
    }
}

impl ListClause for OwnedBy {
    fn render_list(items: &[Self]) -> Option<String> {
        keyword_list(keyword::OWNED_BY, items)
    }
}

/// One member of `TO role, ...`; `PUBLIC` is allowed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToRole(pub RoleSpec);

impl Clause for ToRole {
    type Args = RoleArg;
    const NAME: &'static str = "to_role";

    fn bind(args: RoleArg, registry: &mut Registry) -> ClauseResult<Self> {
        RoleSpec::bind(Self::NAME, args, ROLE_OR_PUBLIC, registry).map(Self)
    }

    fn render(&self) -> Option<String> {
        Some(self.0.render())
    }

    fn placeholders(&self) -> Vec<&Placeholder> {
        self.0.name.iter().collect()
    }
}

impl ListClause for ToRole {
    fn render_list(items: &[Self]) -> Option<String> {
        keyword_list(keyword::TO, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{Fragment, ListFragment};

    #[test]
    fn test_owner_to_name_and_keyword() {
        let mut registry = Registry::new();
        let mut owner = Fragment::<OwnerTo>::new();
        owner.set(Some(RoleArg::named("alice")), &mut registry).unwrap();
        assert_eq!(owner.render().as_deref(), Some("OWNER TO $1"));

        owner
            .set(Some(RoleArg::keyword(RoleKind::SessionUser)), &mut registry)
            .unwrap();
        assert_eq!(owner.render().as_deref(), Some("OWNER TO SESSION_USER"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_owner_to_rejects_public_and_stray_names() {
        let mut registry = Registry::new();
        let err = OwnerTo::bind(RoleArg::keyword(RoleKind::Public), &mut registry).unwrap_err();
        assert_eq!(err.argument(), Some("role"));

        let err = OwnerTo::bind(
            RoleArg::new(RoleKind::CurrentUser, Some("bob".into())),
            &mut registry,
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("name"));

        let err = OwnerTo::bind(RoleArg::new(RoleKind::Name, None), &mut registry).unwrap_err();
        assert_eq!(err.argument(), Some("name"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_role_lists_append() {
        let mut registry = Registry::new();
        let mut to = ListFragment::<ToRole>::new();
        to.set(Some(RoleArg::named("staff")), &mut registry).unwrap();
        to.set(Some(RoleArg::keyword(RoleKind::Public)), &mut registry).unwrap();
        assert_eq!(to.render().as_deref(), Some("TO $1, PUBLIC"));

        let mut owned = ListFragment::<OwnedBy>::new();
        owned.set(Some(RoleArg::new(2i32, None)), &mut registry).unwrap();
        owned.set(Some(RoleArg::named("ops")), &mut registry).unwrap();
        assert_eq!(owned.render().as_deref(), Some("OWNED BY CURRENT_USER, $2"));
    }
}
