//! Caller adapter: cached, session-bound authorization decisions.

use hirebridge_auth::{
    Permission, Role, can_access_admin_panel, effective_permissions, has_all_permissions,
    has_any_permission, has_permission,
};

use crate::SessionIdentity;

/// Decisions materialized for one session snapshot.
///
/// The decision methods delegate to the `hirebridge-auth` engine so that
/// every surface agrees on override precedence; this type adds the one rule
/// the engine does not know about: an unauthenticated session is denied
/// everything before the engine is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessContext {
    identity: SessionIdentity,
    permissions: Vec<Permission>,
    can_access_admin: bool,
}

impl AccessContext {
    /// Resolve the decisions for a session snapshot.
    pub fn resolve(identity: SessionIdentity) -> Self {
        let permissions = if identity.is_authenticated {
            effective_permissions(&identity.role, identity.explicit_permissions.as_deref())
        } else {
            Vec::new()
        };
        let can_access_admin = identity.is_authenticated && can_access_admin_panel(&identity.role);

        tracing::debug!(
            role = %identity.role,
            authenticated = identity.is_authenticated,
            permission_count = permissions.len(),
            admin_eligible = can_access_admin,
            "resolved session access"
        );

        Self {
            identity,
            permissions,
            can_access_admin,
        }
    }

    /// Context for an absent session: every decision is a deny.
    pub fn anonymous() -> Self {
        Self::resolve(SessionIdentity::anonymous())
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated
    }

    /// Effective permission list: the explicit set when present, else role
    /// defaults; empty for anonymous sessions. Display surfaces (permission
    /// modals, profile chips) read this instead of re-deriving it.
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    fn explicit(&self) -> Option<&[Permission]> {
        self.identity.explicit_permissions.as_deref()
    }

    /// Single-permission decision. `false` for unauthenticated sessions.
    pub fn can(&self, permission: Permission) -> bool {
        self.identity.is_authenticated
            && has_permission(&self.identity.role, permission, self.explicit())
    }

    /// At-least-one decision. `false` for unauthenticated sessions.
    pub fn can_any(&self, permissions: &[Permission]) -> bool {
        self.identity.is_authenticated
            && has_any_permission(&self.identity.role, permissions, self.explicit())
    }

    /// Every-one decision. `false` for unauthenticated sessions: the
    /// authentication precondition wins over vacuous truth on an empty list.
    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        self.identity.is_authenticated
            && has_all_permissions(&self.identity.role, permissions, self.explicit())
    }

    /// Admin-surface eligibility (role identity, never permission-derived).
    pub fn can_access_admin(&self) -> bool {
        self.can_access_admin
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::ADMIN)
    }

    pub fn is_moderator(&self) -> bool {
        self.has_role(&Role::MODERATOR)
    }

    pub fn is_employer(&self) -> bool {
        self.has_role(&Role::EMPLOYER)
    }

    pub fn is_job_seeker(&self) -> bool {
        self.has_role(&Role::JOBSEEKER)
    }

    fn has_role(&self, role: &Role) -> bool {
        self.identity.is_authenticated && &self.identity.role == role
    }
}

/// Recompute-on-change cache around [`AccessContext::resolve`].
///
/// UI update cycles ask for the context every pass; the context is rebuilt
/// only when the session snapshot itself changed (sign-in, sign-out, role
/// change, custom-permission edit), not on unrelated state churn.
#[derive(Debug, Default)]
pub struct AccessCache {
    cached: Option<AccessContext>,
}

impl AccessCache {
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Return the context for `identity`, reusing the cached resolution when
    /// the snapshot is unchanged.
    pub fn resolve(&mut self, identity: &SessionIdentity) -> &AccessContext {
        match self.cached.take() {
            Some(ctx) if ctx.identity() == identity => self.cached.insert(ctx),
            _ => self.cached.insert(AccessContext::resolve(identity.clone())),
        }
    }

    /// Drop the cached resolution (e.g. on forced refresh).
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use hirebridge_auth::permissions_for_role;

    use super::*;
    use crate::UserId;

    #[test]
    fn authenticated_role_defaults_flow_through() {
        let ctx = AccessContext::resolve(SessionIdentity::authenticated(
            UserId::new(),
            Role::MODERATOR,
        ));

        assert!(ctx.can(Permission::ModerateContent));
        assert!(!ctx.can(Permission::ManageSettings));
        assert_eq!(
            ctx.permissions(),
            permissions_for_role(&Role::MODERATOR)
        );
        assert!(ctx.can_access_admin());
        assert!(ctx.is_moderator());
        assert!(!ctx.is_admin());
    }

    #[test]
    fn explicit_set_overrides_for_the_whole_session() {
        let ctx = AccessContext::resolve(
            SessionIdentity::authenticated(UserId::new(), Role::ADMIN)
                .with_explicit_permissions(vec![Permission::ViewUsers]),
        );

        assert!(ctx.can(Permission::ViewUsers));
        assert!(!ctx.can(Permission::ManageUsers));
        assert_eq!(ctx.permissions(), &[Permission::ViewUsers]);
        // Role identity is untouched by the override.
        assert!(ctx.is_admin());
        assert!(ctx.can_access_admin());
    }

    #[test]
    fn anonymous_session_is_denied_everything() {
        let ctx = AccessContext::anonymous();

        assert!(!ctx.can(Permission::ViewUsers));
        assert!(!ctx.can_any(&Permission::ALL));
        assert!(!ctx.can_all(&[]));
        assert!(ctx.permissions().is_empty());
        assert!(!ctx.can_access_admin());
        assert!(!ctx.is_admin() && !ctx.is_moderator() && !ctx.is_employer());
    }

    #[test]
    fn unauthenticated_role_string_is_ignored() {
        // A payload can carry a role while the session is signed out; the
        // authentication flag wins.
        let identity = SessionIdentity {
            user_id: None,
            is_authenticated: false,
            role: Role::ADMIN,
            explicit_permissions: Some(Permission::ALL.to_vec()),
        };
        let ctx = AccessContext::resolve(identity);

        assert!(!ctx.can(Permission::ViewUsers));
        assert!(!ctx.can_access_admin());
        assert!(!ctx.is_admin());
        assert!(ctx.permissions().is_empty());
    }

    #[test]
    fn vacuous_can_all_requires_authentication() {
        let signed_in =
            AccessContext::resolve(SessionIdentity::authenticated(UserId::new(), Role::JOBSEEKER));
        assert!(signed_in.can_all(&[]));
        assert!(!signed_in.can_any(&[]));

        assert!(!AccessContext::anonymous().can_all(&[]));
    }

    #[test]
    fn cache_reuses_until_the_identity_changes() {
        let mut cache = AccessCache::new();

        let jobseeker = SessionIdentity::authenticated(UserId::new(), Role::JOBSEEKER);
        let first = cache.resolve(&jobseeker).clone();
        let second = cache.resolve(&jobseeker).clone();
        assert_eq!(first, second);

        // Same user, new role: the context must follow the snapshot.
        let promoted = SessionIdentity {
            role: Role::MODERATOR,
            ..jobseeker.clone()
        };
        let third = cache.resolve(&promoted);
        assert!(third.can(Permission::ModerateContent));
        assert!(third.can_access_admin());

        cache.invalidate();
        assert!(cache.resolve(&promoted).can(Permission::ModerateContent));
    }
}
