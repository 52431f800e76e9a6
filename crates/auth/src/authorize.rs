//! The decision engine: pure single/any/all authorization verdicts.
//!
//! - No IO
//! - No panics
//! - No mutable state (safe to call from any thread without locking)
//!
//! Every protected surface of the platform — admin pages, moderation buttons,
//! route handlers — resolves through these functions, so the precedence rule
//! between role defaults and a per-user custom permission set lives in exactly
//! one place: [`has_permission`].

use crate::policy::permissions_for_role;
use crate::{Permission, Role};

/// Check a single permission for a role, honoring a per-user override set.
///
/// Precedence: a *present* explicit set (`Some`) replaces the role defaults
/// entirely — it is never unioned with them, and a present-but-empty set
/// grants nothing. Only an *absent* set (`None`) falls back to
/// [`permissions_for_role`]. A non-empty explicit set therefore grants even
/// when the role string is empty or unknown.
pub fn has_permission(
    role: &Role,
    permission: Permission,
    explicit: Option<&[Permission]>,
) -> bool {
    match explicit {
        Some(set) => set.contains(&permission),
        None => permissions_for_role(role).contains(&permission),
    }
}

/// True when at least one of `permissions` is granted.
///
/// An empty `permissions` list is `false`: "do you hold at least one of these
/// gates" over no gates is an existential over the empty set.
pub fn has_any_permission(
    role: &Role,
    permissions: &[Permission],
    explicit: Option<&[Permission]>,
) -> bool {
    permissions
        .iter()
        .any(|p| has_permission(role, *p, explicit))
}

/// True when every one of `permissions` is granted.
///
/// An empty `permissions` list is `true` (vacuous universal). Callers gating
/// on "all of nothing" get an allow, which is what un-annotated surfaces
/// expect.
pub fn has_all_permissions(
    role: &Role,
    permissions: &[Permission],
    explicit: Option<&[Permission]>,
) -> bool {
    permissions
        .iter()
        .all(|p| has_permission(role, *p, explicit))
}

/// Materialize the permission list a decision would consult.
///
/// Used by display surfaces (the permission matrix modal, profile pages) that
/// need the list itself rather than a verdict. Same precedence as
/// [`has_permission`]: the explicit set when present, role defaults otherwise.
pub fn effective_permissions(role: &Role, explicit: Option<&[Permission]>) -> Vec<Permission> {
    match explicit {
        Some(set) => set.to_vec(),
        None => permissions_for_role(role).to_vec(),
    }
}

/// Coarse gate for the administrative surface.
///
/// Exact, case-sensitive role identity — deliberately independent of the
/// fine-grained permission system, and not overridable by custom permission
/// sets. `"Admin"` and `"ADMIN"` are unknown roles and stay out.
pub fn can_access_admin_panel(role: &Role) -> bool {
    role == &Role::ADMIN || role == &Role::MODERATOR
}
