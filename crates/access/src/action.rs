//! Command-boundary authorization for admin actions.
//!
//! UI guards hide what a user cannot do; route handlers must still refuse to
//! do it. Admin actions declare their required permissions and are checked
//! here before dispatch, against the same [`AccessContext`] the UI rendered
//! from, so button and handler can never disagree.

use thiserror::Error;

use hirebridge_auth::Permission;

use crate::AccessContext;

/// Authorization contract for admin/back-office actions.
///
/// Implement this on action types that require permissions; the dispatch
/// layer enforces the requirements via [`authorize_action`] before executing.
pub trait ActionAuthorization {
    fn required_permissions(&self) -> &[Permission];
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Authorize an action for the current session.
///
/// - No IO
/// - No panics
/// - Checks authentication first, then every required permission
pub fn authorize_action<A: ActionAuthorization>(
    access: &AccessContext,
    action: &A,
) -> Result<(), AccessError> {
    if !access.is_authenticated() {
        return Err(AccessError::Unauthenticated);
    }

    for permission in action.required_permissions() {
        if !access.can(*permission) {
            tracing::debug!(permission = %permission, "action denied");
            return Err(AccessError::Forbidden(*permission));
        }
    }

    Ok(())
}
