use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hirebridge_auth::{Permission, Role};

/// Identity of a platform user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Resolved session snapshot supplied by the identity layer.
///
/// This is the whole interface between session handling and authorization:
/// the access layer never sees tokens or cookies, only this snapshot. The
/// decision layer treats the fields as:
///
/// - `is_authenticated`: precondition for every decision; an anonymous
///   session is denied everything regardless of `role`.
/// - `role`: opaque role string from the user document. Unknown strings are
///   valid and simply carry no default grants.
/// - `explicit_permissions`: per-user custom permission set. `None` means "no
///   override provided" (role defaults apply); `Some(vec![])` means "the
///   override grants nothing". The two states are deliberately distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub is_authenticated: bool,
    pub role: Role,
    #[serde(default)]
    pub explicit_permissions: Option<Vec<Permission>>,
}

impl SessionIdentity {
    /// Snapshot for an absent or signed-out session.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            is_authenticated: false,
            role: Role::new(""),
            explicit_permissions: None,
        }
    }

    /// Snapshot for a signed-in user with role defaults.
    pub fn authenticated(user_id: UserId, role: Role) -> Self {
        Self {
            user_id: Some(user_id),
            is_authenticated: true,
            role,
            explicit_permissions: None,
        }
    }

    /// Attach a custom permission set (replaces role defaults entirely).
    pub fn with_explicit_permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.explicit_permissions = Some(permissions);
        self
    }
}
