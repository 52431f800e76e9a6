use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for RBAC.
///
/// Roles are intentionally opaque strings at this layer: the identity
/// collaborator hands us whatever role string the session carries, and an
/// unrecognized or empty role simply resolves to no default grants. The four
/// roles the marketplace actually provisions are exposed as consts so that
/// callers never spell the literals twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Platform operator with the full permission vocabulary.
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));

    /// Trust-and-safety staff; moderation grants only, nothing destructive.
    pub const MODERATOR: Role = Role(Cow::Borrowed("moderator"));

    /// Company account posting jobs. No default grants; authority over its
    /// own postings comes from ownership checks outside this engine.
    pub const EMPLOYER: Role = Role(Cow::Borrowed("employer"));

    /// Candidate account applying to jobs. No default grants, as above.
    pub const JOBSEEKER: Role = Role(Cow::Borrowed("jobseeker"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
