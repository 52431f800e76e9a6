//! `hirebridge-auth` — pure role-based access-control core.
//!
//! This crate is intentionally decoupled from HTTP, storage, and UI: it owns
//! the permission vocabulary, the default role→permission table, and the
//! decision functions every protected surface resolves through. Session
//! binding lives in `hirebridge-access`.

pub mod authorize;
pub mod matrix;
pub mod permissions;
pub mod policy;
pub mod roles;

pub use authorize::{
    can_access_admin_panel, effective_permissions, has_all_permissions, has_any_permission,
    has_permission,
};
pub use matrix::{PermissionEntry, PermissionMatrix, RoleGrants};
pub use permissions::{Permission, PermissionCategory};
pub use policy::{KNOWN_ROLES, permissions_for_role};
pub use roles::Role;
