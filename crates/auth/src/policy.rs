//! Default role→permission table.
//!
//! The table is process-wide, read-only data: `const` slices behind an
//! accessor. Per-user custom permission sets are *not* represented here; they
//! ride along with the session and override these defaults at decision time
//! (see [`crate::authorize`]).

use crate::{Permission, Role};

/// The roles the marketplace provisions out of the box.
///
/// Drives the admin permissions matrix; decision functions accept any role
/// string and do not consult this list.
pub const KNOWN_ROLES: [Role; 4] = [
    Role::ADMIN,
    Role::MODERATOR,
    Role::EMPLOYER,
    Role::JOBSEEKER,
];

/// Admins hold the entire vocabulary. Superset-of-everything is structural:
/// a permission added to [`Permission::ALL`] is an admin grant automatically.
const ADMIN_PERMISSIONS: &[Permission] = &Permission::ALL;

/// Moderation grants only. Must never include `delete_users`,
/// `manage_settings`, `system_maintenance`, or `manage_permissions`.
const MODERATOR_PERMISSIONS: &[Permission] = &[
    Permission::ModerateContent,
    Permission::ViewModerationQueue,
    Permission::ApproveContent,
    Permission::RemoveContent,
    Permission::ViewUsers,
    Permission::ApproveJobs,
    Permission::RemoveJobs,
    Permission::RemoveReviews,
    Permission::ViewAuditLog,
];

// Employers and jobseekers act on their own documents (their postings, their
// applications); that is an ownership check made elsewhere, not an RBAC grant.
const EMPLOYER_PERMISSIONS: &[Permission] = &[];
const JOBSEEKER_PERMISSIONS: &[Permission] = &[];

/// Default permissions granted by a role.
///
/// Any unrecognized role (including the empty string) resolves to the empty
/// slice so callers can treat "unknown role" uniformly as "no default grants"
/// without branching. The returned slice is immutable static data; no caller
/// can corrupt the table through it.
pub fn permissions_for_role(role: &Role) -> &'static [Permission] {
    match role.as_str() {
        "admin" => ADMIN_PERMISSIONS,
        "moderator" => MODERATOR_PERMISSIONS,
        "employer" => EMPLOYER_PERMISSIONS,
        "jobseeker" => JOBSEEKER_PERMISSIONS,
        _ => &[],
    }
}
