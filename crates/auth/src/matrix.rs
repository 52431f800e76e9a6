//! Read model for the admin permissions-matrix page.
//!
//! The matrix cross-tabulates the full vocabulary against every provisioned
//! role. It is derived entirely from [`permissions_for_role`], so the page can
//! never disagree with the decisions the engine actually makes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::policy::{KNOWN_ROLES, permissions_for_role};
use crate::{Permission, PermissionCategory, Role};

/// One vocabulary entry with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionEntry {
    pub permission: Permission,
    pub label: &'static str,
    pub description: &'static str,
    pub category: PermissionCategory,
}

/// One matrix column: a provisioned role and its default grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGrants {
    pub role: Role,
    pub granted: Vec<Permission>,
}

/// Snapshot of the role/permission cross-tabulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionMatrix {
    /// When the snapshot was taken (caller-supplied, keeps this function
    /// deterministic).
    pub generated_at: DateTime<Utc>,
    pub permissions: Vec<PermissionEntry>,
    pub roles: Vec<RoleGrants>,
}

impl PermissionMatrix {
    /// Build the matrix from the current role table.
    pub fn snapshot(generated_at: DateTime<Utc>) -> Self {
        let permissions = Permission::ALL
            .iter()
            .map(|p| PermissionEntry {
                permission: *p,
                label: p.label(),
                description: p.description(),
                category: p.category(),
            })
            .collect();

        let roles = KNOWN_ROLES
            .iter()
            .map(|role| RoleGrants {
                role: role.clone(),
                granted: permissions_for_role(role).to_vec(),
            })
            .collect();

        Self {
            generated_at,
            permissions,
            roles,
        }
    }

    /// Cell lookup: is `permission` granted to `role` by default?
    ///
    /// Roles outside the snapshot read as not granted.
    pub fn is_granted(&self, role: &Role, permission: Permission) -> bool {
        self.roles
            .iter()
            .find(|grants| &grants.role == role)
            .is_some_and(|grants| grants.granted.contains(&permission))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn snapshot() -> PermissionMatrix {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        PermissionMatrix::snapshot(at)
    }

    #[test]
    fn matrix_covers_the_whole_vocabulary() {
        let matrix = snapshot();
        assert_eq!(matrix.permissions.len(), Permission::ALL.len());
        assert_eq!(matrix.roles.len(), KNOWN_ROLES.len());
    }

    #[test]
    fn cells_agree_with_the_role_table() {
        let matrix = snapshot();
        for role in KNOWN_ROLES {
            for p in Permission::ALL {
                assert_eq!(
                    matrix.is_granted(&role, p),
                    permissions_for_role(&role).contains(&p),
                    "cell ({role}, {p}) drifted from the table"
                );
            }
        }
    }

    #[test]
    fn unknown_roles_read_as_ungranted() {
        let matrix = snapshot();
        assert!(!matrix.is_granted(&Role::new("intern"), Permission::ViewUsers));
    }

    #[test]
    fn serializes_with_stable_tags() {
        let matrix = snapshot();
        let json = serde_json::to_value(&matrix).unwrap();

        let first = &json["permissions"][0];
        assert_eq!(first["permission"], "view_users");
        assert_eq!(first["category"], "user_management");

        let admin = &json["roles"][0];
        assert_eq!(admin["role"], "admin");
        assert_eq!(
            admin["granted"].as_array().unwrap().len(),
            Permission::ALL.len()
        );
    }
}
