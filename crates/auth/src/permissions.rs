use serde::{Deserialize, Serialize};

/// Capability tag checked by the decision engine.
///
/// The vocabulary is closed: every grant the platform understands is a variant
/// here. The serialized snake_case tag is the stable identifier stored in
/// per-user custom permission sets and exchanged with the admin UI; it must
/// never drift from [`Permission::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // User management
    ViewUsers,
    ManageUsers,
    DeleteUsers,
    ManagePermissions,

    // Content moderation
    ModerateContent,
    ViewModerationQueue,
    ApproveContent,
    RemoveContent,

    // Analytics
    ViewAnalytics,
    ExportAnalytics,

    // Settings
    ViewSettings,
    ManageSettings,

    // Audit
    ViewAuditLog,

    // Jobs
    ManageJobs,
    ApproveJobs,
    RemoveJobs,

    // Companies
    ManageCompanies,
    VerifyCompanies,

    // Reviews
    ManageReviews,
    RemoveReviews,

    // System
    SystemMaintenance,
}

impl Permission {
    /// Every permission in the vocabulary, in declaration order.
    ///
    /// Matrix views and tests iterate this instead of hand-maintaining lists.
    pub const ALL: [Permission; 21] = [
        Permission::ViewUsers,
        Permission::ManageUsers,
        Permission::DeleteUsers,
        Permission::ManagePermissions,
        Permission::ModerateContent,
        Permission::ViewModerationQueue,
        Permission::ApproveContent,
        Permission::RemoveContent,
        Permission::ViewAnalytics,
        Permission::ExportAnalytics,
        Permission::ViewSettings,
        Permission::ManageSettings,
        Permission::ViewAuditLog,
        Permission::ManageJobs,
        Permission::ApproveJobs,
        Permission::RemoveJobs,
        Permission::ManageCompanies,
        Permission::VerifyCompanies,
        Permission::ManageReviews,
        Permission::RemoveReviews,
        Permission::SystemMaintenance,
    ];

    /// Stable snake_case tag (identical to the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewUsers => "view_users",
            Permission::ManageUsers => "manage_users",
            Permission::DeleteUsers => "delete_users",
            Permission::ManagePermissions => "manage_permissions",
            Permission::ModerateContent => "moderate_content",
            Permission::ViewModerationQueue => "view_moderation_queue",
            Permission::ApproveContent => "approve_content",
            Permission::RemoveContent => "remove_content",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ExportAnalytics => "export_analytics",
            Permission::ViewSettings => "view_settings",
            Permission::ManageSettings => "manage_settings",
            Permission::ViewAuditLog => "view_audit_log",
            Permission::ManageJobs => "manage_jobs",
            Permission::ApproveJobs => "approve_jobs",
            Permission::RemoveJobs => "remove_jobs",
            Permission::ManageCompanies => "manage_companies",
            Permission::VerifyCompanies => "verify_companies",
            Permission::ManageReviews => "manage_reviews",
            Permission::RemoveReviews => "remove_reviews",
            Permission::SystemMaintenance => "system_maintenance",
        }
    }

    /// Short human-readable name for permission pickers and the matrix page.
    pub fn label(&self) -> &'static str {
        match self {
            Permission::ViewUsers => "View users",
            Permission::ManageUsers => "Manage users",
            Permission::DeleteUsers => "Delete users",
            Permission::ManagePermissions => "Manage permissions",
            Permission::ModerateContent => "Moderate content",
            Permission::ViewModerationQueue => "View moderation queue",
            Permission::ApproveContent => "Approve content",
            Permission::RemoveContent => "Remove content",
            Permission::ViewAnalytics => "View analytics",
            Permission::ExportAnalytics => "Export analytics",
            Permission::ViewSettings => "View settings",
            Permission::ManageSettings => "Manage settings",
            Permission::ViewAuditLog => "View audit log",
            Permission::ManageJobs => "Manage jobs",
            Permission::ApproveJobs => "Approve jobs",
            Permission::RemoveJobs => "Remove jobs",
            Permission::ManageCompanies => "Manage companies",
            Permission::VerifyCompanies => "Verify companies",
            Permission::ManageReviews => "Manage reviews",
            Permission::RemoveReviews => "Remove reviews",
            Permission::SystemMaintenance => "System maintenance",
        }
    }

    /// Longer explanation shown alongside the label.
    ///
    /// Invariant: non-empty and strictly longer than the label for every
    /// variant.
    pub fn description(&self) -> &'static str {
        match self {
            Permission::ViewUsers => "Browse user accounts and open their profiles",
            Permission::ManageUsers => "Edit user accounts, reset access, and change account status",
            Permission::DeleteUsers => "Permanently delete user accounts from the platform",
            Permission::ManagePermissions => "Assign custom permission sets to individual users",
            Permission::ModerateContent => "Edit or flag job postings, profiles, and messages",
            Permission::ViewModerationQueue => "See reported content awaiting a moderation decision",
            Permission::ApproveContent => "Approve reported or held content for publication",
            Permission::RemoveContent => "Take down content that violates platform policy",
            Permission::ViewAnalytics => "Open platform usage and hiring-funnel dashboards",
            Permission::ExportAnalytics => "Download analytics data as CSV or spreadsheet exports",
            Permission::ViewSettings => "Read platform configuration and feature flags",
            Permission::ManageSettings => "Change platform configuration and feature flags",
            Permission::ViewAuditLog => "Inspect the trail of administrative actions",
            Permission::ManageJobs => "Edit or close any job posting on the platform",
            Permission::ApproveJobs => "Approve submitted job postings for listing",
            Permission::RemoveJobs => "Delist job postings that violate platform policy",
            Permission::ManageCompanies => "Edit company pages and their employer accounts",
            Permission::VerifyCompanies => "Mark employer companies as identity-verified",
            Permission::ManageReviews => "Edit or reorder company reviews and ratings",
            Permission::RemoveReviews => "Take down company reviews that violate policy",
            Permission::SystemMaintenance => "Run maintenance tasks such as reindexing and cache resets",
        }
    }

    /// Conceptual group the permission belongs to.
    pub fn category(&self) -> PermissionCategory {
        match self {
            Permission::ViewUsers
            | Permission::ManageUsers
            | Permission::DeleteUsers
            | Permission::ManagePermissions => PermissionCategory::UserManagement,
            Permission::ModerateContent
            | Permission::ViewModerationQueue
            | Permission::ApproveContent
            | Permission::RemoveContent => PermissionCategory::ContentModeration,
            Permission::ViewAnalytics | Permission::ExportAnalytics => {
                PermissionCategory::Analytics
            }
            Permission::ViewSettings | Permission::ManageSettings => PermissionCategory::Settings,
            Permission::ViewAuditLog => PermissionCategory::Audit,
            Permission::ManageJobs | Permission::ApproveJobs | Permission::RemoveJobs => {
                PermissionCategory::Jobs
            }
            Permission::ManageCompanies | Permission::VerifyCompanies => {
                PermissionCategory::Companies
            }
            Permission::ManageReviews | Permission::RemoveReviews => PermissionCategory::Reviews,
            Permission::SystemMaintenance => PermissionCategory::System,
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conceptual grouping used to organize the matrix page and permission pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    UserManagement,
    ContentModeration,
    Analytics,
    Settings,
    Audit,
    Jobs,
    Companies,
    Reviews,
    System,
}

impl PermissionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PermissionCategory::UserManagement => "User management",
            PermissionCategory::ContentModeration => "Content moderation",
            PermissionCategory::Analytics => "Analytics",
            PermissionCategory::Settings => "Settings",
            PermissionCategory::Audit => "Audit",
            PermissionCategory::Jobs => "Jobs",
            PermissionCategory::Companies => "Companies",
            PermissionCategory::Reviews => "Reviews",
            PermissionCategory::System => "System",
        }
    }
}

impl core::fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn vocabulary_is_distinct() {
        let tags: HashSet<&str> = Permission::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(tags.len(), Permission::ALL.len());
    }

    #[test]
    fn every_permission_is_documented() {
        for p in Permission::ALL {
            assert!(!p.label().is_empty(), "{p} is missing a label");
            assert!(!p.description().is_empty(), "{p} is missing a description");
            assert!(
                p.description().len() > p.label().len(),
                "{p}: description must say more than the label"
            );
        }
    }

    #[test]
    fn serde_tag_matches_as_str() {
        for p in Permission::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));

            let back: Permission = serde_json::from_str(&json).unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn unknown_tag_is_rejected_at_the_boundary() {
        let result: Result<Permission, _> = serde_json::from_str("\"launch_rockets\"");
        assert!(result.is_err());
    }

    #[test]
    fn every_category_has_members() {
        let categories: HashSet<PermissionCategory> =
            Permission::ALL.iter().map(|p| p.category()).collect();
        assert_eq!(categories.len(), 9);
    }
}
