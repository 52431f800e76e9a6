//! Guard contract for protected UI subtrees.
//!
//! A guard carries one authorization request and one denial strategy; the
//! rendering layer asks it what to do with the protected content and follows
//! the returned [`GuardOutcome`]. Denial is a rendering outcome, never an
//! error: a user who lacks a permission simply does not see the subtree.

use hirebridge_auth::Permission;

use crate::AccessContext;

/// The authorization request a guard evaluates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequirement {
    /// No requirement. Un-annotated content always renders; guarding is
    /// opt-in per permission, not a blanket deny.
    None,
    /// One permission must be granted.
    Single(Permission),
    /// At least one of the listed permissions must be granted.
    AnyOf(Vec<Permission>),
    /// Every listed permission must be granted.
    AllOf(Vec<Permission>),
}

/// What happens to the protected subtree on denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DenyStrategy {
    /// Drop the subtree from the render tree; the caller substitutes its
    /// fallback node, or nothing.
    #[default]
    Unmount,
    /// Keep the subtree mounted inside a visibility-toggled container (the
    /// surrounding structure stays present for crawlers and layout).
    Hide,
}

/// Verdict handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content.
    Render,
    /// Omit the content; render the caller's fallback node if it has one.
    Fallback,
    /// Render the content inside a hidden container.
    Hidden,
}

impl GuardOutcome {
    /// Is the protected content visible to the user?
    pub fn shows_content(&self) -> bool {
        matches!(self, GuardOutcome::Render)
    }

    /// Does the protected content stay in the render tree?
    pub fn keeps_mounted(&self) -> bool {
        matches!(self, GuardOutcome::Render | GuardOutcome::Hidden)
    }
}

/// A decision point wrapping protected content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    requirement: AccessRequirement,
    deny: DenyStrategy,
}

impl Guard {
    /// Guard with no requirement (always renders).
    pub fn allow_all() -> Self {
        Self {
            requirement: AccessRequirement::None,
            deny: DenyStrategy::default(),
        }
    }

    /// Guard on a single permission.
    pub fn single(permission: Permission) -> Self {
        Self {
            requirement: AccessRequirement::Single(permission),
            deny: DenyStrategy::default(),
        }
    }

    /// Guard on "at least one of".
    pub fn any_of(permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            requirement: AccessRequirement::AnyOf(permissions.into()),
            deny: DenyStrategy::default(),
        }
    }

    /// Guard on "all of".
    pub fn all_of(permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            requirement: AccessRequirement::AllOf(permissions.into()),
            deny: DenyStrategy::default(),
        }
    }

    /// Choose what denial does to the subtree (default: unmount).
    pub fn deny_strategy(mut self, strategy: DenyStrategy) -> Self {
        self.deny = strategy;
        self
    }

    pub fn requirement(&self) -> &AccessRequirement {
        &self.requirement
    }

    /// Would this guard let the session see the content?
    pub fn allows(&self, access: &AccessContext) -> bool {
        match &self.requirement {
            AccessRequirement::None => true,
            AccessRequirement::Single(p) => access.can(*p),
            AccessRequirement::AnyOf(ps) => access.can_any(ps),
            AccessRequirement::AllOf(ps) => access.can_all(ps),
        }
    }

    /// Resolve the rendering verdict for a session.
    pub fn resolve(&self, access: &AccessContext) -> GuardOutcome {
        if self.allows(access) {
            GuardOutcome::Render
        } else {
            match self.deny {
                DenyStrategy::Unmount => GuardOutcome::Fallback,
                DenyStrategy::Hide => GuardOutcome::Hidden,
            }
        }
    }
}
