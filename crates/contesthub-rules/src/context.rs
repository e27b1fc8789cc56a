//! Context types for rule evaluation.
//!
//! Contexts carry resolved snapshots only. No lookup happens during
//! evaluation; whoever builds the context has already fetched session,
//! role and contest state.

use contesthub_common::{ApprovalStatus, ContestPhase, Role};
use serde::{Deserialize, Serialize};

/// Session/role snapshot for access-control rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessContext {
    /// Is a signed-in identity present (and restoration finished)?
    pub authenticated: bool,
    /// Resolved role; `Role::User` when resolution failed or is pending
    pub role: Role,
}

impl AccessContext {
    /// Snapshot for an anonymous visitor.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: Role::default(),
        }
    }

    /// Snapshot for a signed-in identity with a resolved role.
    pub fn signed_in(role: Role) -> Self {
        Self {
            authenticated: true,
            role,
        }
    }
}

/// Contest-scoped snapshot for action-gating rules.
///
/// Combines the viewer's relationship to one contest with the contest's
/// derived temporal phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestGateContext {
    /// Derived temporal phase of the contest window
    pub phase: ContestPhase,
    /// Moderation status assigned by an admin
    pub approval: ApprovalStatus,
    /// Did the viewer pay the entry fee for this contest?
    pub has_paid: bool,
    /// Did the viewer hand in their task?
    pub has_submitted: bool,
    /// Is the viewer the creator of this contest?
    pub is_owner: bool,
}

impl ContestGateContext {
    /// Context for a viewer with no participation record.
    pub fn spectator(phase: ContestPhase, approval: ApprovalStatus) -> Self {
        Self {
            phase,
            approval,
            has_paid: false,
            has_submitted: false,
            is_owner: false,
        }
    }

    pub fn with_paid(mut self, has_paid: bool) -> Self {
        self.has_paid = has_paid;
        self
    }

    pub fn with_submitted(mut self, has_submitted: bool) -> Self {
        self.has_submitted = has_submitted;
        self
    }

    pub fn with_owner(mut self, is_owner: bool) -> Self {
        self.is_owner = is_owner;
        self
    }
}
