//! Rule implementations for ContestHub gating decisions.

use crate::context::{AccessContext, ContestGateContext};
use crate::specification::Rule;
use contesthub_common::{ApprovalStatus, ContestPhase, Role};

// =============================================================================
// Session-level rules
// =============================================================================

/// Check if a signed-in identity is present.
pub struct IsAuthenticated;

impl Rule<AccessContext> for IsAuthenticated {
    fn is_satisfied_by(&self, ctx: &AccessContext) -> bool {
        ctx.authenticated
    }
}

/// Check if the resolved role matches exactly.
pub struct HasRole(pub Role);

impl Rule<AccessContext> for HasRole {
    fn is_satisfied_by(&self, ctx: &AccessContext) -> bool {
        ctx.authenticated && ctx.role == self.0
    }
}

/// Check if the viewer has admin privileges.
pub struct IsAdmin;

impl Rule<AccessContext> for IsAdmin {
    fn is_satisfied_by(&self, ctx: &AccessContext) -> bool {
        ctx.authenticated && ctx.role == Role::Admin
    }
}

/// Check if the viewer can publish contests (creator or admin).
pub struct IsCreator;

impl Rule<AccessContext> for IsCreator {
    fn is_satisfied_by(&self, ctx: &AccessContext) -> bool {
        ctx.authenticated && matches!(ctx.role, Role::Creator | Role::Admin)
    }
}

// =============================================================================
// Contest-scoped rules
// =============================================================================

/// Check if the contest window is in the given phase.
pub struct PhaseIs(pub ContestPhase);

impl Rule<ContestGateContext> for PhaseIs {
    fn is_satisfied_by(&self, ctx: &ContestGateContext) -> bool {
        ctx.phase == self.0
    }
}

/// Check if the contest passed admin moderation.
pub struct IsApproved;

impl Rule<ContestGateContext> for IsApproved {
    fn is_satisfied_by(&self, ctx: &ContestGateContext) -> bool {
        ctx.approval == ApprovalStatus::Accepted
    }
}

/// Check if the viewer paid the entry fee.
pub struct HasPaidEntry;

impl Rule<ContestGateContext> for HasPaidEntry {
    fn is_satisfied_by(&self, ctx: &ContestGateContext) -> bool {
        ctx.has_paid
    }
}

/// Check if the viewer handed in their task.
pub struct HasSubmittedTask;

impl Rule<ContestGateContext> for HasSubmittedTask {
    fn is_satisfied_by(&self, ctx: &ContestGateContext) -> bool {
        ctx.has_submitted
    }
}

/// Check if the viewer owns (created) the contest.
pub struct IsContestOwner;

impl Rule<ContestGateContext> for IsContestOwner {
    fn is_satisfied_by(&self, ctx: &ContestGateContext) -> bool {
        ctx.is_owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::Spec;

    fn live_gate() -> ContestGateContext {
        ContestGateContext::spectator(ContestPhase::Live, ApprovalStatus::Accepted)
    }

    #[test]
    fn test_session_rules() {
        let anon = AccessContext::anonymous();
        assert!(!IsAuthenticated.is_satisfied_by(&anon));
        assert!(!IsAdmin.is_satisfied_by(&anon));

        let admin = AccessContext::signed_in(Role::Admin);
        assert!(IsAuthenticated.is_satisfied_by(&admin));
        assert!(IsAdmin.is_satisfied_by(&admin));
        assert!(IsCreator.is_satisfied_by(&admin));

        let user = AccessContext::signed_in(Role::User);
        assert!(!IsAdmin.is_satisfied_by(&user));
        assert!(!IsCreator.is_satisfied_by(&user));
        assert!(HasRole(Role::User).is_satisfied_by(&user));
    }

    #[test]
    fn test_registration_rule_composition() {
        // Registration: window not ended AND not already paid.
        let rule = !Spec(PhaseIs(ContestPhase::Ended)) & !Spec(HasPaidEntry);

        assert!(rule.is_satisfied_by(&live_gate()));
        assert!(!rule.is_satisfied_by(&live_gate().with_paid(true)));

        let ended = ContestGateContext::spectator(ContestPhase::Ended, ApprovalStatus::Accepted);
        assert!(!rule.is_satisfied_by(&ended));
    }

    #[test]
    fn test_grading_rule_composition() {
        // Grading: owner AND window closed AND a submission on file.
        let rule = Spec(IsContestOwner)
            & Spec(PhaseIs(ContestPhase::Ended))
            & Spec(HasSubmittedTask);

        let ready = ContestGateContext::spectator(ContestPhase::Ended, ApprovalStatus::Accepted)
            .with_owner(true)
            .with_submitted(true);
        assert!(rule.is_satisfied_by(&ready));

        // Window closed but the participant never submitted.
        let no_show = ContestGateContext::spectator(ContestPhase::Ended, ApprovalStatus::Accepted)
            .with_owner(true);
        assert!(!rule.is_satisfied_by(&no_show));

        // Submission exists but the window is still open.
        let early = live_gate().with_owner(true).with_submitted(true);
        assert!(!rule.is_satisfied_by(&early));
    }

    #[test]
    fn test_moderation_rule() {
        let pending = ContestGateContext::spectator(ContestPhase::Upcoming, ApprovalStatus::Pending);
        assert!(!IsApproved.is_satisfied_by(&pending));
        assert!(IsApproved.is_satisfied_by(&live_gate()));
    }
}
