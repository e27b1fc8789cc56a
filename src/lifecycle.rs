//! Contest lifecycle classification and derived action permissions.
//!
//! `classify` is the single source of truth for a contest's temporal state;
//! everything a view needs to enable or disable is derived from it plus the
//! viewer's participation snapshot, via rules from `contesthub_rules`.

use chrono::{DateTime, Utc};
use contesthub_common::ContestPhase;
use contesthub_rules::prelude::*;
use serde::{Deserialize, Serialize};

/// Classify a contest window against `now`.
///
/// The window is a closed interval: both boundary instants are `Live`.
pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> ContestPhase {
    if now < start {
        ContestPhase::Upcoming
    } else if now <= end {
        ContestPhase::Live
    } else {
        ContestPhase::Ended
    }
}

/// Registration stays open until the window closes, once per viewer.
pub fn can_register(gate: &ContestGateContext) -> bool {
    let rule = !Spec(PhaseIs(ContestPhase::Ended)) & !Spec(HasPaidEntry);
    rule.is_satisfied_by(gate)
}

/// Tasks are only accepted inside the window, from paid entrants.
pub fn can_submit_task(gate: &ContestGateContext) -> bool {
    let rule = Spec(PhaseIs(ContestPhase::Live)) & Spec(HasPaidEntry);
    rule.is_satisfied_by(gate)
}

/// Grading opens after the window closes, and only for entries with a
/// submission on file. No-shows never become gradable.
pub fn can_grade(gate: &ContestGateContext) -> bool {
    let rule = Spec(PhaseIs(ContestPhase::Ended)) & Spec(HasSubmittedTask);
    rule.is_satisfied_by(gate)
}

/// Everything a contest view needs to enable or disable for one viewer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewerPermissions {
    pub can_register: bool,
    pub can_submit_task: bool,
    pub can_grade: bool,
}

impl ViewerPermissions {
    pub fn derive(gate: &ContestGateContext) -> Self {
        Self {
            can_register: can_register(gate),
            can_submit_task: can_submit_task(gate),
            can_grade: can_grade(gate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use contesthub_common::ApprovalStatus;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap(),
        )
    }

    fn gate(phase: ContestPhase) -> ContestGateContext {
        ContestGateContext::spectator(phase, ApprovalStatus::Accepted)
    }

    #[test]
    fn test_classify_is_exhaustive_and_disjoint() {
        let (start, end) = window();
        let probes = [
            start - Duration::days(30),
            start - Duration::seconds(1),
            start,
            start + Duration::seconds(1),
            end - Duration::seconds(1),
            end,
            end + Duration::seconds(1),
            end + Duration::days(365),
        ];

        for now in probes {
            let phase = classify(start, end, now);
            // Exactly one predicate holds for every instant.
            let upcoming = now < start;
            let live = now >= start && now <= end;
            let ended = now > end;
            assert_eq!(
                [upcoming, live, ended].iter().filter(|&&p| p).count(),
                1,
                "predicates overlap at {now}"
            );
            match phase {
                ContestPhase::Upcoming => assert!(upcoming),
                ContestPhase::Live => assert!(live),
                ContestPhase::Ended => assert!(ended),
            }
        }
    }

    #[test]
    fn test_classify_boundaries_are_live() {
        let (start, end) = window();
        assert_eq!(classify(start, end, start), ContestPhase::Live);
        assert_eq!(classify(start, end, end), ContestPhase::Live);
    }

    #[test]
    fn test_zero_length_window() {
        let (start, _) = window();
        // start == end: the single boundary instant is Live.
        assert_eq!(classify(start, start, start), ContestPhase::Live);
        assert_eq!(
            classify(start, start, start - Duration::seconds(1)),
            ContestPhase::Upcoming
        );
        assert_eq!(
            classify(start, start, start + Duration::seconds(1)),
            ContestPhase::Ended
        );
    }

    #[test]
    fn test_can_register() {
        assert!(can_register(&gate(ContestPhase::Upcoming)));
        assert!(can_register(&gate(ContestPhase::Live)));
        assert!(!can_register(&gate(ContestPhase::Ended)));

        // A paid entry closes registration regardless of phase.
        assert!(!can_register(&gate(ContestPhase::Live).with_paid(true)));
        assert!(!can_register(&gate(ContestPhase::Upcoming).with_paid(true)));
    }

    #[test]
    fn test_can_submit_task() {
        assert!(can_submit_task(&gate(ContestPhase::Live).with_paid(true)));
        assert!(!can_submit_task(&gate(ContestPhase::Live)));
        assert!(!can_submit_task(&gate(ContestPhase::Upcoming).with_paid(true)));
        assert!(!can_submit_task(&gate(ContestPhase::Ended).with_paid(true)));
    }

    #[test]
    fn test_can_grade_only_after_close_with_submission() {
        for phase in [
            ContestPhase::Upcoming,
            ContestPhase::Live,
            ContestPhase::Ended,
        ] {
            for submitted in [false, true] {
                let g = gate(phase).with_paid(true).with_submitted(submitted);
                let expected = phase == ContestPhase::Ended && submitted;
                assert_eq!(can_grade(&g), expected, "phase={phase:?} submitted={submitted}");
            }
        }
    }

    #[test]
    fn test_viewer_permissions_bundle() {
        let p = ViewerPermissions::derive(&gate(ContestPhase::Live).with_paid(true));
        assert!(!p.can_register);
        assert!(p.can_submit_task);
        assert!(!p.can_grade);
    }
}
