//! Contest model

use chrono::{DateTime, Utc};
use contesthub_common::{ApprovalStatus, ContestId, ContestPhase};
use contesthub_rules::context::ContestGateContext;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_CONTEST_DESCRIPTION_LENGTH, MAX_CONTEST_NAME_LENGTH, MAX_TASK_INSTRUCTION_LENGTH};
use crate::lifecycle;
use crate::models::Participation;

/// Contest record as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    pub id: ContestId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub contest_type: String,
    pub task_instruction: Option<String>,
    /// Entry fee in the smallest currency unit
    pub entry_price: i64,
    /// Prize pool in the smallest currency unit
    pub prize_money: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub approval: ApprovalStatus,
    pub admin_comment: Option<String>,
    pub creator: CreatorSummary,
    #[serde(default)]
    pub participant_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Contest {
    /// Temporal phase of the contest window at `now`.
    pub fn phase_at(&self, now: DateTime<Utc>) -> ContestPhase {
        lifecycle::classify(self.start_date, self.end_date, now)
    }

    /// Temporal phase at the current instant.
    pub fn phase(&self) -> ContestPhase {
        self.phase_at(Utc::now())
    }

    /// Only accepted contests are browsable outside moderation views.
    pub fn is_publicly_visible(&self) -> bool {
        self.approval == ApprovalStatus::Accepted
    }

    /// Build the rule-evaluation context for one viewer of this contest.
    ///
    /// `participation` is the viewer's own record, if any; `viewer_uid`
    /// identifies ownership for creator-facing gates.
    pub fn gate_for(
        &self,
        participation: Option<&Participation>,
        viewer_uid: Option<&str>,
        now: DateTime<Utc>,
    ) -> ContestGateContext {
        ContestGateContext::spectator(self.phase_at(now), self.approval)
            .with_paid(participation.is_some_and(|p| p.has_paid()))
            .with_submitted(participation.is_some_and(|p| p.has_submitted()))
            .with_owner(viewer_uid.is_some_and(|uid| uid == self.creator.uid))
    }
}

/// Creator fields embedded in a contest record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorSummary {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Payload for publishing a new contest.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewContest {
    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_CONTEST_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub image_url: Option<String>,

    #[validate(length(min = 1))]
    pub contest_type: String,

    #[validate(length(max = MAX_TASK_INSTRUCTION_LENGTH))]
    pub task_instruction: Option<String>,

    #[validate(range(min = 0))]
    pub entry_price: i64,

    #[validate(range(min = 0))]
    pub prize_money: i64,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl NewContest {
    /// Field derives cannot compare two fields; the window check lives here.
    pub fn validate_window(&self) -> Result<(), &'static str> {
        if self.end_date < self.start_date {
            return Err("Contest end date must not precede its start date");
        }
        Ok(())
    }
}

/// Partial update for a contest the creator still owns.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ContestUpdate {
    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_CONTEST_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub image_url: Option<String>,
    pub contest_type: Option<String>,

    #[validate(length(max = MAX_TASK_INSTRUCTION_LENGTH))]
    pub task_instruction: Option<String>,

    #[validate(range(min = 0))]
    pub entry_price: Option<i64>,

    #[validate(range(min = 0))]
    pub prize_money: Option<i64>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_contest;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_phase_at() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap();
        let contest = sample_contest(start, end);

        assert_eq!(
            contest.phase_at(start - Duration::seconds(1)),
            ContestPhase::Upcoming
        );
        assert_eq!(contest.phase_at(start), ContestPhase::Live);
        assert_eq!(contest.phase_at(end), ContestPhase::Live);
        assert_eq!(
            contest.phase_at(end + Duration::seconds(1)),
            ContestPhase::Ended
        );
    }

    #[test]
    fn test_gate_for_owner() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap();
        let contest = sample_contest(start, end);

        let gate = contest.gate_for(None, Some("creator-1"), start);
        assert!(gate.is_owner);
        assert!(!gate.has_paid);

        let gate = contest.gate_for(None, Some("someone-else"), start);
        assert!(!gate.is_owner);
    }

    #[test]
    fn test_window_validation() {
        let start = Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap();
        let draft = NewContest {
            name: "Backwards".into(),
            description: None,
            image_url: None,
            contest_type: "article-writing".into(),
            task_instruction: None,
            entry_price: 0,
            prize_money: 0,
            start_date: start,
            end_date: start - Duration::days(1),
        };
        assert!(draft.validate_window().is_err());
    }
}
