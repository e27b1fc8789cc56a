//! Grading service

use std::sync::Arc;

use chrono::Utc;
use contesthub_common::{AppError, AppResult, GradingStatus, SubmissionGateState};
use tracing::debug;

use crate::gateway::ParticipationsApi;
use crate::models::{Contest, Participation};

/// One participation row in the creator's review table, labeled with the
/// state the UI must render: a still-open window and a no-show look
/// different on purpose.
#[derive(Debug, Clone)]
pub struct SubmissionReviewRow {
    pub participation: Participation,
    pub gate: SubmissionGateState,
}

/// Creator-facing review and grading of contest submissions.
pub struct GradingService {
    participations: Arc<dyn ParticipationsApi>,
}

impl GradingService {
    pub fn new(participations: Arc<dyn ParticipationsApi>) -> Self {
        Self { participations }
    }

    /// All participations for a contest, each labeled with its gate state.
    pub async fn review_rows(&self, contest: &Contest) -> AppResult<Vec<SubmissionReviewRow>> {
        let phase = contest.phase_at(Utc::now());
        let rows = self
            .participations
            .for_contest(contest.id)
            .await?
            .into_iter()
            .map(|participation| SubmissionReviewRow {
                gate: participation.gate_state(phase),
                participation,
            })
            .collect();
        Ok(rows)
    }

    /// Record a verdict for one submission.
    ///
    /// Refused unless the row is `ReadyToGrade`: grading never opens
    /// before the window closes, and a no-show has nothing to grade. The
    /// at-most-one-winner invariant is enforced by the backend; a second
    /// winner attempt surfaces as its `Conflict` response.
    pub async fn grade(
        &self,
        contest: &Contest,
        participation: &Participation,
        verdict: GradingStatus,
    ) -> AppResult<Participation> {
        if verdict == GradingStatus::NotGraded {
            return Err(AppError::Validation(
                "A verdict is required to grade a submission".to_string(),
            ));
        }

        let gate = participation.gate_state(contest.phase_at(Utc::now()));
        if !gate.gradable() {
            let message = match gate {
                SubmissionGateState::NotYetDue | SubmissionGateState::AwaitingSubmission => {
                    "Contest time is not finished yet"
                }
                SubmissionGateState::Closed => "Participant did not submit a task",
                SubmissionGateState::ReadyToGrade => unreachable!("gradable"),
            };
            return Err(AppError::Forbidden(message.to_string()));
        }

        debug!(
            participation_id = %participation.id,
            verdict = ?verdict,
            "recording grade"
        );
        self.participations.grade(participation.id, verdict).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::participations::MockParticipationsApi;
    use crate::test_utils::{sample_contest, sample_participation};
    use chrono::Duration;
    use contesthub_common::TaskSubmissionStatus;

    #[tokio::test]
    async fn test_review_rows_label_states() {
        let now = Utc::now();
        let contest = sample_contest(now - Duration::hours(2), now - Duration::hours(1));

        let submitted =
            sample_participation(TaskSubmissionStatus::Submitted, GradingStatus::NotGraded);
        let no_show = sample_participation(TaskSubmissionStatus::Pending, GradingStatus::NotGraded);

        let mut participations = MockParticipationsApi::new();
        let rows = vec![submitted, no_show];
        participations
            .expect_for_contest()
            .returning(move |_| Ok(rows.clone()));

        let service = GradingService::new(Arc::new(participations));
        let review = service.review_rows(&contest).await.unwrap();

        assert_eq!(review[0].gate, SubmissionGateState::ReadyToGrade);
        // The no-show is labeled as closed, not as "time remaining".
        assert_eq!(review[1].gate, SubmissionGateState::Closed);
    }

    #[tokio::test]
    async fn test_grade_ready_submission() {
        let now = Utc::now();
        let contest = sample_contest(now - Duration::hours(2), now - Duration::hours(1));
        let submitted =
            sample_participation(TaskSubmissionStatus::Submitted, GradingStatus::NotGraded);
        let graded = {
            let mut p = submitted.clone();
            p.grading = GradingStatus::Winner;
            p
        };

        let mut participations = MockParticipationsApi::new();
        participations
            .expect_grade()
            .times(1)
            .returning(move |_, _| Ok(graded.clone()));

        let service = GradingService::new(Arc::new(participations));
        let updated = service
            .grade(&contest, &submitted, GradingStatus::Winner)
            .await
            .unwrap();
        assert!(updated.is_winner());
    }

    #[tokio::test]
    async fn test_grade_refused_while_live() {
        let now = Utc::now();
        let contest = sample_contest(now - Duration::hours(1), now + Duration::hours(1));
        let submitted =
            sample_participation(TaskSubmissionStatus::Submitted, GradingStatus::NotGraded);

        let mut participations = MockParticipationsApi::new();
        participations.expect_grade().times(0);

        let service = GradingService::new(Arc::new(participations));
        let err = service
            .grade(&contest, &submitted, GradingStatus::Average)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(ref m) if m.contains("not finished")));
    }

    #[tokio::test]
    async fn test_grade_refused_for_no_show() {
        let now = Utc::now();
        let contest = sample_contest(now - Duration::hours(2), now - Duration::hours(1));
        let no_show = sample_participation(TaskSubmissionStatus::Pending, GradingStatus::NotGraded);

        let mut participations = MockParticipationsApi::new();
        participations.expect_grade().times(0);

        let service = GradingService::new(Arc::new(participations));
        let err = service
            .grade(&contest, &no_show, GradingStatus::Reject)
            .await
            .unwrap_err();
        // A no-show is reported as such, never as "time remaining".
        assert!(matches!(err, AppError::Forbidden(ref m) if m.contains("did not submit")));
    }

    #[tokio::test]
    async fn test_grade_requires_a_verdict() {
        let now = Utc::now();
        let contest = sample_contest(now - Duration::hours(2), now - Duration::hours(1));
        let submitted =
            sample_participation(TaskSubmissionStatus::Submitted, GradingStatus::NotGraded);

        let service = GradingService::new(Arc::new(MockParticipationsApi::new()));
        let err = service
            .grade(&contest, &submitted, GradingStatus::NotGraded)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
