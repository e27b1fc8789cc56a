//! Contest browsing service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use contesthub_common::{AppError, AppResult, ContestId, ContestPhase, Paginated, Pagination};

use crate::constants::POPULAR_CONTEST_LIMIT;
use crate::gateway::{ContestFilter, ContestsApi, ParticipationsApi};
use crate::lifecycle::ViewerPermissions;
use crate::models::{Contest, ContestUpdate, Identity, NewContest, Participation};
use crate::utils::time::countdown_label;
use crate::utils::validation::check;

/// One contest prepared for rendering: the record plus everything derived
/// from the clock and the viewer's participation.
#[derive(Debug, Clone)]
pub struct ContestView {
    pub contest: Contest,
    pub phase: ContestPhase,
    pub countdown: String,
    pub permissions: ViewerPermissions,
    /// The viewer's own participation, when one exists
    pub participation: Option<Participation>,
}

/// Assembles contest views for the browse, popular and detail screens.
pub struct ContestService {
    contests: Arc<dyn ContestsApi>,
    participations: Arc<dyn ParticipationsApi>,
}

impl ContestService {
    pub fn new(
        contests: Arc<dyn ContestsApi>,
        participations: Arc<dyn ParticipationsApi>,
    ) -> Self {
        Self {
            contests,
            participations,
        }
    }

    /// Paginated contest listing for anonymous browsing.
    pub async fn browse(
        &self,
        page: Pagination,
        filter: &ContestFilter,
    ) -> AppResult<Paginated<ContestView>> {
        let listing = self.contests.list(page, filter).await?;
        let now = Utc::now();

        Ok(Paginated {
            data: listing
                .data
                .into_iter()
                .map(|contest| Self::to_view(contest, None, None, now))
                .collect(),
            page: listing.page,
            per_page: listing.per_page,
            total: listing.total,
            total_pages: listing.total_pages,
        })
    }

    /// Most-registered contests for the landing strip.
    pub async fn popular(&self) -> AppResult<Vec<ContestView>> {
        let contests = self.contests.popular(POPULAR_CONTEST_LIMIT).await?;
        let now = Utc::now();
        Ok(contests
            .into_iter()
            .map(|contest| Self::to_view(contest, None, None, now))
            .collect())
    }

    /// Contest detail with the viewer's own permissions resolved.
    pub async fn detail(&self, id: ContestId, viewer: Option<&Identity>) -> AppResult<ContestView> {
        let (contest, mine) = match viewer {
            Some(identity) => {
                futures::future::try_join(
                    self.contests.find(id),
                    self.participations.mine(&identity.uid),
                )
                .await?
            }
            None => (self.contests.find(id).await?, Vec::new()),
        };
        let participation = mine.into_iter().find(|p| p.contest_id == contest.id);

        Ok(Self::to_view(
            contest,
            participation,
            viewer.map(|v| v.uid.as_str()),
            Utc::now(),
        ))
    }

    /// Contests published by one creator, for the creator dashboard.
    pub async fn created_by(&self, creator: &Identity) -> AppResult<Vec<ContestView>> {
        let contests = self.contests.by_creator(&creator.uid).await?;
        let now = Utc::now();
        Ok(contests
            .into_iter()
            .map(|contest| Self::to_view(contest, None, Some(&creator.uid), now))
            .collect())
    }

    /// Publish a new contest. It enters the moderation queue as pending.
    pub async fn publish(&self, draft: &NewContest) -> AppResult<Contest> {
        check(draft)?;
        draft
            .validate_window()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.contests.create(draft).await
    }

    /// Update a contest the creator still owns.
    pub async fn update(&self, id: ContestId, update: &ContestUpdate) -> AppResult<Contest> {
        check(update)?;
        self.contests.update(id, update).await
    }

    /// Withdraw a contest from the platform.
    pub async fn withdraw(&self, id: ContestId) -> AppResult<()> {
        self.contests.delete(id).await
    }

    fn to_view(
        contest: Contest,
        participation: Option<Participation>,
        viewer_uid: Option<&str>,
        now: DateTime<Utc>,
    ) -> ContestView {
        let phase = contest.phase_at(now);
        let gate = contest.gate_for(participation.as_ref(), viewer_uid, now);
        ContestView {
            countdown: countdown_label(phase, contest.start_date, contest.end_date, now),
            permissions: ViewerPermissions::derive(&gate),
            phase,
            contest,
            participation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::contests::MockContestsApi;
    use crate::gateway::participations::MockParticipationsApi;
    use crate::test_utils::{sample_contest, sample_identity, sample_participation};
    use chrono::Duration;
    use contesthub_common::{GradingStatus, TaskSubmissionStatus};

    fn viewer() -> Identity {
        sample_identity("user-1")
    }

    #[tokio::test]
    async fn test_detail_without_participation_can_register() {
        let now = Utc::now();
        let contest = sample_contest(now - Duration::hours(1), now + Duration::hours(1));
        let id = contest.id;

        let mut contests = MockContestsApi::new();
        contests
            .expect_find()
            .returning(move |_| Ok(contest.clone()));
        let mut participations = MockParticipationsApi::new();
        participations.expect_mine().returning(|_| Ok(vec![]));

        let service = ContestService::new(Arc::new(contests), Arc::new(participations));
        let view = service.detail(id, Some(&viewer())).await.unwrap();

        assert_eq!(view.phase, ContestPhase::Live);
        assert!(view.permissions.can_register);
        assert!(!view.permissions.can_submit_task);
        assert!(view.participation.is_none());
    }

    #[tokio::test]
    async fn test_detail_with_paid_participation() {
        let now = Utc::now();
        let contest = sample_contest(now - Duration::hours(1), now + Duration::hours(1));
        let id = contest.id;

        let mut participation =
            sample_participation(TaskSubmissionStatus::Pending, GradingStatus::NotGraded);
        participation.contest_id = id;

        let mut contests = MockContestsApi::new();
        contests
            .expect_find()
            .returning(move |_| Ok(contest.clone()));
        let mut participations = MockParticipationsApi::new();
        participations
            .expect_mine()
            .returning(move |_| Ok(vec![participation.clone()]));

        let service = ContestService::new(Arc::new(contests), Arc::new(participations));
        let view = service.detail(id, Some(&viewer())).await.unwrap();

        // Already paid: registration closes, submission opens.
        assert!(!view.permissions.can_register);
        assert!(view.permissions.can_submit_task);
        assert!(view.participation.is_some());
    }

    #[tokio::test]
    async fn test_publish_rejects_inverted_window() {
        let now = Utc::now();
        let draft = NewContest {
            name: "Backwards".into(),
            description: None,
            image_url: None,
            contest_type: "article-writing".into(),
            task_instruction: None,
            entry_price: 500,
            prize_money: 1000,
            start_date: now + Duration::days(2),
            end_date: now + Duration::days(1),
        };

        let mut contests = MockContestsApi::new();
        contests.expect_create().times(0);

        let service =
            ContestService::new(Arc::new(contests), Arc::new(MockParticipationsApi::new()));
        let err = service.publish(&draft).await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_anonymous_detail_skips_participation_lookup() {
        let now = Utc::now();
        let contest = sample_contest(now + Duration::hours(1), now + Duration::hours(2));
        let id = contest.id;

        let mut contests = MockContestsApi::new();
        contests
            .expect_find()
            .returning(move |_| Ok(contest.clone()));
        let mut participations = MockParticipationsApi::new();
        participations.expect_mine().times(0);

        let service = ContestService::new(Arc::new(contests), Arc::new(participations));
        let view = service.detail(id, None).await.unwrap();
        assert_eq!(view.phase, ContestPhase::Upcoming);
        assert!(view.countdown.starts_with("Starts in"));
    }
}
