//! Participant statistics service

use std::sync::Arc;

use contesthub_common::AppResult;

use crate::constants::RECENT_WINNER_LIMIT;
use crate::gateway::ParticipationsApi;
use crate::models::{Participation, ParticipationStats};

/// Profile numbers: win/loss breakdown and winning entries. Rendering
/// (charts, badges) is the host UI's business.
pub struct StatsService {
    participations: Arc<dyn ParticipationsApi>,
}

impl StatsService {
    pub fn new(participations: Arc<dyn ParticipationsApi>) -> Self {
        Self { participations }
    }

    /// Aggregate win/loss counters for one user's profile chart.
    pub async fn win_breakdown(&self, user_uid: &str) -> AppResult<ParticipationStats> {
        self.participations.stats(user_uid).await
    }

    /// The user's winning entries, for the "my winnings" view.
    pub async fn winnings(&self, user_uid: &str) -> AppResult<Vec<Participation>> {
        let mine = self.participations.mine(user_uid).await?;
        Ok(mine.into_iter().filter(|p| p.is_winner()).collect())
    }

    /// Recently declared winners advertised on the landing page.
    pub async fn recent_winners(&self) -> AppResult<Vec<Participation>> {
        self.participations.winners(RECENT_WINNER_LIMIT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::participations::MockParticipationsApi;
    use crate::test_utils::sample_participation;
    use contesthub_common::{GradingStatus, TaskSubmissionStatus};

    #[tokio::test]
    async fn test_winnings_filters_to_winners() {
        let winner = sample_participation(TaskSubmissionStatus::Submitted, GradingStatus::Winner);
        let average = sample_participation(TaskSubmissionStatus::Submitted, GradingStatus::Average);
        let ungraded =
            sample_participation(TaskSubmissionStatus::Submitted, GradingStatus::NotGraded);

        let mut participations = MockParticipationsApi::new();
        let all = vec![winner.clone(), average, ungraded];
        participations
            .expect_mine()
            .returning(move |_| Ok(all.clone()));

        let service = StatsService::new(Arc::new(participations));
        let winnings = service.winnings("user-1").await.unwrap();
        assert_eq!(winnings.len(), 1);
        assert_eq!(winnings[0].id, winner.id);
    }

    #[tokio::test]
    async fn test_win_breakdown_passthrough() {
        let mut participations = MockParticipationsApi::new();
        participations
            .expect_stats()
            .returning(|_| Ok(ParticipationStats { total: 8, wins: 2 }));

        let service = StatsService::new(Arc::new(participations));
        let stats = service.win_breakdown("user-1").await.unwrap();
        assert_eq!(stats.win_rate(), 25.0);
    }
}
