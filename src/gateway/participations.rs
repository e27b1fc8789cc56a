//! Participation gateway

use std::sync::Arc;

use async_trait::async_trait;
use contesthub_common::{AppResult, ContestId, GradingStatus, ParticipationId};

use crate::constants::api_paths;
use crate::gateway::ApiClient;
use crate::models::{Participation, ParticipationStats};

/// Backend operations on participation records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipationsApi: Send + Sync {
    /// All participations belonging to one user.
    async fn mine(&self, user_uid: &str) -> AppResult<Vec<Participation>>;

    /// All participations registered for one contest.
    async fn for_contest(&self, contest_id: ContestId) -> AppResult<Vec<Participation>>;

    /// Hand in the task for a paid participation.
    async fn submit_task(&self, id: ParticipationId, task: &str) -> AppResult<Participation>;

    /// Record the creator's verdict for a submitted task.
    async fn grade(&self, id: ParticipationId, verdict: GradingStatus)
        -> AppResult<Participation>;

    /// Recently declared winners, for the public winner strip.
    async fn winners(&self, limit: u32) -> AppResult<Vec<Participation>>;

    /// Aggregate win/loss counters for one user.
    async fn stats(&self, user_uid: &str) -> AppResult<ParticipationStats>;
}

/// HTTP implementation of [`ParticipationsApi`].
pub struct HttpParticipationsGateway {
    client: Arc<ApiClient>,
}

impl HttpParticipationsGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParticipationsApi for HttpParticipationsGateway {
    async fn mine(&self, user_uid: &str) -> AppResult<Vec<Participation>> {
        let path = format!("{}/user/{}", api_paths::PARTICIPATIONS, user_uid);
        self.client.get_json(&path, &[]).await
    }

    async fn for_contest(&self, contest_id: ContestId) -> AppResult<Vec<Participation>> {
        let path = format!("{}/contest/{}", api_paths::PARTICIPATIONS, contest_id);
        self.client.get_json(&path, &[]).await
    }

    async fn submit_task(&self, id: ParticipationId, task: &str) -> AppResult<Participation> {
        let path = format!("{}/{}/task", api_paths::PARTICIPATIONS, id);
        self.client
            .patch_json(&path, &serde_json::json!({ "submitted_task": task }))
            .await
    }

    async fn grade(
        &self,
        id: ParticipationId,
        verdict: GradingStatus,
    ) -> AppResult<Participation> {
        let path = format!("{}/{}/grade", api_paths::PARTICIPATIONS, id);
        self.client
            .patch_json(&path, &serde_json::json!({ "grading": verdict }))
            .await
    }

    async fn winners(&self, limit: u32) -> AppResult<Vec<Participation>> {
        let path = format!("{}/winners", api_paths::PARTICIPATIONS);
        self.client
            .get_json(&path, &[("limit", limit.to_string())])
            .await
    }

    async fn stats(&self, user_uid: &str) -> AppResult<ParticipationStats> {
        let path = format!("{}/user/{}/stats", api_paths::PARTICIPATIONS, user_uid);
        self.client.get_json(&path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contesthub_common::TaskSubmissionStatus;

    #[test]
    fn test_participation_wire_decoding() {
        let json = r#"{
            "id": "0b0e8a3c-2f64-4a0a-8c59-94d9d52e6f11",
            "contest_id": "7f1f84e4-9c2b-4a57-9e2e-3a7f0a1b2c3d",
            "user_uid": "u1",
            "user_email": "jane@example.com",
            "paid_amount": 500,
            "transaction_id": "txn_99",
            "task_submission": "submitted",
            "submitted_task": "https://example.com/entry.pdf",
            "grading": "Winner",
            "registered_at": "2024-06-02T10:00:00Z"
        }"#;
        let participation: Participation = serde_json::from_str(json).unwrap();
        assert!(participation.has_paid());
        assert_eq!(
            participation.task_submission,
            TaskSubmissionStatus::Submitted
        );
        assert!(participation.is_winner());
    }

    #[test]
    fn test_defaults_for_fresh_registration() {
        let json = r#"{
            "id": "0b0e8a3c-2f64-4a0a-8c59-94d9d52e6f11",
            "contest_id": "7f1f84e4-9c2b-4a57-9e2e-3a7f0a1b2c3d",
            "user_uid": "u1",
            "user_email": "jane@example.com",
            "paid_amount": 500,
            "transaction_id": null,
            "submitted_task": null,
            "registered_at": "2024-06-02T10:00:00Z"
        }"#;
        let participation: Participation = serde_json::from_str(json).unwrap();
        assert_eq!(participation.task_submission, TaskSubmissionStatus::Pending);
        assert!(!participation.is_winner());
    }
}
