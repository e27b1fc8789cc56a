//! Contest gateway

use std::sync::Arc;

use async_trait::async_trait;
use contesthub_common::{AppResult, ContestId, Paginated, Pagination};
use serde::Serialize;

use crate::constants::api_paths;
use crate::gateway::ApiClient;
use crate::models::{Contest, ContestUpdate, NewContest};

/// Optional narrowing for contest listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContestFilter {
    pub contest_type: Option<String>,
    pub search: Option<String>,
    /// Admins pass `pending` here to see the moderation queue
    pub approval: Option<String>,
}

/// Backend operations on contest records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContestsApi: Send + Sync {
    async fn list(&self, page: Pagination, filter: &ContestFilter)
        -> AppResult<Paginated<Contest>>;
    async fn find(&self, id: ContestId) -> AppResult<Contest>;
    async fn popular(&self, limit: u32) -> AppResult<Vec<Contest>>;
    async fn by_creator(&self, creator_uid: &str) -> AppResult<Vec<Contest>>;
    async fn create(&self, draft: &NewContest) -> AppResult<Contest>;
    async fn update(&self, id: ContestId, update: &ContestUpdate) -> AppResult<Contest>;
    async fn delete(&self, id: ContestId) -> AppResult<()>;
    async fn approve(&self, id: ContestId) -> AppResult<Contest>;
    async fn reject(&self, id: ContestId) -> AppResult<Contest>;
    async fn comment(&self, id: ContestId, text: &str) -> AppResult<Contest>;
}

/// HTTP implementation of [`ContestsApi`].
pub struct HttpContestsGateway {
    client: Arc<ApiClient>,
}

impl HttpContestsGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn item_path(id: ContestId) -> String {
        format!("{}/{}", api_paths::CONTESTS, id)
    }
}

#[async_trait]
impl ContestsApi for HttpContestsGateway {
    async fn list(
        &self,
        page: Pagination,
        filter: &ContestFilter,
    ) -> AppResult<Paginated<Contest>> {
        let mut query = vec![
            ("page", page.page.to_string()),
            ("per_page", page.per_page.to_string()),
        ];
        if let Some(contest_type) = &filter.contest_type {
            query.push(("type", contest_type.clone()));
        }
        if let Some(search) = &filter.search {
            query.push(("search", search.clone()));
        }
        if let Some(approval) = &filter.approval {
            query.push(("approval", approval.clone()));
        }
        self.client.get_json(api_paths::CONTESTS, &query).await
    }

    async fn find(&self, id: ContestId) -> AppResult<Contest> {
        self.client.get_json(&Self::item_path(id), &[]).await
    }

    async fn popular(&self, limit: u32) -> AppResult<Vec<Contest>> {
        let path = format!("{}/popular", api_paths::CONTESTS);
        self.client
            .get_json(&path, &[("limit", limit.to_string())])
            .await
    }

    async fn by_creator(&self, creator_uid: &str) -> AppResult<Vec<Contest>> {
        let path = format!("{}/creator/{}", api_paths::CONTESTS, creator_uid);
        self.client.get_json(&path, &[]).await
    }

    async fn create(&self, draft: &NewContest) -> AppResult<Contest> {
        self.client.post_json(api_paths::CONTESTS, draft).await
    }

    async fn update(&self, id: ContestId, update: &ContestUpdate) -> AppResult<Contest> {
        self.client.patch_json(&Self::item_path(id), update).await
    }

    async fn delete(&self, id: ContestId) -> AppResult<()> {
        self.client.delete(&Self::item_path(id)).await
    }

    async fn approve(&self, id: ContestId) -> AppResult<Contest> {
        let path = format!("{}/approve", Self::item_path(id));
        self.client.patch_json(&path, &serde_json::json!({})).await
    }

    async fn reject(&self, id: ContestId) -> AppResult<Contest> {
        let path = format!("{}/reject", Self::item_path(id));
        self.client.patch_json(&path, &serde_json::json!({})).await
    }

    async fn comment(&self, id: ContestId, text: &str) -> AppResult<Contest> {
        let path = format!("{}/comment", Self::item_path(id));
        self.client
            .patch_json(&path, &serde_json::json!({ "comment": text }))
            .await
    }
}
