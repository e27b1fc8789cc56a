//! User gateway

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contesthub_common::{AppResult, Paginated, Pagination, Role};
use serde::{Deserialize, Serialize};

use crate::constants::api_paths;
use crate::gateway::ApiClient;
use crate::models::Identity;

/// Backend user record, as listed in the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: Role,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RoleResponse {
    role: Role,
}

/// Backend operations on user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Authoritative role lookup for one identity.
    async fn role_of(&self, uid: &str) -> AppResult<Role>;

    /// Mirror the provider identity into the backend's user table, as done
    /// once after every sign-in/sign-up.
    async fn upsert_profile(&self, identity: &Identity) -> AppResult<UserAccount>;

    async fn list(&self, page: Pagination) -> AppResult<Paginated<UserAccount>>;
    async fn set_role(&self, uid: &str, role: Role) -> AppResult<UserAccount>;
    async fn delete(&self, uid: &str) -> AppResult<()>;
}

/// HTTP implementation of [`UsersApi`].
pub struct HttpUsersGateway {
    client: Arc<ApiClient>,
}

impl HttpUsersGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersApi for HttpUsersGateway {
    async fn role_of(&self, uid: &str) -> AppResult<Role> {
        let path = format!("{}/{}/role", api_paths::USERS, uid);
        let response: RoleResponse = self.client.get_json(&path, &[]).await?;
        Ok(response.role)
    }

    async fn upsert_profile(&self, identity: &Identity) -> AppResult<UserAccount> {
        self.client.post_json(api_paths::USERS, identity).await
    }

    async fn list(&self, page: Pagination) -> AppResult<Paginated<UserAccount>> {
        let query = [
            ("page", page.page.to_string()),
            ("per_page", page.per_page.to_string()),
        ];
        self.client.get_json(api_paths::USERS, &query).await
    }

    async fn set_role(&self, uid: &str, role: Role) -> AppResult<UserAccount> {
        let path = format!("{}/{}/role", api_paths::USERS, uid);
        self.client
            .patch_json(&path, &serde_json::json!({ "role": role }))
            .await
    }

    async fn delete(&self, uid: &str) -> AppResult<()> {
        let path = format!("{}/{}", api_paths::USERS, uid);
        self.client.delete(&path).await
    }
}
