//! Admin moderation service

use std::sync::Arc;

use contesthub_common::{AppResult, ContestId, Paginated, Pagination, Role};
use tracing::info;

use crate::gateway::{ContestFilter, ContestsApi, UserAccount, UsersApi};
use crate::models::Contest;
use crate::roles::RoleResolver;

/// Admin operations: contest moderation and user management. Every
/// mutation returns the updated record; the admin views refetch their
/// listings from it.
pub struct AdminService {
    contests: Arc<dyn ContestsApi>,
    users: Arc<dyn UsersApi>,
    resolver: Arc<RoleResolver>,
}

impl AdminService {
    pub fn new(
        contests: Arc<dyn ContestsApi>,
        users: Arc<dyn UsersApi>,
        resolver: Arc<RoleResolver>,
    ) -> Self {
        Self {
            contests,
            users,
            resolver,
        }
    }

    /// Contests awaiting moderation.
    pub async fn moderation_queue(&self, page: Pagination) -> AppResult<Paginated<Contest>> {
        let filter = ContestFilter {
            approval: Some("pending".to_string()),
            ..ContestFilter::default()
        };
        self.contests.list(page, &filter).await
    }

    pub async fn approve_contest(&self, id: ContestId) -> AppResult<Contest> {
        let contest = self.contests.approve(id).await?;
        info!(contest_id = %id, "contest approved");
        Ok(contest)
    }

    pub async fn reject_contest(&self, id: ContestId) -> AppResult<Contest> {
        let contest = self.contests.reject(id).await?;
        info!(contest_id = %id, "contest rejected");
        Ok(contest)
    }

    /// Leave moderation feedback on a contest.
    pub async fn comment_on_contest(&self, id: ContestId, text: &str) -> AppResult<Contest> {
        self.contests.comment(id, text).await
    }

    pub async fn delete_contest(&self, id: ContestId) -> AppResult<()> {
        self.contests.delete(id).await
    }

    pub async fn list_users(&self, page: Pagination) -> AppResult<Paginated<UserAccount>> {
        self.users.list(page).await
    }

    /// Change a user's role. The resolver cache for that user is dropped
    /// so their next role lookup sees the promotion; the affected session
    /// still has to call its refetch hook, as there is no push channel.
    pub async fn set_user_role(&self, uid: &str, role: Role) -> AppResult<UserAccount> {
        let account = self.users.set_role(uid, role).await?;
        self.resolver.invalidate(uid).await;
        info!(uid = %uid, role = %role, "user role changed");
        Ok(account)
    }

    pub async fn delete_user(&self, uid: &str) -> AppResult<()> {
        self.users.delete(uid).await?;
        self.resolver.invalidate(uid).await;
        Ok(())
    }
}
