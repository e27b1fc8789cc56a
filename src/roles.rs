//! Role resolution
//!
//! Roles are assigned by the backend and fetched per session; the client
//! never trusts a locally stored role hint. Resolution failures degrade to
//! the least-privileged role, never upward.

use std::collections::HashMap;
use std::sync::Arc;

use contesthub_common::Role;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::gateway::UsersApi;
use crate::models::Identity;
use crate::session::SessionStore;

/// Single writer for the resolved role, cached per identity uid for the
/// lifetime of the session.
pub struct RoleResolver {
    users: Arc<dyn UsersApi>,
    session: Arc<SessionStore>,
    cache: RwLock<HashMap<String, Role>>,
}

impl RoleResolver {
    pub fn new(users: Arc<dyn UsersApi>, session: Arc<SessionStore>) -> Self {
        Self {
            users,
            session,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve the role for an identity.
    ///
    /// Infallible by contract: lookup failures resolve to `Role::User`
    /// with a non-blocking warning. A result that arrives after the
    /// session moved on (sign-out, different identity) is discarded
    /// rather than cached or applied.
    pub async fn resolve(&self, identity: &Identity) -> Role {
        if let Some(role) = self.cache.read().await.get(&identity.uid) {
            return *role;
        }

        let generation = self.session.generation();
        match self.users.role_of(&identity.uid).await {
            Ok(role) => {
                if self.session.generation() != generation {
                    debug!(uid = %identity.uid, "discarding role lookup finished under a stale session");
                    return Role::default();
                }
                self.cache.write().await.insert(identity.uid.clone(), role);
                debug!(uid = %identity.uid, role = %role, "role resolved");
                role
            }
            Err(err) => {
                warn!(
                    uid = %identity.uid,
                    error = %err,
                    "role lookup failed, defaulting to least privilege"
                );
                Role::default()
            }
        }
    }

    /// Drop the cached role and resolve again. Consumers call this after
    /// the backend reports a role change (e.g. an admin promotion); there
    /// is no push channel.
    pub async fn refresh(&self, identity: &Identity) -> Role {
        self.invalidate(&identity.uid).await;
        self.resolve(identity).await
    }

    /// Forget one identity's cached role.
    pub async fn invalidate(&self, uid: &str) {
        self.cache.write().await.remove(uid);
    }

    /// Forget every cached role, as done on sign-out.
    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }
}
