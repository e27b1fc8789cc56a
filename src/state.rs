//! Client state management
//!
//! The composition root: wires the identity provider, session store, role
//! resolver, gateways and services together, and exposes them as one
//! cheaply cloneable handle for the host UI.

use std::sync::Arc;

use contesthub_common::{AppResult, Role};
use tracing::warn;

use crate::config::Config;
use crate::gateway::{
    ApiClient, HttpContestsGateway, HttpParticipationsGateway, HttpPaymentsGateway,
    HttpUsersGateway, UsersApi,
};
use crate::models::Identity;
use crate::roles::RoleResolver;
use crate::routing::{guard, RouteDecision, RouteTable};
use crate::services::{
    AdminService, ContestService, GradingService, RegistrationService, StatsService,
};
use crate::session::{IdentityProvider, RestIdentityProvider, SessionStore};

/// Shared client state
#[derive(Clone)]
pub struct ClientState {
    inner: Arc<ClientStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct ClientStateInner {
    config: Config,
    session: Arc<SessionStore>,
    roles: Arc<RoleResolver>,
    users: Arc<dyn UsersApi>,
    routes: RouteTable,
    contests: ContestService,
    registration: RegistrationService,
    grading: GradingService,
    admin: AdminService,
    stats: StatsService,
}

impl ClientState {
    /// Wire the full client against the configured backend and identity
    /// provider.
    pub fn new(config: Config) -> AppResult<Self> {
        let provider: Arc<dyn IdentityProvider> =
            Arc::new(RestIdentityProvider::new(&config.identity));
        let client = Arc::new(ApiClient::new(&config.api, provider.clone())?);

        let contests_api = Arc::new(HttpContestsGateway::new(client.clone()));
        let users_api: Arc<dyn UsersApi> = Arc::new(HttpUsersGateway::new(client.clone()));
        let participations_api = Arc::new(HttpParticipationsGateway::new(client.clone()));
        let payments_api = Arc::new(HttpPaymentsGateway::new(client));

        let session = Arc::new(SessionStore::new(provider));
        let roles = Arc::new(RoleResolver::new(users_api.clone(), session.clone()));

        Ok(Self {
            inner: Arc::new(ClientStateInner {
                contests: ContestService::new(contests_api.clone(), participations_api.clone()),
                registration: RegistrationService::new(
                    payments_api,
                    participations_api.clone(),
                ),
                grading: GradingService::new(participations_api.clone()),
                admin: AdminService::new(contests_api, users_api.clone(), roles.clone()),
                stats: StatsService::new(participations_api),
                routes: RouteTable::contesthub(),
                users: users_api,
                session,
                roles,
                config,
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.inner.session
    }

    pub fn roles(&self) -> &Arc<RoleResolver> {
        &self.inner.roles
    }

    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }

    pub fn contests(&self) -> &ContestService {
        &self.inner.contests
    }

    pub fn registration(&self) -> &RegistrationService {
        &self.inner.registration
    }

    pub fn grading(&self) -> &GradingService {
        &self.inner.grading
    }

    pub fn admin(&self) -> &AdminService {
        &self.inner.admin
    }

    pub fn stats(&self) -> &StatsService {
        &self.inner.stats
    }

    /// Role of the current session, `Role::User` when anonymous or
    /// unresolved.
    pub async fn current_role(&self) -> Role {
        match self.inner.session.snapshot().identity() {
            Some(identity) => self.inner.roles.resolve(identity).await,
            None => Role::default(),
        }
    }

    /// Guard one route request against the current session and role.
    ///
    /// The identity is taken from the session snapshot first and the role
    /// resolved for that identity only, preserving the causal order
    /// between identity changes and role lookups.
    pub async fn decide_route(&self, path: &str) -> RouteDecision {
        let session = self.inner.session.snapshot();
        let role = match session.identity() {
            Some(identity) => self.inner.roles.resolve(identity).await,
            None => Role::default(),
        };
        guard(path, self.inner.routes.access_for(path), &session, role)
    }

    /// Sign in and mirror the identity into the backend's user table.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        let identity = self.inner.session.sign_in(email, password).await?;
        self.mirror_profile(&identity).await;
        Ok(identity)
    }

    /// Create an account and mirror the identity into the backend.
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<Identity> {
        let identity = self.inner.session.sign_up(email, password).await?;
        self.mirror_profile(&identity).await;
        Ok(identity)
    }

    /// Sign out and drop every cached role.
    pub async fn sign_out(&self) {
        self.inner.session.sign_out().await;
        self.inner.roles.clear().await;
    }

    async fn mirror_profile(&self, identity: &Identity) {
        if let Err(err) = self.inner.users.upsert_profile(identity).await {
            // The session is valid either way; the backend mirror catches
            // up on the next sign-in.
            warn!(uid = %identity.uid, error = %err, "profile mirror failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, CheckoutConfig, IdentityConfig};

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                base_url: "http://localhost:5000/api/v1".into(),
                request_timeout_secs: 5,
            },
            identity: IdentityConfig {
                endpoint: "https://identity.invalid/v1".into(),
                api_key: "test-key".into(),
            },
            checkout: CheckoutConfig {
                success_path: "/payment/success".into(),
                cancel_path: "/contests".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_routes_pend_until_restored() {
        let state = ClientState::new(test_config()).unwrap();
        // No restoration has run: every route waits, even public ones.
        assert_eq!(
            state.decide_route("/contests").await,
            RouteDecision::Pending
        );
    }

    #[tokio::test]
    async fn test_anonymous_role_is_least_privileged() {
        let state = ClientState::new(test_config()).unwrap();
        assert_eq!(state.current_role().await, Role::User);
    }
}
