//! Session store
//!
//! Single writer for the identity shared across the client. Consumers get
//! read-only snapshots or a watch subscription; nothing outside this module
//! mutates session state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use contesthub_common::AppResult;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::models::Identity;
use crate::session::IdentityProvider;
use crate::utils::validation::validate_credentials;

/// Session state machine: `Loading -> {Authenticated, Anonymous}`,
/// `Anonymous <-> Authenticated` via sign-in/sign-out.
///
/// While `Loading`, privileged UI renders a neutral waiting state; the
/// guard never decides permission against an unrestored session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Provider restoration has not completed yet
    Loading,
    Anonymous,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Owns the current identity and the operations that change it.
pub struct SessionStore {
    provider: Arc<dyn IdentityProvider>,
    state: watch::Sender<SessionState>,
    /// Bumped on every transition; in-flight lookups tagged with an older
    /// generation discard their result on receipt.
    generation: AtomicU64,
    restored: AtomicBool,
}

impl SessionStore {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            provider,
            state,
            generation: AtomicU64::new(0),
            restored: AtomicBool::new(false),
        }
    }

    /// Current state as a read-only snapshot.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribe to session transitions. The first restoration produces
    /// exactly one event; repeated `restore` calls do not re-notify.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Generation of the current session state.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Ask the provider whether a previous session survives, settling the
    /// state machine out of `Loading`. Idempotent: only the first call
    /// performs the lookup and emits the restoration event.
    pub async fn restore(&self) -> AppResult<SessionState> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(self.snapshot());
        }

        match self.provider.restore_session().await {
            Ok(Some(identity)) => {
                debug!(uid = %identity.uid, "session restored");
                self.transition(SessionState::Authenticated(identity));
                Ok(self.snapshot())
            }
            Ok(None) => {
                self.transition(SessionState::Anonymous);
                Ok(self.snapshot())
            }
            Err(err) => {
                warn!(error = %err, "session restoration failed, treating as anonymous");
                self.transition(SessionState::Anonymous);
                Err(err)
            }
        }
    }

    /// Create an account and sign the new identity in.
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<Identity> {
        validate_credentials(email, password)?;
        let identity = self.provider.create_account(email, password).await?;
        self.restored.store(true, Ordering::SeqCst);
        self.transition(SessionState::Authenticated(identity.clone()));
        Ok(identity)
    }

    /// Sign in with existing credentials.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        validate_credentials(email, password)?;
        let identity = self.provider.sign_in(email, password).await?;
        self.restored.store(true, Ordering::SeqCst);
        self.transition(SessionState::Authenticated(identity.clone()));
        Ok(identity)
    }

    /// Sign out. Local state is cleared first and unconditionally; a
    /// provider failure never leaves a stale authenticated session behind.
    pub async fn sign_out(&self) {
        self.restored.store(true, Ordering::SeqCst);
        self.transition(SessionState::Anonymous);
        if let Err(err) = self.provider.sign_out().await {
            warn!(error = %err, "provider sign-out failed; local session already cleared");
        }
    }

    fn transition(&self, next: SessionState) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(next);
    }
}
