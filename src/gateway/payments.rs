//! Payment gateway

use std::sync::Arc;

use async_trait::async_trait;
use contesthub_common::{AppResult, ContestId};

use crate::constants::api_paths;
use crate::gateway::ApiClient;
use crate::models::{CheckoutSession, PaymentConfirmation};

/// Backend operations for the checkout handshake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentsApi: Send + Sync {
    /// Open a hosted checkout session for one contest's entry fee. The
    /// caller redirects the browser to the returned URL.
    async fn create_checkout(&self, contest_id: ContestId) -> AppResult<CheckoutSession>;

    /// Reconcile the session id carried back by the success route against
    /// the participation the payment created.
    async fn confirm(&self, session_id: &str) -> AppResult<PaymentConfirmation>;
}

/// HTTP implementation of [`PaymentsApi`].
pub struct HttpPaymentsGateway {
    client: Arc<ApiClient>,
}

impl HttpPaymentsGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentsApi for HttpPaymentsGateway {
    async fn create_checkout(&self, contest_id: ContestId) -> AppResult<CheckoutSession> {
        let path = format!("{}/checkout", api_paths::PAYMENTS);
        self.client
            .post_json(&path, &serde_json::json!({ "contest_id": contest_id }))
            .await
    }

    async fn confirm(&self, session_id: &str) -> AppResult<PaymentConfirmation> {
        let path = format!("{}/confirm", api_paths::PAYMENTS);
        self.client
            .post_json(&path, &serde_json::json!({ "session_id": session_id }))
            .await
    }
}
