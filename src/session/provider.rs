//! Identity provider client
//!
//! The provider owns accounts and credentials; the client only caches the
//! resulting identity. `RestIdentityProvider` speaks the provider's token
//! REST endpoints; everything else in the crate depends on the trait.

use async_trait::async_trait;
use contesthub_common::{AppError, AppResult};
use serde::Deserialize;
use std::sync::RwLock;
use tracing::debug;

use crate::config::IdentityConfig;
use crate::models::Identity;

/// External identity provider operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account; fails with `AppError::Auth` on duplicates or
    /// weak credentials.
    async fn create_account(&self, email: &str, password: &str) -> AppResult<Identity>;

    /// Sign in with email/password; fails with `AppError::Auth` on bad
    /// credentials.
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity>;

    /// End the provider-side session. Local state is cleared by the
    /// caller regardless of the outcome.
    async fn sign_out(&self) -> AppResult<()>;

    /// Re-establish the session from provider-held state, if any.
    async fn restore_session(&self) -> AppResult<Option<Identity>>;

    /// Token to attach as `Authorization: Bearer` on backend calls.
    fn bearer_token(&self) -> Option<String>;
}

/// Provider-held session material.
#[derive(Debug, Clone)]
struct ProviderSession {
    id_token: String,
    identity: Identity,
}

/// REST implementation against a Firebase-style identity toolkit endpoint.
pub struct RestIdentityProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    session: RwLock<Option<ProviderSession>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    id_token: String,
    email: String,
    display_name: Option<String>,
    profile_picture: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: String,
    display_name: Option<String>,
    photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetails {
    message: String,
}

impl RestIdentityProvider {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            session: RwLock::new(None),
        }
    }

    fn url(&self, action: &str) -> String {
        format!("{}/accounts:{}?key={}", self.endpoint, action, self.api_key)
    }

    async fn token_request(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> AppResult<TokenResponse> {
        let response = self
            .http
            .post(self.url(action))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Identity provider unreachable: {e}")))?;

        if !response.status().is_success() {
            let message = Self::extract_error_message(response).await;
            return Err(AppError::Auth(message));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| AppError::Serialization(e.to_string()))
    }

    async fn extract_error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ProviderErrorBody>().await {
            Ok(body) => friendly_auth_message(&body.error.message),
            Err(_) => format!("Identity provider error ({status})"),
        }
    }

    fn store_session(&self, token: TokenResponse) -> Identity {
        let identity = Identity {
            uid: token.local_id,
            email: token.email,
            display_name: token.display_name,
            photo_url: token.profile_picture,
        };
        *self.session.write().expect("session lock poisoned") = Some(ProviderSession {
            id_token: token.id_token,
            identity: identity.clone(),
        });
        identity
    }

    fn clear_session(&self) {
        *self.session.write().expect("session lock poisoned") = None;
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<Identity> {
        let token = self
            .token_request(
                "signUp",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        debug!(uid = %token.local_id, "account created");
        Ok(self.store_session(token))
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        let token = self
            .token_request(
                "signInWithPassword",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        debug!(uid = %token.local_id, "signed in");
        Ok(self.store_session(token))
    }

    async fn sign_out(&self) -> AppResult<()> {
        self.clear_session();
        Ok(())
    }

    async fn restore_session(&self) -> AppResult<Option<Identity>> {
        let id_token = {
            let guard = self.session.read().expect("session lock poisoned");
            match guard.as_ref() {
                Some(session) => session.id_token.clone(),
                None => return Ok(None),
            }
        };

        let response = self
            .http
            .post(self.url("lookup"))
            .json(&serde_json::json!({ "idToken": id_token }))
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Identity provider unreachable: {e}")))?;

        if !response.status().is_success() {
            // Token no longer honored by the provider.
            self.clear_session();
            let message = Self::extract_error_message(response).await;
            return Err(AppError::Auth(message));
        }

        let lookup = response
            .json::<LookupResponse>()
            .await
            .map_err(|e| AppError::Serialization(e.to_string()))?;

        match lookup.users.into_iter().next() {
            Some(user) => {
                let identity = Identity {
                    uid: user.local_id,
                    email: user.email,
                    display_name: user.display_name,
                    photo_url: user.photo_url,
                };
                let mut guard = self.session.write().expect("session lock poisoned");
                if let Some(session) = guard.as_mut() {
                    session.identity = identity.clone();
                }
                Ok(Some(identity))
            }
            None => {
                self.clear_session();
                Ok(None)
            }
        }
    }

    fn bearer_token(&self) -> Option<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.id_token.clone())
    }
}

/// Map provider error codes to messages fit for a notification toast.
fn friendly_auth_message(code: &str) -> String {
    match code {
        "EMAIL_EXISTS" => "An account with this email already exists".to_string(),
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password".to_string()
        }
        "USER_DISABLED" => "This account has been disabled".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many attempts, please try again later".to_string()
        }
        other if other.starts_with("WEAK_PASSWORD") => {
            "Password does not meet the minimum requirements".to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_messages() {
        assert_eq!(
            friendly_auth_message("EMAIL_EXISTS"),
            "An account with this email already exists"
        );
        assert_eq!(
            friendly_auth_message("INVALID_LOGIN_CREDENTIALS"),
            "Invalid email or password"
        );
        assert_eq!(
            friendly_auth_message("WEAK_PASSWORD : Password should be at least 6 characters"),
            "Password does not meet the minimum requirements"
        );
        assert_eq!(friendly_auth_message("SOMETHING_ELSE"), "SOMETHING_ELSE");
    }

    #[test]
    fn test_token_response_decoding() {
        let json = r#"{
            "localId": "abc123",
            "idToken": "token",
            "email": "jane@example.com",
            "displayName": "Jane"
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.local_id, "abc123");
        assert_eq!(token.display_name.as_deref(), Some("Jane"));
        assert!(token.profile_picture.is_none());
    }
}
