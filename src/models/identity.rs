//! Identity model

use serde::{Deserialize, Serialize};

/// Read-only cache of the identity provider's user record.
///
/// Owned by the provider; created on sign-in, cleared on sign-out. The
/// client never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable external id assigned by the provider
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl Identity {
    /// Display name falling back to the email's local part.
    pub fn label(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}
