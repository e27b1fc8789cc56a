//! Payment models

use serde::{Deserialize, Serialize};

use crate::models::Participation;

/// Hosted checkout session created by the backend.
///
/// The client's only job is to send the browser to `checkout_url`; the
/// provider redirects back to the success route with the session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub checkout_url: String,
}

/// Result of reconciling a returned checkout session against the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub session_id: String,
    /// The participation record the payment created
    pub participation: Participation,
}
