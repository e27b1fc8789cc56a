//! Registration and checkout service

use std::sync::Arc;

use chrono::Utc;
use contesthub_common::{AppError, AppResult, ContestPhase};
use tracing::debug;

use crate::constants::MAX_SUBMITTED_TASK_LENGTH;
use crate::gateway::{ParticipationsApi, PaymentsApi};
use crate::lifecycle;
use crate::models::{CheckoutSession, Contest, Identity, Participation, PaymentConfirmation};

/// Drives the paid-registration flow: gate check, hosted checkout, and the
/// confirmation round trip, plus task hand-in for paid entrants.
pub struct RegistrationService {
    payments: Arc<dyn PaymentsApi>,
    participations: Arc<dyn ParticipationsApi>,
}

impl RegistrationService {
    pub fn new(
        payments: Arc<dyn PaymentsApi>,
        participations: Arc<dyn ParticipationsApi>,
    ) -> Self {
        Self {
            payments,
            participations,
        }
    }

    /// Open a checkout session for one contest, refusing when the
    /// registration gate is closed. The caller redirects the browser to
    /// the returned URL.
    pub async fn begin_checkout(
        &self,
        contest: &Contest,
        viewer: &Identity,
        existing: Option<&Participation>,
    ) -> AppResult<CheckoutSession> {
        let now = Utc::now();
        let gate = contest.gate_for(existing, Some(&viewer.uid), now);

        if !lifecycle::can_register(&gate) {
            return Err(if gate.has_paid {
                AppError::Conflict("Already registered for this contest".to_string())
            } else {
                AppError::Forbidden("Registration for this contest has closed".to_string())
            });
        }

        debug!(contest_id = %contest.id, uid = %viewer.uid, "opening checkout session");
        self.payments.create_checkout(contest.id).await
    }

    /// Reconcile the session id the success route carries back. The
    /// confirmation holds the participation the payment created; the
    /// caller refetches any views derived from it.
    pub async fn confirm_return(&self, session_id: &str) -> AppResult<PaymentConfirmation> {
        if session_id.is_empty() {
            return Err(AppError::Validation(
                "Missing checkout session id".to_string(),
            ));
        }
        self.payments.confirm(session_id).await
    }

    /// Hand in the task for a paid participation while the window is open.
    pub async fn submit_task(
        &self,
        contest: &Contest,
        participation: &Participation,
        task: &str,
    ) -> AppResult<Participation> {
        let now = Utc::now();
        let gate = contest.gate_for(Some(participation), Some(&participation.user_uid), now);

        if !lifecycle::can_submit_task(&gate) {
            let message = match contest.phase_at(now) {
                ContestPhase::Upcoming => "Contest has not started yet",
                ContestPhase::Ended => "Contest has ended",
                ContestPhase::Live => "Only paid participants can submit",
            };
            return Err(AppError::Forbidden(message.to_string()));
        }

        if task.is_empty() {
            return Err(AppError::Validation("Submission must not be empty".to_string()));
        }
        if task.len() > MAX_SUBMITTED_TASK_LENGTH {
            return Err(AppError::Validation("Submission is too large".to_string()));
        }

        self.participations.submit_task(participation.id, task).await
    }
}
