//! Participation model

use chrono::{DateTime, Utc};
use contesthub_common::{
    ContestId, ContestPhase, GradingStatus, ParticipationId, SubmissionGateState,
    TaskSubmissionStatus,
};
use serde::{Deserialize, Serialize};

/// One user's registration/submission/grading record for one contest.
///
/// A record only exists after checkout completes, so its presence implies
/// a paid entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    pub id: ParticipationId,
    pub contest_id: ContestId,
    pub user_uid: String,
    pub user_email: String,
    /// Amount actually paid, in the smallest currency unit
    pub paid_amount: i64,
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub task_submission: TaskSubmissionStatus,
    pub submitted_task: Option<String>,
    #[serde(default)]
    pub grading: GradingStatus,
    pub registered_at: DateTime<Utc>,
}

impl Participation {
    pub fn has_paid(&self) -> bool {
        self.paid_amount > 0 || self.transaction_id.is_some()
    }

    pub fn has_submitted(&self) -> bool {
        self.task_submission == TaskSubmissionStatus::Submitted
    }

    pub fn is_winner(&self) -> bool {
        self.grading == GradingStatus::Winner
    }

    /// Grading-gate state of this record given the contest phase.
    pub fn gate_state(&self, phase: ContestPhase) -> SubmissionGateState {
        SubmissionGateState::derive(phase, self.task_submission)
    }
}

/// Aggregate win/loss counters for a participant's profile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParticipationStats {
    pub total: u32,
    pub wins: u32,
}

impl ParticipationStats {
    /// Wins as a percentage of attempted contests.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.wins as f64 / self.total as f64) * 100.0
        }
    }

    pub fn loss_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 - self.win_rate()
        }
    }
}
