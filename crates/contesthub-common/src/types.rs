//! Common types used across the ContestHub client crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contest ID type
pub type ContestId = Uuid;

/// Participation ID type
pub type ParticipationId = Uuid;

/// Backend-assigned privilege tag.
///
/// Roles are resolved from the backend per session, never asserted by the
/// client. An unresolved role degrades to `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full moderation access
    Admin,
    /// Can publish and manage contests
    Creator,
    /// Can browse, register and submit
    User,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Creator => "creator",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "creator" => Ok(Role::Creator),
            "user" => Ok(Role::User),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized role tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Temporal state of a contest window, derived from its start/end
/// timestamps. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestPhase {
    /// Window has not opened yet
    Upcoming,
    /// Window is open (boundaries inclusive)
    Live,
    /// Window has closed
    Ended,
}

impl std::fmt::Display for ContestPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Live => write!(f, "live"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

/// Moderation status assigned to a contest by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Accepted,
    Rejected,
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        ApprovalStatus::Pending
    }
}

/// Whether a participant has handed in their task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSubmissionStatus {
    Pending,
    Submitted,
}

impl Default for TaskSubmissionStatus {
    fn default() -> Self {
        TaskSubmissionStatus::Pending
    }
}

/// Grade assigned by the contest creator after the window closes.
///
/// Wire values match the backend verbatim, including the capitalized
/// verdict names it stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingStatus {
    #[serde(rename = "not_graded")]
    NotGraded,
    #[serde(rename = "Winner")]
    Winner,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Reject")]
    Reject,
}

impl Default for GradingStatus {
    fn default() -> Self {
        GradingStatus::NotGraded
    }
}

/// Grading-gate state for one participation row, as shown to the creator.
///
/// A single tagged variant instead of separate "ended"/"submitted" flags,
/// so the impossible fourth combination cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionGateState {
    /// Contest window still open, nothing handed in yet
    NotYetDue,
    /// Submission arrived, window still open; grading not offered yet
    AwaitingSubmission,
    /// Window closed with a submission on file; grading is offered
    ReadyToGrade,
    /// Window closed and the participant never submitted
    Closed,
}

impl SubmissionGateState {
    /// Derive the gate state from the contest phase and the participant's
    /// submission status.
    pub fn derive(phase: ContestPhase, submission: TaskSubmissionStatus) -> Self {
        match (phase, submission) {
            (ContestPhase::Ended, TaskSubmissionStatus::Submitted) => Self::ReadyToGrade,
            (ContestPhase::Ended, TaskSubmissionStatus::Pending) => Self::Closed,
            (_, TaskSubmissionStatus::Submitted) => Self::AwaitingSubmission,
            (_, TaskSubmissionStatus::Pending) => Self::NotYetDue,
        }
    }

    /// True only for rows the grading UI may act on.
    pub fn gradable(&self) -> bool {
        matches!(self, Self::ReadyToGrade)
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: 1,
            per_page: 10,
        }
    }
}

impl Pagination {
    /// Offset of the first item on this page
    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.per_page
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = ((total as f64) / (per_page as f64)).ceil() as u32;
        Paginated {
            data,
            page,
            per_page,
            total,
            total_pages,
        }
    }
}
