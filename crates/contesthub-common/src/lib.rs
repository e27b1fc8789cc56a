//! Common types shared across the ContestHub client crates.

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
pub use types::{
    ApprovalStatus, ContestId, ContestPhase, GradingStatus, Paginated, Pagination,
    ParticipationId, Role, SubmissionGateState, TaskSubmissionStatus,
};
