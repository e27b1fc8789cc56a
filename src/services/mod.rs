//! View-facing services
//!
//! Thin orchestration over the gateways: fetch, classify, derive
//! permissions, and hand the view a ready-to-render structure. Mutations
//! return the updated record; callers refetch whatever else the change
//! invalidates.

pub mod admin_service;
pub mod contest_service;
pub mod grading_service;
pub mod registration_service;
pub mod stats_service;

pub use admin_service::AdminService;
pub use contest_service::{ContestService, ContestView};
pub use grading_service::{GradingService, SubmissionReviewRow};
pub use registration_service::RegistrationService;
pub use stats_service::StatsService;
