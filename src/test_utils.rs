//! Shared fixtures for unit tests.

use chrono::{DateTime, Duration, Utc};
use contesthub_common::{ApprovalStatus, GradingStatus, TaskSubmissionStatus};
use uuid::Uuid;

use crate::models::{Contest, CreatorSummary, Identity, Participation};

/// A signed-in viewer.
pub fn sample_identity(uid: &str) -> Identity {
    Identity {
        uid: uid.to_string(),
        email: format!("{uid}@example.com"),
        display_name: None,
        photo_url: None,
    }
}

/// An accepted contest spanning `[start, end]`, created by `creator-1`.
pub fn sample_contest(start: DateTime<Utc>, end: DateTime<Utc>) -> Contest {
    Contest {
        id: Uuid::new_v4(),
        name: "Logo sprint".into(),
        description: None,
        image_url: None,
        contest_type: "image-design".into(),
        task_instruction: None,
        entry_price: 500,
        prize_money: 10_000,
        start_date: start,
        end_date: end,
        approval: ApprovalStatus::Accepted,
        admin_comment: None,
        creator: CreatorSummary {
            uid: "creator-1".into(),
            email: "maker@example.com".into(),
            display_name: None,
        },
        participant_count: 0,
        created_at: start - Duration::days(7),
    }
}

/// A paid participation with the given submission/grading state.
pub fn sample_participation(
    task_submission: TaskSubmissionStatus,
    grading: GradingStatus,
) -> Participation {
    Participation {
        id: Uuid::new_v4(),
        contest_id: Uuid::new_v4(),
        user_uid: "user-1".into(),
        user_email: "user@example.com".into(),
        paid_amount: 500,
        transaction_id: Some("txn_123".into()),
        task_submission,
        submitted_task: None,
        grading,
        registered_at: Utc::now(),
    }
}
