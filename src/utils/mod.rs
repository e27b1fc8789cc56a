//! Utility functions

pub mod time;
pub mod validation;

pub use time::{countdown_label, format_duration, now_utc, parse_datetime};
pub use validation::{validate_email, validate_password};
