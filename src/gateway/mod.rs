//! Remote data gateway
//!
//! Typed, authenticated access to the backend REST API. One gateway per
//! entity family, each behind a trait so services and tests can inject
//! their own implementation.

pub mod client;
pub mod contests;
pub mod participations;
pub mod payments;
pub mod users;

pub use client::ApiClient;
pub use contests::{ContestFilter, ContestsApi, HttpContestsGateway};
pub use participations::{HttpParticipationsGateway, ParticipationsApi};
pub use payments::{HttpPaymentsGateway, PaymentsApi};
pub use users::{HttpUsersGateway, UserAccount, UsersApi};
