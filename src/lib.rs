//! ContestHub Client Core
//!
//! This library provides the non-rendering half of the ContestHub contest
//! hosting platform's browser client: users browse and join paid contests,
//! creators publish and manage them, and admins moderate both.
//!
//! # Features
//!
//! - Session management against an external identity provider
//! - Backend-authoritative role resolution with a fail-safe default
//! - Pure route guarding over session/role snapshots
//! - Contest lifecycle classification and derived action permissions
//! - Typed, authenticated gateway to the backend REST API
//! - Checkout-redirect handshake for paid registration
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//! - **Services**: view-facing orchestration (fetch, classify, gate)
//! - **Gateways**: HTTP access to backend resources
//! - **Session/Roles**: single-writer shared state, read-only snapshots
//! - **Models**: domain records and request payloads
//!
//! Gating decisions are composed from `contesthub-rules` predicates and
//! evaluate synchronously; nothing privileged renders while the session is
//! still restoring.

pub mod config;
pub mod constants;
pub mod gateway;
pub mod lifecycle;
pub mod models;
pub mod roles;
pub mod routing;
pub mod services;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use contesthub_common::{AppError, AppResult, Role};
pub use routing::RouteDecision;
pub use session::SessionState;
pub use state::ClientState;
