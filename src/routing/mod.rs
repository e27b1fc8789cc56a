//! Route gating
//!
//! Maps requested paths to access requirements and decides, from resolved
//! session and role snapshots only, whether a route renders, waits, or
//! redirects.

pub mod guard;
pub mod route;

pub use guard::{guard, RouteDecision};
pub use route::{RouteAccess, RouteTable};
