//! Specification Pattern implementation for composable permission rules.
//!
//! This crate provides a small rule engine using the Specification Pattern,
//! allowing UI gating decisions to be composed from simple, reusable
//! predicates.
//!
//! Rules evaluate synchronously over already-fetched snapshots (session,
//! role, contest phase, participation), so route guarding and action gating
//! never suspend mid-decision.
//!
//! # Example
//!
//! ```ignore
//! use contesthub_rules::prelude::*;
//!
//! // Compose rules with operators
//! let can_grade = Spec(IsContestOwner) & Spec(PhaseIs(ContestPhase::Ended)) & Spec(HasSubmittedTask);
//!
//! // Evaluate
//! if can_grade.is_satisfied_by(&gate) {
//!     // Offer the grading action
//! }
//! ```

pub mod context;
pub mod operators;
pub mod rules;
pub mod specification;

/// Prelude module - import everything you need with `use contesthub_rules::prelude::*`
pub mod prelude {
    pub use crate::context::{AccessContext, ContestGateContext};
    pub use crate::operators::Spec;
    pub use crate::rules::*;
    pub use crate::specification::{
        AllOf, AlwaysFalse, AlwaysTrue, And, AnyOf, BoxedRule, Not, Or, Rule,
    };
}
