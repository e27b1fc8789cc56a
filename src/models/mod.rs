//! Domain models
//!
//! This module contains the entity views the client reads from the backend
//! and the identity provider, plus the request payloads it sends back.

pub mod contest;
pub mod identity;
pub mod participation;
pub mod payment;

pub use contest::*;
pub use identity::*;
pub use participation::*;
pub use payment::*;
