//! Route guard
//!
//! A pure function from (requested path, access requirement, session
//! snapshot, resolved role) to a rendering decision. Nothing here
//! suspends or touches shared state, so the guard is trivially
//! re-evaluable whenever any input changes.

use contesthub_common::Role;
use contesthub_rules::context::AccessContext;
use contesthub_rules::prelude::*;

use crate::routing::route::RouteAccess;
use crate::session::SessionState;

/// Outcome of guarding one route request.
///
/// Permission denial is always a redirect, never an error: misrouted deep
/// links degrade to the viewer's own dashboard instead of an error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the route's content
    Allow,
    /// Session restoration has not finished; render a waiting placeholder
    Pending,
    /// Send to the login screen, returning here after success
    RedirectToLogin { return_path: String },
    /// Send to the viewer's own dashboard root
    RedirectToRoleHome(Role),
}

/// Decide whether `path` may render for this session/role snapshot.
pub fn guard(
    path: &str,
    access: RouteAccess,
    session: &SessionState,
    role: Role,
) -> RouteDecision {
    // Never decide permission while the session is still restoring.
    if session.is_loading() {
        return RouteDecision::Pending;
    }

    let required = match access {
        RouteAccess::Public => return RouteDecision::Allow,
        RouteAccess::Authenticated => None,
        RouteAccess::Role(required) => Some(required),
    };

    if !session.is_authenticated() {
        return RouteDecision::RedirectToLogin {
            return_path: path.to_string(),
        };
    }

    let ctx = AccessContext::signed_in(role);
    match required {
        None => RouteDecision::Allow,
        Some(required) if HasRole(required).is_satisfied_by(&ctx) => RouteDecision::Allow,
        Some(_) => RouteDecision::RedirectToRoleHome(role),
    }
}
