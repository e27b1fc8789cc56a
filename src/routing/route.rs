//! Route table
//!
//! Compiled path patterns mapped to access requirements, plus the
//! role-specific dashboard roots misrouted deep links fall back to.

use contesthub_common::Role;
use regex::Regex;

use crate::constants::routes;

/// What a route demands before its content renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Renders for anyone
    Public,
    /// Requires a signed-in identity, any role
    Authenticated,
    /// Requires a signed-in identity with this exact role
    Role(Role),
}

struct RouteEntry {
    pattern: Regex,
    access: RouteAccess,
}

/// Ordered route patterns; first match wins, unmatched paths are public.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The platform's route map.
    pub fn contesthub() -> Self {
        Self::from_patterns(vec![
            ("^/$", RouteAccess::Public),
            ("^/login$", RouteAccess::Public),
            ("^/register$", RouteAccess::Public),
            ("^/contests$", RouteAccess::Public),
            ("^/leaderboard$", RouteAccess::Public),
            // Contest details and checkout return require a session.
            ("^/contest/[^/]+$", RouteAccess::Authenticated),
            ("^/payment/success", RouteAccess::Authenticated),
            ("^/dashboard/profile$", RouteAccess::Authenticated),
            // User dashboard
            ("^/dashboard/my-participated$", RouteAccess::Role(Role::User)),
            ("^/dashboard/my-winnings$", RouteAccess::Role(Role::User)),
            // Creator dashboard
            ("^/dashboard/add-contest$", RouteAccess::Role(Role::Creator)),
            ("^/dashboard/my-created$", RouteAccess::Role(Role::Creator)),
            (
                "^/dashboard/submitted-tasks(/[^/]+)?$",
                RouteAccess::Role(Role::Creator),
            ),
            // Admin dashboard
            ("^/dashboard/manage-users$", RouteAccess::Role(Role::Admin)),
            (
                "^/dashboard/manage-contests$",
                RouteAccess::Role(Role::Admin),
            ),
        ])
    }

    fn from_patterns(patterns: Vec<(&str, RouteAccess)>) -> Self {
        let entries = patterns
            .into_iter()
            .map(|(pattern, access)| RouteEntry {
                pattern: Regex::new(pattern).expect("route pattern must compile"),
                access,
            })
            .collect();
        Self { entries }
    }

    /// Access requirement for a concrete path.
    pub fn access_for(&self, path: &str) -> RouteAccess {
        self.entries
            .iter()
            .find(|entry| entry.pattern.is_match(path))
            .map(|entry| entry.access)
            .unwrap_or(RouteAccess::Public)
    }

    /// Dashboard root a role lands on after login or a misrouted link.
    pub fn role_home(role: Role) -> &'static str {
        match role {
            Role::Admin => routes::DASHBOARD_MANAGE_CONTESTS,
            Role::Creator => routes::DASHBOARD_CREATED,
            Role::User => routes::DASHBOARD_PARTICIPATED,
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::contesthub()
    }
}
