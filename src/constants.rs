//! Application-wide constants
//!
//! This module contains all constant values used throughout the client.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// BACKEND API DEFAULTS
// =============================================================================

/// Default backend API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// IDENTITY PROVIDER DEFAULTS
// =============================================================================

/// Default identity provider REST endpoint
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Minimum password length accepted at sign-up
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length accepted at sign-up
pub const MAX_PASSWORD_LENGTH: usize = 128;

// =============================================================================
// BACKEND API PATHS
// =============================================================================

/// Backend resource paths, relative to the API base URL
pub mod api_paths {
    pub const CONTESTS: &str = "/contests";
    pub const USERS: &str = "/users";
    pub const PARTICIPATIONS: &str = "/participations";
    pub const PAYMENTS: &str = "/payments";
}

// =============================================================================
// CLIENT ROUTES
// =============================================================================

/// Client-side route paths consumed by the route table
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const ALL_CONTESTS: &str = "/contests";
    pub const PAYMENT_SUCCESS: &str = "/payment/success";

    pub const DASHBOARD_PROFILE: &str = "/dashboard/profile";
    pub const DASHBOARD_PARTICIPATED: &str = "/dashboard/my-participated";
    pub const DASHBOARD_WINNINGS: &str = "/dashboard/my-winnings";
    pub const DASHBOARD_ADD_CONTEST: &str = "/dashboard/add-contest";
    pub const DASHBOARD_CREATED: &str = "/dashboard/my-created";
    pub const DASHBOARD_SUBMISSIONS: &str = "/dashboard/submitted-tasks";
    pub const DASHBOARD_MANAGE_USERS: &str = "/dashboard/manage-users";
    pub const DASHBOARD_MANAGE_CONTESTS: &str = "/dashboard/manage-contests";
}

// =============================================================================
// CHECKOUT
// =============================================================================

/// Default route the checkout provider redirects back to on success
pub const DEFAULT_CHECKOUT_SUCCESS_PATH: &str = "/payment/success";

/// Default route the checkout provider redirects back to on cancel
pub const DEFAULT_CHECKOUT_CANCEL_PATH: &str = "/contests";

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers as the backend serializes them
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const CREATOR: &str = "creator";
    pub const USER: &str = "user";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, CREATOR, USER];
}

// =============================================================================
// CONTEST SETTINGS
// =============================================================================

/// Contest categories offered by the platform
pub mod contest_types {
    pub const IMAGE_DESIGN: &str = "image-design";
    pub const ARTICLE_WRITING: &str = "article-writing";
    pub const MARKETING_STRATEGY: &str = "marketing-strategy";
    pub const DIGITAL_ADVERTISEMENT: &str = "digital-advertisement";
    pub const GAMING_REVIEW: &str = "gaming-review";
    pub const BOOK_REVIEW: &str = "book-review";
    pub const BUSINESS_IDEA: &str = "business-idea";
    pub const MOVIE_REVIEW: &str = "movie-review";

    /// All supported contest categories
    pub const ALL: &[&str] = &[
        IMAGE_DESIGN,
        ARTICLE_WRITING,
        MARKETING_STRATEGY,
        DIGITAL_ADVERTISEMENT,
        GAMING_REVIEW,
        BOOK_REVIEW,
        BUSINESS_IDEA,
        MOVIE_REVIEW,
    ];
}

/// Maximum contest name length
pub const MAX_CONTEST_NAME_LENGTH: u64 = 100;

/// Maximum contest description length
pub const MAX_CONTEST_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum task instruction length
pub const MAX_TASK_INSTRUCTION_LENGTH: u64 = 65535;

/// Maximum submitted task payload length
pub const MAX_SUBMITTED_TASK_LENGTH: usize = 65535;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 50;

/// Number of contests shown on the popular strip
pub const POPULAR_CONTEST_LIMIT: u32 = 6;

/// Number of recent winners advertised on the home page
pub const RECENT_WINNER_LIMIT: u32 = 3;
