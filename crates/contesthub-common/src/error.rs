//! Application error types for the ContestHub client.

use thiserror::Error;

/// Main application error type used across the client crates.
#[derive(Error, Debug)]
pub enum AppError {
    /// Identity provider rejected the operation (bad credentials,
    /// duplicate account, provider outage)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Role lookup against the backend failed; callers recover to the
    /// least-privileged role
    #[error("Role resolution failed: {0}")]
    RoleResolution(String),

    /// Entity fetch failed; surfaced as an inline per-view error
    #[error("Data fetch failed: {0}")]
    DataFetch(String),

    /// Backend answered with a non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Action refused - viewer lacks permission or the gate is closed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Request payload validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict - e.g., duplicate registration
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal client error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Returns the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "AUTH_ERROR",
            AppError::RoleResolution(_) => "ROLE_RESOLUTION_ERROR",
            AppError::DataFetch(_) => "DATA_FETCH_ERROR",
            AppError::Http { .. } => "HTTP_ERROR",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Config(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify a backend HTTP status into the error taxonomy.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => AppError::Auth(message),
            403 => AppError::Forbidden(message),
            404 => AppError::NotFound(message),
            409 => AppError::Conflict(message),
            _ => AppError::Http { status, message },
        }
    }

    /// True for errors that a view should present as a transient
    /// notification rather than an inline error state.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Auth(_) | AppError::RoleResolution(_))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
