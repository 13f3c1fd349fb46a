use thiserror::Error;

/// Failure taxonomy for everything that talks to the backend.
///
/// Session operations return these to their caller (the screen decides
/// what to show); chat operations convert them into notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid credentials, expired/missing token, backend rejection.
    #[error("{0}")]
    Auth(String),

    /// Transport failure; opaque to us, no retry.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response with whatever message the backend attached.
    #[error("{message}")]
    Http { status: u16, message: String },
}
