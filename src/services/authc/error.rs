use thiserror::Error;

/// Faults raised by subject resolvers and unauthenticated handlers.
///
/// The gate hands these back untouched; mapping them onto an HTTP status is
/// left to whoever drives the gate (see `AppError`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthcError {
    #[error("subject backend error: {0}")]
    Backend(String),

    #[error("subject resolver unavailable: {0}")]
    Unavailable(String),

    #[error("unauthenticated handler failed: {0}")]
    Handler(String),
}
