//! Error types for observable values.

use thiserror::Error;

/// Main error type for observable operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservableError {
    #[error("Observable value is already closed")]
    AlreadyClosed,

    #[error("Subscriber endpoint is closed")]
    Closed,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for observable operations.
pub type Result<T> = std::result::Result<T, ObservableError>;
