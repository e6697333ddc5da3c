use thiserror::Error;

/// Tip error types
#[derive(Error, Debug)]
pub enum TipError {
    /// Confirm was requested with no amount selected
    #[error("No tip amount selected")]
    NoAmount,

    /// No Lightning address configured for the recipient
    #[error("No recipient Lightning address")]
    NoRecipient,

    /// Lightning address failed validation
    #[error("Invalid Lightning address: {0}")]
    InvalidAddress(String),
}

/// Result type for tip operations
pub type Result<T> = std::result::Result<T, TipError>;
