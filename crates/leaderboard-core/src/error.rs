use thiserror::Error;

/// Bad input from a client. Always the caller's fault, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid JSON")]
    InvalidJson,
    /// Reported with the same message as a broken body.
    #[error("Invalid JSON")]
    InvalidScore,
    #[error("missing id")]
    MissingClientId,
}
