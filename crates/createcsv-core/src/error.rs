use thiserror::Error;

/// Errors produced while parsing a size expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("invalid size '{input}': '{number}' is not a decimal integer")]
    InvalidNumber { input: String, number: String },
    #[error("invalid size '{input}': value must not be negative")]
    Negative { input: String },
    #[error("invalid size '{input}': value exceeds the supported range")]
    Overflow { input: String },
}

/// Result type for size parsing.
pub type SizeResult<T> = std::result::Result<T, SizeError>;
