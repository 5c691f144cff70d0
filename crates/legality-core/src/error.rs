//! Error types for legality data handling

use thiserror::Error;

/// Main error type for legality data operations.
///
/// Verification itself never fails; these errors come from turning raw input
/// (text, numbers outside a domain) into typed values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LegalityError {
    /// Game version name not recognised
    #[error("Unknown game version: {0}")]
    UnknownGameVersion(String),

    /// Numeric result code with no assigned meaning
    #[error("Unknown result code: {0}")]
    UnknownResultCode(u16),

    /// Ball id outside the range a ball set can hold
    #[error("Ball {0} is outside the supported range 0..{max}", max = crate::ball::BallSet::CAPACITY)]
    BallOutOfRange(u8),

    /// Identifier text could not be parsed
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),
}

/// Result type alias for legality data operations
pub type Result<T> = std::result::Result<T, LegalityError>;
