//! Error types for the verifier pipeline

use thiserror::Error;

/// Pipeline error.
///
/// Verification itself cannot fail; only setting up batch execution can.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Failed to build batch thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, VerifyError>;
