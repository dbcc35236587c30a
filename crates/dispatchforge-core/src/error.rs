//! Error types for DispatchForge

use thiserror::Error;

/// Main error type for DispatchForge operations.
///
/// The planning engine itself never fails on well-formed input; these
/// errors come from converting raw backend data into domain types.
#[derive(Debug, Error)]
pub enum DispatchForgeError {
    /// Error in planner configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error in domain model data (unknown code, out-of-range value)
    #[error("Domain model error: {0}")]
    DomainModel(String),
}

/// Result type alias for DispatchForge operations
pub type Result<T> = std::result::Result<T, DispatchForgeError>;
