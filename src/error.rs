//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A capacity of zero was supplied to construction or resize
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Strict lookup of a key that is not in the cache
    #[error("Key not found")]
    NotFound,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
