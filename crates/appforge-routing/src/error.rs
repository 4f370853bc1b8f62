//! Error types for the routing system.

use appforge_core::Error as CoreError;
use regex::Error as RegexError;
use std::result::Result as StdResult;
use thiserror::Error;

/// Result type alias using `RoutingError`.
pub type Result<T> = StdResult<T, RoutingError>;

/// Error types that can occur while classifying and routing a request.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Error from appforge-core
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Keyword pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] RegexError),

    /// Request text was empty or contained only whitespace
    #[error("Request text cannot be empty")]
    InvalidInput {
        /// The rejected input, kept for diagnostics
        input: String,
    },

    /// Requested provider is not part of the known provider set
    #[error("Unknown provider \"{requested}\"; expected one of: claude, gpt4, grok, hybrid")]
    UnknownProvider {
        /// The provider name as the caller supplied it
        requested: String,
    },
}

impl RoutingError {
    /// Checks if this error was caused by the caller's input rather than the environment.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::UnknownProvider { .. }
        )
    }
}
