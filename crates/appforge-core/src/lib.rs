//! Core types and configuration for the app generation system.
//!
//! This crate provides shared configuration handling, error types, and the
//! session state supplied by callers of the request router.

/// Configuration types and file handling.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Session state supplied by callers of the router.
pub mod session;

pub use config::{ApiKeys, ProviderSettings, RouterConfig};
pub use error::{Error, Result};
pub use session::{ProjectId, SessionContext};
