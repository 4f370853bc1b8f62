//! Request analysis: keyword scanning and classification.
//!
//! This module turns raw request text into a [`RequestSignal`] and resolves
//! that signal against the session state into a [`Classification`].

/// Keyword tables and the request scanner
pub mod matcher;
/// Classification rules applied to scanned requests
pub mod resolver;

pub use matcher::{FeatureCategory, PatternMatcher, RequestSignal};
pub use resolver::{Classification, ContextResolver, RequestKind, ResolutionRule};
