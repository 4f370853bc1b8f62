//! Request classification and provider routing for the app generator.
//!
//! This crate turns natural-language requests into [`RoutingDecision`]s:
//! whether to create a new app or modify the current one, and which
//! provider should handle the work. The pipeline is synchronous and free
//! of side effects, so identical inputs always yield identical decisions.

/// Request analysis: keyword scanning and classification.
pub mod analyzer;
/// Error types and result definitions.
pub mod error;
/// The high-level request router.
pub mod orchestrator;
/// Provider definitions, selection rules, and routing decisions.
pub mod router;

pub use analyzer::{
    Classification, ContextResolver, FeatureCategory, PatternMatcher, RequestKind, RequestSignal,
    ResolutionRule,
};
pub use error::{Result, RoutingError};
pub use orchestrator::RequestRouter;
pub use router::{
    Provider, ProviderCatalog, ProviderChoice, ProviderProfile, ProviderSelector, RoutingDecision,
    SelectionRule,
};
