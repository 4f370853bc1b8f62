//! Provider definitions, selection rules, and routing decisions.

/// Provider metadata and configuration-backed availability
pub mod catalog;
/// The immutable routing decision record
pub mod decision;
/// The supported provider set
pub mod provider;
/// Provider selection rules
pub mod selector;

pub use catalog::{ProviderCatalog, ProviderProfile};
pub use decision::RoutingDecision;
pub use provider::Provider;
pub use selector::{ProviderChoice, ProviderSelector, SelectionRule};
