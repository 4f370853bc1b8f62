use crate::analyzer::{Classification, RequestSignal};
use crate::router::selector::ProviderChoice;
use serde::{Deserialize, Serialize};

/// Immutable record of how one request was routed.
///
/// Holds everything downstream stages need: the create-versus-modify
/// outcome, the chosen provider, and the keyword evidence both were based
/// on. Two identical requests against identical sessions produce equal
/// decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Create-versus-modify outcome with its explanation
    pub classification: Classification,
    /// Chosen provider and the rule that selected it
    pub provider: ProviderChoice,
    /// Keyword evidence the decision was based on
    pub signal: RequestSignal,
}
