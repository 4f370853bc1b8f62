use crate::analyzer::{ContextResolver, PatternMatcher};
use crate::error::Result;
use crate::router::{Provider, ProviderSelector, RoutingDecision};
use appforge_core::{RouterConfig, SessionContext};

/// High-level router that coordinates scanning, classification, and
/// provider selection.
///
/// The router holds no mutable state, so one instance can serve any number
/// of requests and identical inputs always produce identical decisions.
#[derive(Debug)]
pub struct RequestRouter {
    matcher: PatternMatcher,
    resolver: ContextResolver,
    selector: ProviderSelector,
}

impl RequestRouter {
    /// Creates a router from the given configuration.
    ///
    /// # Errors
    /// Returns an error if the configured default provider is unknown or a
    /// keyword pattern fails to compile.
    pub fn new(config: &RouterConfig) -> Result<Self> {
        let default_provider = Provider::from_name(&config.providers.default_provider)?;
        Ok(Self {
            matcher: PatternMatcher::new()?,
            resolver: ContextResolver::default(),
            selector: ProviderSelector::new(default_provider),
        })
    }

    /// Replaces the default provider used when no specialization applies.
    #[must_use]
    pub fn with_default_provider(mut self, provider: Provider) -> Self {
        self.selector = ProviderSelector::new(provider);
        self
    }

    /// Routes one request against the session state.
    ///
    /// Scans the text, classifies it as create-or-modify, and selects a
    /// provider. The session is read, never written; the decision carries
    /// everything downstream stages need.
    ///
    /// # Errors
    /// Returns an error if the text is empty or whitespace-only, or if
    /// `preference` names an unknown provider.
    pub fn route(
        &self,
        text: &str,
        session: &SessionContext,
        preference: Option<&str>,
    ) -> Result<RoutingDecision> {
        let signal = self.matcher.scan(text)?;
        let classification = self.resolver.resolve(&signal, session);
        let choice = self.selector.select(&classification, &signal, preference)?;

        tracing::debug!(
            "Session state: active_project={active}, prior_modifications={count}",
            active = session.has_active_project,
            count = session.prior_modification_count
        );
        tracing::info!(
            "Routing decision: {kind} via {provider} ({classification_rule} / {selection_rule})",
            kind = classification.kind,
            provider = choice.provider,
            classification_rule = classification.rule,
            selection_rule = choice.rule
        );

        Ok(RoutingDecision {
            classification,
            provider: choice,
            signal,
        })
    }
}
