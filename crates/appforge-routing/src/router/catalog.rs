//! Provider metadata and configuration-backed availability checks.

use crate::analyzer::FeatureCategory;
use crate::router::provider::Provider;
use appforge_core::RouterConfig;

/// Static metadata describing one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderProfile {
    /// The provider this profile describes
    pub provider: Provider,
    /// Environment variable consulted for the API key, if any
    pub api_key_env: Option<&'static str>,
    /// Feature categories the provider is strongest in
    pub specialties: &'static [FeatureCategory],
    /// Fallback ordering; lower is tried first
    pub priority: u8,
}

/// Provider metadata joined with the user's configuration.
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    config: RouterConfig,
}

impl ProviderCatalog {
    /// Creates a catalog backed by the given configuration.
    pub const fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Static profile for a provider.
    #[must_use]
    pub const fn profile(provider: Provider) -> ProviderProfile {
        match provider {
            Provider::Claude => ProviderProfile {
                provider: Provider::Claude,
                api_key_env: Some("CLAUDE_API_KEY"),
                specialties: &[FeatureCategory::Architecture],
                priority: 2,
            },
            Provider::Gpt4 => ProviderProfile {
                provider: Provider::Gpt4,
                api_key_env: Some("OPENAI_API_KEY"),
                specialties: &[FeatureCategory::Logic],
                priority: 1,
            },
            Provider::Grok => ProviderProfile {
                provider: Provider::Grok,
                api_key_env: Some("XAI_API_KEY"),
                specialties: &[FeatureCategory::Ui],
                priority: 3,
            },
            Provider::Hybrid => ProviderProfile {
                provider: Provider::Hybrid,
                api_key_env: None,
                specialties: &[
                    FeatureCategory::Ui,
                    FeatureCategory::Logic,
                    FeatureCategory::Architecture,
                ],
                priority: 4,
            },
        }
    }

    /// Concrete providers to try when `provider` is unavailable, ordered by
    /// priority. Hybrid is a routing target, never a fallback target.
    #[must_use]
    pub fn fallback_chain(provider: Provider) -> Vec<Provider> {
        let mut chain: Vec<Provider> = Provider::all()
            .into_iter()
            .filter(|candidate| *candidate != provider && *candidate != Provider::Hybrid)
            .collect();
        chain.sort_by_key(|candidate| Self::profile(*candidate).priority);
        chain
    }

    /// Whether the provider has every API key it needs, from config or the
    /// environment. Hybrid requires all three concrete providers.
    pub fn is_configured(&self, provider: Provider) -> bool {
        match provider {
            Provider::Hybrid => [Provider::Claude, Provider::Gpt4, Provider::Grok]
                .into_iter()
                .all(|member| self.config.get_api_key(member.name()).is_some()),
            _ => self.config.get_api_key(provider.name()).is_some(),
        }
    }

    /// The configuration backing this catalog.
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_core::ApiKeys;

    fn config_with_all_keys() -> RouterConfig {
        let mut config = RouterConfig::default();
        config.providers.api_keys = ApiKeys {
            claude_api_key: Some("claude-key".to_owned()),
            openai_api_key: Some("openai-key".to_owned()),
            xai_api_key: Some("xai-key".to_owned()),
        };
        config
    }

    #[test]
    fn test_profile_priorities() {
        assert_eq!(ProviderCatalog::profile(Provider::Gpt4).priority, 1);
        assert_eq!(ProviderCatalog::profile(Provider::Claude).priority, 2);
        assert_eq!(ProviderCatalog::profile(Provider::Grok).priority, 3);
        assert_eq!(ProviderCatalog::profile(Provider::Hybrid).priority, 4);
    }

    #[test]
    fn test_profile_specialties() {
        assert_eq!(
            ProviderCatalog::profile(Provider::Grok).specialties,
            &[FeatureCategory::Ui]
        );
        assert_eq!(
            ProviderCatalog::profile(Provider::Claude).specialties,
            &[FeatureCategory::Architecture]
        );
        assert_eq!(
            ProviderCatalog::profile(Provider::Hybrid).specialties.len(),
            3
        );
    }

    #[test]
    fn test_profile_api_key_env() {
        assert_eq!(
            ProviderCatalog::profile(Provider::Claude).api_key_env,
            Some("CLAUDE_API_KEY")
        );
        assert_eq!(ProviderCatalog::profile(Provider::Hybrid).api_key_env, None);
    }

    #[test]
    fn test_fallback_chain_ordered_by_priority() {
        assert_eq!(
            ProviderCatalog::fallback_chain(Provider::Hybrid),
            vec![Provider::Gpt4, Provider::Claude, Provider::Grok]
        );
        assert_eq!(
            ProviderCatalog::fallback_chain(Provider::Gpt4),
            vec![Provider::Claude, Provider::Grok]
        );
        assert_eq!(
            ProviderCatalog::fallback_chain(Provider::Claude),
            vec![Provider::Gpt4, Provider::Grok]
        );
    }

    #[test]
    fn test_fallback_chain_never_contains_hybrid() {
        for provider in Provider::all() {
            assert!(!ProviderCatalog::fallback_chain(provider).contains(&Provider::Hybrid));
        }
    }

    #[test]
    fn test_is_configured_with_keys() {
        let catalog = ProviderCatalog::new(config_with_all_keys());
        for provider in Provider::all() {
            assert!(catalog.is_configured(provider), "{provider} should be configured");
        }
    }

    #[test]
    fn test_config_accessor() {
        let catalog = ProviderCatalog::new(RouterConfig::default());
        assert_eq!(catalog.config().providers.default_provider, "gpt4");
    }
}
