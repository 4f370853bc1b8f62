use crate::analyzer::{Classification, FeatureCategory, RequestSignal};
use crate::error::Result;
use crate::router::provider::Provider;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The selection rule that chose a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRule {
    /// Caller named a provider explicitly
    ExplicitPreference,
    /// Only UI keywords matched
    UiSpecialist,
    /// Only logic keywords matched
    LogicSpecialist,
    /// Only architecture keywords matched
    ArchitectureSpecialist,
    /// Two or more categories matched
    MultiCategoryHybrid,
    /// No category matched; configured default applies
    DefaultProvider,
}

impl SelectionRule {
    /// Stable identifier used in logs and serialized decisions.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ExplicitPreference => "explicit_preference",
            Self::UiSpecialist => "ui_specialist",
            Self::LogicSpecialist => "logic_specialist",
            Self::ArchitectureSpecialist => "architecture_specialist",
            Self::MultiCategoryHybrid => "multi_category_hybrid",
            Self::DefaultProvider => "default_provider",
        }
    }
}

impl Display for SelectionRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.id())
    }
}

/// A chosen provider together with the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderChoice {
    /// The provider the request should go to
    pub provider: Provider,
    /// The rule that made the choice
    pub rule: SelectionRule,
}

/// Chooses the provider for a classified request.
#[derive(Debug, Clone, Copy)]
pub struct ProviderSelector {
    default_provider: Provider,
}

impl ProviderSelector {
    /// Creates a selector that falls back to `default_provider` when no
    /// specialization rule applies.
    pub const fn new(default_provider: Provider) -> Self {
        Self { default_provider }
    }

    /// Selects a provider for the classified request.
    ///
    /// An explicit preference always wins, even over specialization. With
    /// no preference, a single matched category routes to its specialist
    /// and two or more route to [`Provider::Hybrid`].
    ///
    /// # Errors
    /// Returns an unknown-provider error if `preference` names a provider
    /// outside the supported set; the request is never silently rerouted.
    pub fn select(
        &self,
        classification: &Classification,
        signal: &RequestSignal,
        preference: Option<&str>,
    ) -> Result<ProviderChoice> {
        tracing::debug!(
            "Selecting provider for {kind} request",
            kind = classification.kind
        );

        if let Some(name) = preference {
            let provider = Provider::from_name(name)?;
            return Ok(ProviderChoice {
                provider,
                rule: SelectionRule::ExplicitPreference,
            });
        }

        let choice = match signal.matched_categories().as_slice() {
            [] => ProviderChoice {
                provider: self.default_provider,
                rule: SelectionRule::DefaultProvider,
            },
            [FeatureCategory::Ui] => ProviderChoice {
                provider: Provider::Grok,
                rule: SelectionRule::UiSpecialist,
            },
            [FeatureCategory::Logic] => ProviderChoice {
                provider: Provider::Gpt4,
                rule: SelectionRule::LogicSpecialist,
            },
            [FeatureCategory::Architecture] => ProviderChoice {
                provider: Provider::Claude,
                rule: SelectionRule::ArchitectureSpecialist,
            },
            _ => ProviderChoice {
                provider: Provider::Hybrid,
                rule: SelectionRule::MultiCategoryHybrid,
            },
        };
        Ok(choice)
    }
}

impl Default for ProviderSelector {
    fn default() -> Self {
        Self::new(Provider::default())
    }
}
