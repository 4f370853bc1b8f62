//! Provider definitions and name parsing.
//!
//! Centralizes the supported provider set and provides type-safe provider
//! handling.

use crate::error::{Result, RoutingError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// All supported generation providers.
///
/// The set is fixed; unknown names are rejected during parsing rather than
/// silently mapped to a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Claude, strongest on architecture-heavy requests
    Claude,
    /// GPT-4, strongest on logic-heavy requests
    #[default]
    Gpt4,
    /// Grok, strongest on UI-heavy requests
    Grok,
    /// Virtual provider that fans a request out across the concrete ones
    Hybrid,
}

impl Provider {
    /// Get the canonical lowercase name for this provider.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Gpt4 => "gpt4",
            Self::Grok => "grok",
            Self::Hybrid => "hybrid",
        }
    }

    /// Get all supported providers.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Claude, Self::Gpt4, Self::Grok, Self::Hybrid]
    }

    /// Parses a provider from its canonical name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`RoutingError::UnknownProvider`] if the name is not part of
    /// the supported set.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "claude" => Ok(Self::Claude),
            "gpt4" => Ok(Self::Gpt4),
            "grok" => Ok(Self::Grok),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(RoutingError::UnknownProvider {
                requested: name.to_owned(),
            }),
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Claude => write!(f, "Claude"),
            Self::Gpt4 => write!(f, "GPT-4"),
            Self::Grok => write!(f, "Grok"),
            Self::Hybrid => write!(f, "Hybrid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_accepts_canonical_names() {
        for provider in Provider::all() {
            let parsed = match Provider::from_name(provider.name()) {
                Ok(parsed) => parsed,
                Err(error) => panic!("parse failed for {provider}: {error}"),
            };
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn test_from_name_normalizes_input() {
        assert!(matches!(Provider::from_name(" Claude "), Ok(Provider::Claude)));
        assert!(matches!(Provider::from_name("GPT4"), Ok(Provider::Gpt4)));
        assert!(matches!(Provider::from_name("HYBRID"), Ok(Provider::Hybrid)));
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        let error = match Provider::from_name("gemini") {
            Ok(provider) => panic!("expected rejection, got {provider}"),
            Err(error) => error,
        };
        match error {
            RoutingError::UnknownProvider { requested } => assert_eq!(requested, "gemini"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Provider::Claude.to_string(), "Claude");
        assert_eq!(Provider::Gpt4.to_string(), "GPT-4");
        assert_eq!(Provider::Grok.to_string(), "Grok");
        assert_eq!(Provider::Hybrid.to_string(), "Hybrid");
    }

    #[test]
    fn test_default_is_gpt4() {
        assert_eq!(Provider::default(), Provider::Gpt4);
    }
}
