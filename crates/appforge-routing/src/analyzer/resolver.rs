use crate::analyzer::matcher::RequestSignal;
use appforge_core::SessionContext;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Whether the request starts a new app or changes an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Generate a new app from scratch
    Create,
    /// Change the app the session is already working on
    Modify,
}

impl Display for RequestKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Create => write!(f, "create"),
            Self::Modify => write!(f, "modify"),
        }
    }
}

/// The classification rule that produced a decision.
///
/// Rules are listed in precedence order; the first applicable rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    /// Session has an active project, so the request targets it
    ActiveProjectOverride,
    /// A phrase like "make it" refers back to the app under discussion
    CompoundModificationPhrase,
    /// Creation verbs matched and no modification evidence did
    CreationVerbOnly,
    /// Modification verbs matched
    ModificationVerb,
    /// Nothing matched; new requests default to creation
    DefaultCreate,
}

impl ResolutionRule {
    /// Stable identifier used in logs and serialized decisions.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ActiveProjectOverride => "active_project_override",
            Self::CompoundModificationPhrase => "compound_modification_phrase",
            Self::CreationVerbOnly => "creation_verb_only",
            Self::ModificationVerb => "modification_verb",
            Self::DefaultCreate => "default_create",
        }
    }
}

impl Display for ResolutionRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.id())
    }
}

/// Outcome of classifying one request against the session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether to create a new app or modify the current one
    pub kind: RequestKind,
    /// The rule that decided the outcome
    pub rule: ResolutionRule,
    /// Human-readable account of why the rule fired
    pub explanation: String,
}

/// Applies the classification rules in precedence order.
#[derive(Debug, Default)]
pub struct ContextResolver;

impl ContextResolver {
    /// Classifies a scanned request against the session state.
    ///
    /// An active project forces [`RequestKind::Modify`] before any keyword
    /// evidence is considered; keyword rules only run for sessions without
    /// one. The result is deterministic for a given signal and session.
    pub fn resolve(&self, signal: &RequestSignal, session: &SessionContext) -> Classification {
        if session.has_active_project {
            let explanation = session.project_id.as_ref().map_or_else(
                || {
                    "session reports an active project; request targets the existing app"
                        .to_owned()
                },
                |project| {
                    format!("session has active project {project}; request targets the existing app")
                },
            );
            return Classification {
                kind: RequestKind::Modify,
                rule: ResolutionRule::ActiveProjectOverride,
                explanation,
            };
        }

        if let Some(phrase) = &signal.compound_phrase {
            return Classification {
                kind: RequestKind::Modify,
                rule: ResolutionRule::CompoundModificationPhrase,
                explanation: format!("phrase \"{phrase}\" refers back to the app under discussion"),
            };
        }

        if signal.has_creation_verb() && !signal.has_modification_verb() {
            let verbs = signal.creation_verbs.join(", ");
            return Classification {
                kind: RequestKind::Create,
                rule: ResolutionRule::CreationVerbOnly,
                explanation: format!("creation verbs [{verbs}] with no modification signals"),
            };
        }

        if signal.has_modification_verb() {
            let verbs = signal.modification_verbs.join(", ");
            return Classification {
                kind: RequestKind::Modify,
                rule: ResolutionRule::ModificationVerb,
                explanation: format!("modification verbs [{verbs}] present without an active project"),
            };
        }

        Classification {
            kind: RequestKind::Create,
            rule: ResolutionRule::DefaultCreate,
            explanation: "no classification keywords matched; treating the request as a new app"
                .to_owned(),
        }
    }
}
