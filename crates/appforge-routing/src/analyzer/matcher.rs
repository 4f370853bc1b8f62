//! Keyword tables and the scanner that turns request text into signals.
//!
//! Tables are fixed at compile time so that the same text always produces
//! the same signal.

use crate::error::{Result, RoutingError};
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Verbs that indicate the user wants a new app.
const CREATION_VERBS: &[&str] = &["create", "build", "make", "design", "develop", "generate"];

/// Verbs that indicate the user wants to change an existing app.
const MODIFICATION_VERBS: &[&str] = &[
    "add", "change", "update", "fix", "modify", "remove", "delete", "rename", "adjust", "improve",
    "tweak",
];

/// Keywords for visual and interface work.
const UI_KEYWORDS: &[&str] = &[
    "color",
    "colorful",
    "theme",
    "design",
    "layout",
    "animation",
    "gradient",
    "font",
    "button",
    "screen",
    "interface",
    "ui",
    "dark mode",
    "light mode",
    "beautiful",
    "pretty",
    "modern",
    "style",
    "icon",
];

/// Keywords for computation and data handling work.
const LOGIC_KEYWORDS: &[&str] = &[
    "algorithm",
    "calculate",
    "compute",
    "sort",
    "search",
    "logic",
    "process",
    "performance",
    "optimize",
    "efficiency",
    "data structure",
];

/// Keywords for structural and infrastructure work.
const ARCHITECTURE_KEYWORDS: &[&str] = &[
    "architecture",
    "mvvm",
    "pattern",
    "scalable",
    "modular",
    "coordinator",
    "dependency injection",
    "database",
    "storage",
    "persistence",
    "cache",
    "api",
    "network",
    "authentication",
    "e-commerce",
    "enterprise",
    "real-time",
    "production-quality",
];

/// "make it", "make this", and friends refer back to an app under discussion
/// rather than asking for a new one.
const COMPOUND_MODIFICATION: &str = r"\bmake\s+(?:it|this|that|them)\b";

/// A keyword table compiled into a single multi-pattern matcher.
#[derive(Debug)]
struct KeywordSet {
    keywords: &'static [&'static str],
    set: RegexSet,
}

impl KeywordSet {
    fn compile(keywords: &'static [&'static str]) -> Result<Self> {
        let patterns: Vec<String> = keywords
            .iter()
            .map(|keyword| format!(r"\b{}\b", regex::escape(keyword)))
            .collect();
        let set = RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .build()?;
        Ok(Self { keywords, set })
    }

    /// Matched keywords in canonical table order, regardless of where they
    /// appear in the text.
    fn matches_in(&self, text: &str) -> Vec<String> {
        self.set
            .matches(text)
            .iter()
            .map(|index| self.keywords[index].to_owned())
            .collect()
    }
}

/// Scans request text against the fixed keyword tables.
///
/// Matching is case-insensitive and respects word boundaries, so
/// "address" never counts as the verb "add" and "updated" never counts
/// as "update".
#[derive(Debug)]
pub struct PatternMatcher {
    creation: KeywordSet,
    modification: KeywordSet,
    ui: KeywordSet,
    logic: KeywordSet,
    architecture: KeywordSet,
    compound: Regex,
}

impl PatternMatcher {
    /// Compiles the keyword tables.
    ///
    /// # Errors
    /// Returns an error if a keyword pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            creation: KeywordSet::compile(CREATION_VERBS)?,
            modification: KeywordSet::compile(MODIFICATION_VERBS)?,
            ui: KeywordSet::compile(UI_KEYWORDS)?,
            logic: KeywordSet::compile(LOGIC_KEYWORDS)?,
            architecture: KeywordSet::compile(ARCHITECTURE_KEYWORDS)?,
            compound: RegexBuilder::new(COMPOUND_MODIFICATION)
                .case_insensitive(true)
                .build()?,
        })
    }

    /// Scans request text and reports every keyword table hit.
    ///
    /// # Errors
    /// Returns [`RoutingError::InvalidInput`] if the text is empty or
    /// contains only whitespace.
    pub fn scan(&self, text: &str) -> Result<RequestSignal> {
        if text.trim().is_empty() {
            return Err(RoutingError::InvalidInput {
                input: text.to_owned(),
            });
        }

        Ok(RequestSignal {
            creation_verbs: self.creation.matches_in(text),
            modification_verbs: self.modification.matches_in(text),
            compound_phrase: self
                .compound
                .find(text)
                .map(|found| found.as_str().to_lowercase()),
            ui_keywords: self.ui.matches_in(text),
            logic_keywords: self.logic.matches_in(text),
            architecture_keywords: self.architecture.matches_in(text),
        })
    }
}

/// Keyword evidence extracted from a single request.
///
/// Every field holds canonical table entries, so two scans of the same
/// text compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSignal {
    /// Creation verbs found in the text, in table order
    pub creation_verbs: Vec<String>,
    /// Modification verbs found in the text, in table order
    pub modification_verbs: Vec<String>,
    /// First back-reference phrase such as "make it", lowercased
    pub compound_phrase: Option<String>,
    /// UI and styling keywords found in the text
    pub ui_keywords: Vec<String>,
    /// Logic and computation keywords found in the text
    pub logic_keywords: Vec<String>,
    /// Architecture and infrastructure keywords found in the text
    pub architecture_keywords: Vec<String>,
}

impl RequestSignal {
    /// Whether any creation verb matched.
    pub fn has_creation_verb(&self) -> bool {
        !self.creation_verbs.is_empty()
    }

    /// Whether any modification verb matched.
    pub fn has_modification_verb(&self) -> bool {
        !self.modification_verbs.is_empty()
    }

    /// Whether the text contains a phrase like "make it" that refers back
    /// to an app under discussion.
    pub fn is_compound_modification_phrase(&self) -> bool {
        self.compound_phrase.is_some()
    }

    /// Feature categories with at least one keyword hit, in fixed order.
    pub fn matched_categories(&self) -> Vec<FeatureCategory> {
        let mut categories = Vec::new();
        if !self.ui_keywords.is_empty() {
            categories.push(FeatureCategory::Ui);
        }
        if !self.logic_keywords.is_empty() {
            categories.push(FeatureCategory::Logic);
        }
        if !self.architecture_keywords.is_empty() {
            categories.push(FeatureCategory::Architecture);
        }
        categories
    }
}

/// Feature category detected in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    /// Visual appearance, styling, and interface work
    Ui,
    /// Computation, data handling, and performance work
    Logic,
    /// Structure, persistence, and infrastructure work
    Architecture,
}

impl FeatureCategory {
    /// Short lowercase label used in logs and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Logic => "logic",
            Self::Architecture => "architecture",
        }
    }
}

impl Display for FeatureCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Ui => write!(f, "UI"),
            Self::Logic => write!(f, "Logic"),
            Self::Architecture => write!(f, "Architecture"),
        }
    }
}
