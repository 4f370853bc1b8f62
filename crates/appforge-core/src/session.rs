use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Caller-assigned identifier for a generated project.
///
/// The router never generates identifiers itself; they come from the
/// session/project store and are echoed back in explanations and logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Read-only session state supplied by the caller for each routing call.
///
/// Created when a user session starts and updated by the external pipeline
/// after each successful generation or modification. The router only reads
/// it; identical session values always produce identical decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Whether a generated project is currently active in this session
    pub has_active_project: bool,
    /// Identifier of the active project, when one exists
    pub project_id: Option<ProjectId>,
    /// Number of modifications already applied in this session
    pub prior_modification_count: u32,
}

impl SessionContext {
    /// Session with no active project.
    #[must_use]
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Session with the given project active.
    #[must_use]
    pub fn active(project_id: ProjectId) -> Self {
        Self {
            has_active_project: true,
            project_id: Some(project_id),
            prior_modification_count: 0,
        }
    }

    /// Sets the number of modifications already applied this session.
    #[must_use]
    pub fn with_prior_modifications(mut self, count: u32) -> Self {
        self.prior_modification_count = count;
        self
    }
}
