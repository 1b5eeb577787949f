//! Project Models
//!
//! Local handles for remote projects and the fixed clone policy.

use serde::{Deserialize, Serialize};

use scanbridge_core::{CloneOption, ObligationCategory};

/// Project names must be strictly shorter than this many characters.
pub const MAX_PROJECT_NAME_LEN: usize = 250;

/// Description given to projects created without a template.
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Project created by scanbridge";

/// A project known by name and, once resolved, by remote id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Remote project id; always present on refs returned by create, clone or resolve
    pub id: Option<String>,
    pub name: String,
}

impl ProjectRef {
    /// A ref that has not been resolved against the remote service yet
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// A ref carrying its remote id
    pub fn resolved(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// What a clone carries over from its source project.
///
/// The carried options and the obligation reset set are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneSpec {
    pub source_name: String,
    pub new_name: String,
}

impl CloneSpec {
    pub fn new(source_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            new_name: new_name.into(),
        }
    }

    /// Analysis results, completed work and assigned users.
    pub fn carry_options(&self) -> &'static [CloneOption] {
        &CloneOption::ALL
    }

    /// No obligation categories are reset.
    pub fn reset_obligations(&self) -> &'static [ObligationCategory] {
        &[]
    }
}
