//! Metric Models

use serde::{Deserialize, Serialize};

use scanbridge_core::NodeCountType;

/// Scalar metrics derived from code-tree node counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Files still waiting for identification
    PendingIdentification,
    /// License or policy violations
    Violations,
}

impl MetricKind {
    /// The node count requested from the code tree for this metric
    pub fn count_type(self) -> NodeCountType {
        match self {
            MetricKind::PendingIdentification => NodeCountType::PendingIdAll,
            MetricKind::Violations => NodeCountType::Violations,
        }
    }
}

/// A request to measure one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricQuery {
    pub kind: MetricKind,
}

impl MetricQuery {
    pub fn new(kind: MetricKind) -> Self {
        Self { kind }
    }
}

impl From<MetricKind> for MetricQuery {
    fn from(kind: MetricKind) -> Self {
        Self::new(kind)
    }
}
