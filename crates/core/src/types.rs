//! Remote Service Types
//!
//! Value types exchanged with the remote project service. Field names follow
//! the service's camelCase wire format; enum values are SCREAMING_SNAKE_CASE.

use serde::{Deserialize, Serialize};

// ============================================================================
// Projects
// ============================================================================

/// A project as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_source_location: Option<SourceLocation>,
}

/// Kind of repository the scanner reads source from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepositoryKind {
    /// Source is uploaded from the scanning host.
    LocalProxy,
    /// Source lives on a server-side share.
    RemoteServer,
}

/// Where scan input for a project is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub hostname: String,
    #[serde(rename = "repository")]
    pub repository_kind: RepositoryKind,
    pub source_path: String,
}

impl SourceLocation {
    /// Location served by a local scanning proxy on `hostname`.
    pub fn local_proxy(hostname: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            repository_kind: RepositoryKind::LocalProxy,
            source_path: source_path.into(),
        }
    }
}

/// Partial project payload used by create and update calls.
///
/// Only the populated fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_source_location: Option<SourceLocation>,
}

impl ProjectRequest {
    /// Request creating a project with a name and description.
    pub fn create(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// Request replacing only the analysis source location.
    pub fn source_location(location: SourceLocation) -> Self {
        Self {
            analysis_source_location: Some(location),
            ..Default::default()
        }
    }
}

/// License category assigned to a newly created project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseCategory {
    #[default]
    Proprietary,
    OpenSource,
}

/// What a clone carries over from its source project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CloneOption {
    AnalysisResults,
    CompletedWork,
    AssignedUsers,
}

impl CloneOption {
    pub const ALL: [CloneOption; 3] = [
        CloneOption::AnalysisResults,
        CloneOption::CompletedWork,
        CloneOption::AssignedUsers,
    ];
}

/// Obligation category whose fulfillments a clone may reset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationCategory {
    pub obligation_category_id: String,
    pub name: String,
}

// ============================================================================
// Code Tree
// ============================================================================

/// Node types in the remote code tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    File,
    Folder,
    ExpandedArchive,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [NodeType::File, NodeType::Folder, NodeType::ExpandedArchive];
}

/// Count categories a code-tree node can be annotated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeCountType {
    /// Files awaiting manual identification.
    PendingIdAll,
    /// Files in breach of policy.
    Violations,
    /// Any count category this client does not model.
    #[serde(other)]
    Unknown,
}

/// One count annotation on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCount {
    pub count_type: NodeCountType,
    pub count: i64,
}

/// One node returned by a code-tree query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeTreeNode {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    #[serde(default)]
    pub node_counts: Vec<NodeCount>,
}

impl CodeTreeNode {
    pub fn new(name: impl Into<String>, counts: impl IntoIterator<Item = (NodeCountType, i64)>) -> Self {
        Self {
            name: name.into(),
            node_type: None,
            node_counts: counts
                .into_iter()
                .map(|(count_type, count)| NodeCount { count_type, count })
                .collect(),
        }
    }

    /// Value of one count category, if this node defines it.
    pub fn count(&self, count_type: NodeCountType) -> Option<i64> {
        self.node_counts
            .iter()
            .rev()
            .find(|c| c.count_type == count_type)
            .map(|c| c.count)
    }
}

/// Depth value meaning "recurse through the whole tree".
pub const INFINITE_DEPTH: i32 = -1;

/// Root path of every project's code tree.
pub const CODE_TREE_ROOT: &str = "/";

/// Parameters of a hierarchical node-count query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeTreeRequest {
    pub included_node_types: Vec<NodeType>,
    pub counts: Vec<NodeCountType>,
    pub depth: i32,
    pub include_parent_node: bool,
}

impl CodeTreeRequest {
    /// Full-depth query over every node type, parent included, requesting a
    /// single count category.
    pub fn counting(count_type: NodeCountType) -> Self {
        Self {
            included_node_types: NodeType::ALL.to_vec(),
            counts: vec![count_type],
            depth: INFINITE_DEPTH,
            include_parent_node: true,
        }
    }
}

// ============================================================================
// Reports
// ============================================================================

/// A report template known to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplate {
    pub report_template_id: String,
    pub title: String,
}

/// Output format of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportFormat {
    Html,
    Xls,
    Csv,
    Pdf,
    MsWord,
}

/// A generated report document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub file_name: String,
    pub content: Vec<u8>,
}
