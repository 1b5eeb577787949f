//! Project Service Trait
//!
//! The remote primitives scanbridge orchestrates. Every method is one remote
//! round trip and either yields a value, a structured fault, or a
//! connectivity error.

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::types::{
    CloneOption, CodeTreeNode, CodeTreeRequest, LicenseCategory, ObligationCategory, Project,
    ProjectRequest, Report, ReportFormat, ReportTemplate,
};

/// Trait implemented by every transport to the remote project service.
///
/// Lookups return `Ok(None)` when the service answers with an empty result
/// rather than a fault.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Look a project up by its unique name.
    async fn get_project_by_name(&self, name: &str) -> ServiceResult<Option<Project>>;

    /// Look a project up by its id.
    async fn get_project_by_id(&self, project_id: &str) -> ServiceResult<Option<Project>>;

    /// Create a project and return its new id.
    async fn create_project(
        &self,
        request: &ProjectRequest,
        license_category: LicenseCategory,
    ) -> ServiceResult<String>;

    /// Clone an existing project under a new name and return the new id.
    async fn clone_project(
        &self,
        source_project_id: &str,
        new_name: &str,
        clone_options: &[CloneOption],
        reset_obligations: &[ObligationCategory],
    ) -> ServiceResult<String>;

    /// Apply the populated fields of `request` to a project.
    async fn update_project(&self, project_id: &str, request: &ProjectRequest) -> ServiceResult<()>;

    /// Query code-tree nodes below `root_path`.
    async fn get_code_tree_nodes(
        &self,
        project_id: &str,
        root_path: &str,
        request: &CodeTreeRequest,
    ) -> ServiceResult<Vec<CodeTreeNode>>;

    /// Look a report template up by title.
    async fn get_report_template_by_title(&self, title: &str) -> ServiceResult<Option<ReportTemplate>>;

    /// Generate a report for a project from a template.
    async fn generate_project_report(
        &self,
        project_id: &str,
        report_template_id: &str,
        format: ReportFormat,
        include_table_of_contents: bool,
    ) -> ServiceResult<Report>;
}
