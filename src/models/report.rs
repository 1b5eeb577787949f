//! Report Models

use scanbridge_core::ReportFormat;

/// Parameters for one report generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSpec {
    pub project_id: String,
    pub template_id: String,
    pub format: ReportFormat,
    pub include_table_of_contents: bool,
}

impl ReportSpec {
    /// Request with a table of contents included
    pub fn new(
        project_id: impl Into<String>,
        template_id: impl Into<String>,
        format: ReportFormat,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            template_id: template_id.into(),
            format,
            include_table_of_contents: true,
        }
    }

    pub fn with_table_of_contents(mut self, include: bool) -> Self {
        self.include_table_of_contents = include;
        self
    }
}
