//! Report Requests
//!
//! Resolves report templates by title and asks the service to generate
//! project reports from them.

use scanbridge_core::{
    gated, translate, ErrorKind, ProjectService, Report, ReportTemplate, ServiceError,
};

use crate::models::report::ReportSpec;
use crate::services::context::ClientContext;
use crate::utils::error::{BridgeError, BridgeResult};
use crate::utils::validation::require_non_blank;

pub struct ReportRequester<'a, S> {
    ctx: &'a ClientContext<S>,
}

impl<'a, S: ProjectService> ReportRequester<'a, S> {
    pub fn new(ctx: &'a ClientContext<S>) -> Self {
        Self { ctx }
    }

    /// Look up a report template by its exact title.
    pub async fn find_template(&self, title: &str) -> BridgeResult<ReportTemplate> {
        require_non_blank(title, "report template title")?;

        let context = format!("Failed to find the report template '{}'", title);
        match self.ctx.service().get_report_template_by_title(title).await {
            Ok(Some(template)) => Ok(template),
            Ok(None) => Err(BridgeError::not_found(format!(
                "The report template '{}' does not exist",
                title
            ))),
            Err(ServiceError::Connectivity(err)) => Err(err.into()),
            Err(ServiceError::Fault(fault)) => {
                let translated = translate(&fault);
                if translated.kind == ErrorKind::NotFound {
                    Err(BridgeError::from_fault(&context, translated))
                } else {
                    Err(BridgeError::remote_fault(&context, translated))
                }
            }
        }
    }

    /// Generate a report for a project from a template.
    pub async fn generate(&self, spec: &ReportSpec) -> BridgeResult<Report> {
        require_non_blank(&spec.project_id, "project id")?;
        require_non_blank(&spec.template_id, "report template id")?;

        let report = self
            .ctx
            .service()
            .generate_project_report(
                &spec.project_id,
                &spec.template_id,
                spec.format,
                spec.include_table_of_contents,
            )
            .await
            .map_err(|e| {
                BridgeError::remote_service_from(
                    &format!(
                        "Failed to generate report {} for project {}",
                        spec.template_id, spec.project_id
                    ),
                    e,
                )
            })?;

        gated!(
            self.ctx.log_gate(),
            info,
            "Generated report {} ({} bytes) for project {}",
            report.file_name,
            report.content.len(),
            spec.project_id
        );
        Ok(report)
    }
}
