//! Scan Source Configuration
//!
//! Keeps a project's analysis source location pointed at the desired host
//! and path, updating the project only when it differs.

use scanbridge_core::{gated, ProjectRequest, ProjectService, SourceLocation};

use crate::services::context::ClientContext;
use crate::utils::error::{BridgeError, BridgeResult};
use crate::utils::validation::require_non_blank;

pub struct SourceConfigurator<'a, S> {
    ctx: &'a ClientContext<S>,
}

impl<'a, S: ProjectService> SourceConfigurator<'a, S> {
    pub fn new(ctx: &'a ClientContext<S>) -> Self {
        Self { ctx }
    }

    /// Point the project at `desired`. Returns true if an update was issued.
    pub async fn ensure_source_location(
        &self,
        project_id: &str,
        desired: &SourceLocation,
    ) -> BridgeResult<bool> {
        require_non_blank(project_id, "project id")?;
        require_non_blank(&desired.hostname, "source hostname")?;
        require_non_blank(&desired.source_path, "source path")?;

        let project = self
            .ctx
            .service()
            .get_project_by_id(project_id)
            .await
            .map_err(|e| {
                BridgeError::remote_service_from(
                    "Failed to get the project to check its analysis source location",
                    e,
                )
            })?
            .ok_or_else(|| {
                BridgeError::remote_service(format!(
                    "Failed to get the project to check its analysis source location : project {} was not returned",
                    project_id
                ))
            })?;

        if project.analysis_source_location.as_ref() == Some(desired) {
            gated!(
                self.ctx.log_gate(),
                debug,
                "Project {} already reads source from {}:{}",
                project_id,
                desired.hostname,
                desired.source_path
            );
            return Ok(false);
        }

        let request = ProjectRequest::source_location(desired.clone());
        self.ctx
            .service()
            .update_project(project_id, &request)
            .await
            .map_err(|e| {
                BridgeError::remote_service_from(
                    "Failed to update the analysis source location of the project",
                    e,
                )
            })?;

        gated!(
            self.ctx.log_gate(),
            info,
            "Project {} now reads source from {}:{} ({:?})",
            project_id,
            desired.hostname,
            desired.source_path,
            desired.repository_kind
        );
        Ok(true)
    }
}
