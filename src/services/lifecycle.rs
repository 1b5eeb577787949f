//! Project Lifecycle
//!
//! Name-based project operations: existence checks, id resolution, and
//! idempotent create-or-clone.

use scanbridge_core::{
    gated, translate, ErrorKind, LicenseCategory, ProjectRequest, ProjectService,
    ServiceError,
};

use crate::models::project::{
    CloneSpec, ProjectRef, DEFAULT_PROJECT_DESCRIPTION, MAX_PROJECT_NAME_LEN,
};
use crate::services::context::ClientContext;
use crate::utils::error::{BridgeError, BridgeResult};
use crate::utils::validation::{is_blank, require_non_blank};

pub struct ProjectLifecycle<'a, S> {
    ctx: &'a ClientContext<S>,
}

impl<'a, S: ProjectService> ProjectLifecycle<'a, S> {
    pub fn new(ctx: &'a ClientContext<S>) -> Self {
        Self { ctx }
    }

    /// Whether a project with this name exists.
    ///
    /// Only a not-found answer means `false`; every other fault propagates.
    pub async fn exists(&self, name: &str) -> BridgeResult<bool> {
        require_non_blank(name, "project name")?;

        match self.ctx.service().get_project_by_name(name).await {
            Ok(project) => Ok(project.is_some()),
            Err(ServiceError::Connectivity(err)) => Err(err.into()),
            Err(ServiceError::Fault(fault)) => {
                let translated = translate(&fault);
                if translated.kind == ErrorKind::NotFound {
                    return Ok(false);
                }
                Err(BridgeError::from_fault(
                    &format!("Failed to look up project '{}'", name),
                    translated,
                ))
            }
        }
    }

    /// Resolve a project name to its remote id.
    pub async fn resolve_id(&self, name: &str) -> BridgeResult<String> {
        require_non_blank(name, "project name")?;

        let project = match self.ctx.service().get_project_by_name(name).await {
            Ok(project) => project,
            Err(ServiceError::Connectivity(err)) => return Err(err.into()),
            Err(ServiceError::Fault(fault)) => {
                let translated = translate(&fault);
                let context = match translated.kind {
                    ErrorKind::NotFound => format!("The project '{}' does not exist", name),
                    ErrorKind::Credential => format!(
                        "The credentials were rejected while looking up project '{}'",
                        name
                    ),
                    _ => format!("Failed to look up project '{}'", name),
                };
                return Err(BridgeError::from_fault(&context, translated));
            }
        };

        match project {
            None => Err(BridgeError::not_found(format!(
                "The project '{}' does not exist",
                name
            ))),
            Some(p) if is_blank(&p.project_id) => Err(BridgeError::remote_service(format!(
                "The service returned project '{}' without an id",
                name
            ))),
            Some(p) => Ok(p.project_id),
        }
    }

    /// Resolve a project name to a ref carrying its id.
    pub async fn resolve(&self, name: &str) -> BridgeResult<ProjectRef> {
        let id = self.resolve_id(name).await?;
        Ok(ProjectRef::resolved(id, name))
    }

    /// Create `name`, or clone it from `clone_from` when that is non-blank.
    ///
    /// Fails with `AlreadyExists` when the name already resolves, without
    /// attempting a create.
    pub async fn ensure_created(
        &self,
        name: &str,
        clone_from: Option<&str>,
    ) -> BridgeResult<ProjectRef> {
        require_non_blank(name, "project name")?;
        if name.chars().count() >= MAX_PROJECT_NAME_LEN {
            return Err(BridgeError::validation(format!(
                "The project name must be shorter than {} characters",
                MAX_PROJECT_NAME_LEN
            )));
        }

        if self.exists(name).await? {
            return Err(BridgeError::already_exists(format!(
                "The project '{}' already exists",
                name
            )));
        }

        if let Some(source) = clone_from.filter(|s| !is_blank(s)) {
            return self.clone(name, source).await;
        }

        let request = ProjectRequest::create(name, DEFAULT_PROJECT_DESCRIPTION);
        let id = self
            .ctx
            .service()
            .create_project(&request, LicenseCategory::Proprietary)
            .await
            .map_err(|e| {
                BridgeError::from_service(&format!("Failed to create project '{}'", name), e)
            })?;

        if is_blank(&id) {
            return Err(BridgeError::remote_service(format!(
                "The service returned no id for new project '{}'",
                name
            )));
        }

        gated!(self.ctx.log_gate(), info, "Created project '{}' with id {}", name, id);
        Ok(ProjectRef::resolved(id, name))
    }

    /// Clone `source_name` into a new project called `new_name`.
    pub async fn clone(&self, new_name: &str, source_name: &str) -> BridgeResult<ProjectRef> {
        match (is_blank(new_name), is_blank(source_name)) {
            (true, true) => {
                return Err(BridgeError::validation(
                    "Both the new project name and the source project name are required",
                ))
            }
            (true, false) => require_non_blank(new_name, "new project name")?,
            (false, true) => require_non_blank(source_name, "source project name")?,
            (false, false) => {}
        }

        let spec = CloneSpec::new(source_name, new_name);
        let source_id = self.resolve_id(&spec.source_name).await?;

        let id = self
            .ctx
            .service()
            .clone_project(
                &source_id,
                &spec.new_name,
                spec.carry_options(),
                spec.reset_obligations(),
            )
            .await
            .map_err(|e| {
                BridgeError::from_service(
                    &format!(
                        "Failed to clone project '{}' from '{}'",
                        spec.new_name, spec.source_name
                    ),
                    e,
                )
            })?;

        if is_blank(&id) {
            return Err(BridgeError::remote_service(format!(
                "The service returned no id for cloned project '{}'",
                spec.new_name
            )));
        }

        gated!(
            self.ctx.log_gate(),
            info,
            "Cloned project '{}' from '{}' with id {}",
            spec.new_name,
            spec.source_name,
            id
        );
        Ok(ProjectRef::resolved(id, spec.new_name))
    }
}
