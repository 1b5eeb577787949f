//! In-memory stand-in for the remote project service.
//!
//! Behaves like the real service for the calls scanbridge makes: unknown
//! names and ids answer with a "project not found" fault, a locked account
//! answers every call with "invalid credentials", and created or cloned
//! projects become visible to later lookups.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use scanbridge::ProjectService;
use scanbridge_core::fault::{INVALID_CREDENTIALS, PROJECT_NOT_FOUND, REPORT_TEMPLATE_NOT_FOUND};
use scanbridge_core::{
    CloneOption, CodeTreeNode, CodeTreeRequest, LicenseCategory, ObligationCategory, Project,
    ProjectRequest, RemoteFault, Report, ReportFormat, ReportTemplate, ServiceResult,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CloneRecord {
    pub source_id: String,
    pub new_name: String,
    pub options: Vec<CloneOption>,
    pub resets: Vec<ObligationCategory>,
}

#[derive(Default)]
struct State {
    projects: Vec<Project>,
    next_id: u64,
    creates: Vec<(ProjectRequest, LicenseCategory)>,
    clones: Vec<CloneRecord>,
    updates: Vec<(String, ProjectRequest)>,
    code_trees: HashMap<String, Vec<CodeTreeNode>>,
    templates: Vec<ReportTemplate>,
    remote_calls: usize,
}

#[derive(Default)]
pub struct InMemoryService {
    state: Mutex<State>,
    locked: bool,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service that rejects every call's credentials
    pub fn locked() -> Self {
        Self {
            locked: true,
            ..Self::default()
        }
    }

    pub fn with_template(self, id: &str, title: &str) -> Self {
        self.state.lock().unwrap().templates.push(ReportTemplate {
            report_template_id: id.to_string(),
            title: title.to_string(),
        });
        self
    }

    pub fn set_code_tree(&self, project_id: &str, nodes: Vec<CodeTreeNode>) {
        self.state
            .lock()
            .unwrap()
            .code_trees
            .insert(project_id.to_string(), nodes);
    }

    pub fn project_named(&self, name: &str) -> Option<Project> {
        self.state
            .lock()
            .unwrap()
            .projects
            .iter()
            .find(|p| p.name == name)
            .cloned()
    }

    pub fn creates(&self) -> usize {
        self.state.lock().unwrap().creates.len()
    }

    pub fn clones(&self) -> Vec<CloneRecord> {
        self.state.lock().unwrap().clones.clone()
    }

    pub fn updates(&self) -> usize {
        self.state.lock().unwrap().updates.len()
    }

    pub fn remote_calls(&self) -> usize {
        self.state.lock().unwrap().remote_calls
    }

    fn enter(&self) -> ServiceResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.remote_calls += 1;
        if self.locked {
            return Err(RemoteFault::new(INVALID_CREDENTIALS, "The user name or password is not valid").into());
        }
        Ok(state)
    }

    fn insert(state: &mut State, name: &str, description: Option<String>) -> String {
        state.next_id += 1;
        let id = format!("c_{}_{}", name.to_lowercase().replace(' ', "_"), state.next_id);
        state.projects.push(Project {
            project_id: id.clone(),
            name: name.to_string(),
            description,
            analysis_source_location: None,
        });
        id
    }
}

fn not_found(what: &str) -> RemoteFault {
    RemoteFault::new(PROJECT_NOT_FOUND, format!("Project '{}' was not found", what))
}

#[async_trait]
impl ProjectService for InMemoryService {
    async fn get_project_by_name(&self, name: &str) -> ServiceResult<Option<Project>> {
        let state = self.enter()?;
        match state.projects.iter().find(|p| p.name == name) {
            Some(p) => Ok(Some(p.clone())),
            None => Err(not_found(name).into()),
        }
    }

    async fn get_project_by_id(&self, project_id: &str) -> ServiceResult<Option<Project>> {
        let state = self.enter()?;
        match state.projects.iter().find(|p| p.project_id == project_id) {
            Some(p) => Ok(Some(p.clone())),
            None => Err(not_found(project_id).into()),
        }
    }

    async fn create_project(
        &self,
        request: &ProjectRequest,
        license_category: LicenseCategory,
    ) -> ServiceResult<String> {
        let mut state = self.enter()?;
        let name = request.name.clone().unwrap_or_default();
        if state.projects.iter().any(|p| p.name == name) {
            return Err(RemoteFault::new("duplicate project name", name).into());
        }
        state.creates.push((request.clone(), license_category));
        Ok(Self::insert(&mut state, &name, request.description.clone()))
    }

    async fn clone_project(
        &self,
        source_project_id: &str,
        new_name: &str,
        clone_options: &[CloneOption],
        reset_obligations: &[ObligationCategory],
    ) -> ServiceResult<String> {
        let mut state = self.enter()?;
        let source = state
            .projects
            .iter()
            .find(|p| p.project_id == source_project_id)
            .cloned()
            .ok_or_else(|| not_found(source_project_id))?;
        state.clones.push(CloneRecord {
            source_id: source_project_id.to_string(),
            new_name: new_name.to_string(),
            options: clone_options.to_vec(),
            resets: reset_obligations.to_vec(),
        });
        let id = Self::insert(&mut state, new_name, source.description.clone());
        if clone_options.contains(&CloneOption::AnalysisResults) {
            if let Some(nodes) = state.code_trees.get(source_project_id).cloned() {
                state.code_trees.insert(id.clone(), nodes);
            }
        }
        Ok(id)
    }

    async fn update_project(&self, project_id: &str, request: &ProjectRequest) -> ServiceResult<()> {
        let mut state = self.enter()?;
        state.updates.push((project_id.to_string(), request.clone()));
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.project_id == project_id)
            .ok_or_else(|| not_found(project_id))?;
        if let Some(location) = &request.analysis_source_location {
            project.analysis_source_location = Some(location.clone());
        }
        if let Some(description) = &request.description {
            project.description = Some(description.clone());
        }
        Ok(())
    }

    async fn get_code_tree_nodes(
        &self,
        project_id: &str,
        _root_path: &str,
        _request: &CodeTreeRequest,
    ) -> ServiceResult<Vec<CodeTreeNode>> {
        let state = self.enter()?;
        if !state.projects.iter().any(|p| p.project_id == project_id) {
            return Err(not_found(project_id).into());
        }
        Ok(state.code_trees.get(project_id).cloned().unwrap_or_default())
    }

    async fn get_report_template_by_title(&self, title: &str) -> ServiceResult<Option<ReportTemplate>> {
        let state = self.enter()?;
        Ok(state.templates.iter().find(|t| t.title == title).cloned())
    }

    async fn generate_project_report(
        &self,
        project_id: &str,
        report_template_id: &str,
        format: ReportFormat,
        _include_table_of_contents: bool,
    ) -> ServiceResult<Report> {
        let state = self.enter()?;
        let template = state
            .templates
            .iter()
            .find(|t| t.report_template_id == report_template_id)
            .ok_or_else(|| {
                RemoteFault::new(REPORT_TEMPLATE_NOT_FOUND, format!("No template {}", report_template_id))
            })?;
        let project = state
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
            .ok_or_else(|| not_found(project_id))?;
        let extension = match format {
            ReportFormat::Html => "html",
            ReportFormat::Xls => "xls",
            ReportFormat::Csv => "csv",
            ReportFormat::Pdf => "pdf",
            ReportFormat::MsWord => "doc",
        };
        Ok(Report {
            file_name: format!("{}.{}", template.title, extension),
            content: format!("{} for {}", template.title, project.name).into_bytes(),
        })
    }
}
