//! Scripted `ProjectService` for unit tests.
//!
//! Each method answers from a preset response and records the call.
//! Methods without a preset panic, so a test fails if it reaches the service
//! unexpectedly.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use scanbridge_core::{
    CloneOption, CodeTreeNode, CodeTreeRequest, LicenseCategory, LogGate, LogLevel,
    ObligationCategory, Project, ProjectRequest, ProjectService, Report, ReportFormat,
    ReportTemplate, ServiceResult,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetByName(String),
    GetById(String),
    Create(ProjectRequest, LicenseCategory),
    Clone {
        source_id: String,
        new_name: String,
        options: Vec<CloneOption>,
        resets: usize,
    },
    Update(String, ProjectRequest),
    CodeTree(String, String, CodeTreeRequest),
    Template(String),
    Generate(String, String, ReportFormat, bool),
}

#[derive(Default)]
pub struct MockService {
    pub by_name: HashMap<String, ServiceResult<Option<Project>>>,
    pub by_id: Option<ServiceResult<Option<Project>>>,
    pub create: Option<ServiceResult<String>>,
    pub clone: Option<ServiceResult<String>>,
    pub update: Option<ServiceResult<()>>,
    pub nodes: Option<ServiceResult<Vec<CodeTreeNode>>>,
    pub template: Option<ServiceResult<Option<ReportTemplate>>>,
    pub report: Option<ServiceResult<Report>>,
    /// Gate whose level is sampled on every call
    pub observed_gate: Option<Arc<LogGate>>,
    pub observed_levels: Mutex<Vec<LogLevel>>,
    pub calls: Mutex<Vec<Call>>,
}

impl MockService {
    pub fn project(id: &str, name: &str) -> Project {
        Project {
            project_id: id.to_string(),
            name: name.to_string(),
            description: None,
            analysis_source_location: None,
        }
    }

    pub fn with_name(mut self, name: &str, result: ServiceResult<Option<Project>>) -> Self {
        self.by_name.insert(name.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        if let Some(gate) = &self.observed_gate {
            self.observed_levels.lock().unwrap().push(gate.level());
        }
        self.calls.lock().unwrap().push(call);
    }

    fn preset<T: Clone>(slot: &Option<ServiceResult<T>>, method: &str) -> ServiceResult<T> {
        slot.clone()
            .unwrap_or_else(|| panic!("unexpected call to {}", method))
    }
}

#[async_trait]
impl ProjectService for MockService {
    async fn get_project_by_name(&self, name: &str) -> ServiceResult<Option<Project>> {
        self.record(Call::GetByName(name.to_string()));
        self.by_name
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("unexpected lookup of '{}'", name))
    }

    async fn get_project_by_id(&self, project_id: &str) -> ServiceResult<Option<Project>> {
        self.record(Call::GetById(project_id.to_string()));
        Self::preset(&self.by_id, "get_project_by_id")
    }

    async fn create_project(
        &self,
        request: &ProjectRequest,
        license_category: LicenseCategory,
    ) -> ServiceResult<String> {
        self.record(Call::Create(request.clone(), license_category));
        Self::preset(&self.create, "create_project")
    }

    async fn clone_project(
        &self,
        source_project_id: &str,
        new_name: &str,
        clone_options: &[CloneOption],
        reset_obligations: &[ObligationCategory],
    ) -> ServiceResult<String> {
        self.record(Call::Clone {
            source_id: source_project_id.to_string(),
            new_name: new_name.to_string(),
            options: clone_options.to_vec(),
            resets: reset_obligations.len(),
        });
        Self::preset(&self.clone, "clone_project")
    }

    async fn update_project(&self, project_id: &str, request: &ProjectRequest) -> ServiceResult<()> {
        self.record(Call::Update(project_id.to_string(), request.clone()));
        Self::preset(&self.update, "update_project")
    }

    async fn get_code_tree_nodes(
        &self,
        project_id: &str,
        root_path: &str,
        request: &CodeTreeRequest,
    ) -> ServiceResult<Vec<CodeTreeNode>> {
        self.record(Call::CodeTree(
            project_id.to_string(),
            root_path.to_string(),
            request.clone(),
        ));
        Self::preset(&self.nodes, "get_code_tree_nodes")
    }

    async fn get_report_template_by_title(&self, title: &str) -> ServiceResult<Option<ReportTemplate>> {
        self.record(Call::Template(title.to_string()));
        Self::preset(&self.template, "get_report_template_by_title")
    }

    async fn generate_project_report(
        &self,
        project_id: &str,
        report_template_id: &str,
        format: ReportFormat,
        include_table_of_contents: bool,
    ) -> ServiceResult<Report> {
        self.record(Call::Generate(
            project_id.to_string(),
            report_template_id.to_string(),
            format,
            include_table_of_contents,
        ));
        Self::preset(&self.report, "generate_project_report")
    }
}
