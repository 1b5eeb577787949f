//! JSON-RPC Project Service
//!
//! `ProjectService` implementation that posts JSON-RPC 2.0 requests to the
//! remote service over HTTP(S) with basic authentication.
//!
//! Every call is logged through the shared `LogGate`: the method name and
//! execution time at debug, the parameters at trace, and faults at warn.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use scanbridge_core::{
    gated, CloneOption, CodeTreeNode, CodeTreeRequest, ConnectivityError, LicenseCategory,
    LogGate, ObligationCategory, Project, ProjectRequest, ProjectService, ProxyConfig,
    RemoteFault, Report, ReportFormat, ReportTemplate, ServiceError, ServiceResult,
};

use super::http_client::build_http_client;
use super::jsonrpc::{parse_http_error, JsonRpcRequest, JsonRpcResponse};
use crate::RpcSetupError;

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Path of the RPC endpoint below the server URL.
const RPC_PATH: &str = "rpc";

/// Connection settings for the JSON-RPC transport.
#[derive(Debug, Clone)]
pub struct RpcClientConfig {
    pub server_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
    pub proxy: Option<ProxyConfig>,
}

impl RpcClientConfig {
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            username: username.into(),
            password: password.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
        }
    }
}

/// JSON-RPC transport to the remote project service.
pub struct RpcProjectService {
    client: reqwest::Client,
    endpoint: url::Url,
    username: String,
    password: String,
    gate: Arc<LogGate>,
    next_id: AtomicU64,
}

impl RpcProjectService {
    /// Create a transport from connection settings.
    pub fn new(config: RpcClientConfig) -> Result<Self, RpcSetupError> {
        let client = build_http_client(config.proxy.as_ref(), config.timeout)?;
        Self::with_reqwest_client(client, config)
    }

    /// Create a transport around an existing reqwest client.
    ///
    /// The client's own timeout and proxy settings win over `config`.
    pub fn with_reqwest_client(
        client: reqwest::Client,
        config: RpcClientConfig,
    ) -> Result<Self, RpcSetupError> {
        let endpoint = rpc_endpoint(&config.server_url)?;
        Ok(Self {
            client,
            endpoint,
            username: config.username,
            password: config.password,
            gate: Arc::new(LogGate::default()),
            next_id: AtomicU64::new(1),
        })
    }

    /// Share a verbosity gate with the owning client context.
    pub fn with_log_gate(mut self, gate: Arc<LogGate>) -> Self {
        self.gate = gate;
        self
    }

    pub fn log_gate(&self) -> &Arc<LogGate> {
        &self.gate
    }

    /// Fully resolved RPC endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, params: Value) -> ServiceResult<R> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        gated!(self.gate, debug, "Executing method : {}", method);
        gated!(self.gate, trace, "With input parameters : {}", params);

        let request = JsonRpcRequest::new(method, params, id);
        let started = Instant::now();

        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.username, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(connectivity_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(connectivity_error)?;

        gated!(
            self.gate,
            debug,
            "Execution time of method {} : {} ms",
            method,
            started.elapsed().as_millis()
        );

        let outcome = decode_body(status, &body);
        if let Err(fault) = &outcome {
            gated!(self.gate, warn, "Fault from method {} : {}", method, fault);
        }
        let value = outcome?;

        serde_json::from_value(value).map_err(|e| {
            ServiceError::Fault(RemoteFault::uncoded(format!(
                "Unexpected result shape from {}: {}",
                method, e
            )))
        })
    }
}

/// Turn a raw HTTP exchange into the untyped RPC result or a fault.
fn decode_body(status: u16, body: &str) -> Result<Value, RemoteFault> {
    if !(200..300).contains(&status) {
        // Some servers answer faults with a 500 and a JSON-RPC error body.
        if let Ok(envelope) = serde_json::from_str::<JsonRpcResponse>(body) {
            if envelope.error.is_some() {
                return envelope.into_result();
            }
        }
        return Err(parse_http_error(status, body));
    }

    let envelope: JsonRpcResponse = serde_json::from_str(body)
        .map_err(|e| RemoteFault::uncoded(format!("Malformed RPC response: {}", e)))?;
    envelope.into_result()
}

fn rpc_endpoint(server_url: &str) -> Result<url::Url, RpcSetupError> {
    let mut base = url::Url::parse(server_url.trim())
        .map_err(|e| RpcSetupError::InvalidUrl(format!("{}: {}", server_url, e)))?;
    if base.cannot_be_a_base() {
        return Err(RpcSetupError::InvalidUrl(format!(
            "{}: not a hierarchical URL",
            server_url
        )));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(RPC_PATH)
        .map_err(|e| RpcSetupError::InvalidUrl(format!("{}: {}", server_url, e)))
}

fn connectivity_error(err: reqwest::Error) -> ServiceError {
    let err = if err.is_timeout() {
        ConnectivityError::timeout(format!("Request timed out: {}", err))
    } else if err.is_connect() {
        ConnectivityError::new(format!("Connection failed: {}", err))
    } else {
        ConnectivityError::new(err.to_string())
    };
    ServiceError::Connectivity(err)
}

/// Report payload as sent on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportPayload {
    file_name: String,
    #[serde(default)]
    file_content: String,
}

impl ReportPayload {
    fn decode(self) -> ServiceResult<Report> {
        let content = BASE64.decode(self.file_content.as_bytes()).map_err(|e| {
            ServiceError::Fault(RemoteFault::uncoded(format!(
                "Report '{}' content is not valid base64: {}",
                self.file_name, e
            )))
        })?;
        Ok(Report {
            file_name: self.file_name,
            content,
        })
    }
}

#[async_trait]
impl ProjectService for RpcProjectService {
    async fn get_project_by_name(&self, name: &str) -> ServiceResult<Option<Project>> {
        self.call("project.getProjectByName", json!({ "name": name }))
            .await
    }

    async fn get_project_by_id(&self, project_id: &str) -> ServiceResult<Option<Project>> {
        self.call("project.getProjectById", json!({ "projectId": project_id }))
            .await
    }

    async fn create_project(
        &self,
        request: &ProjectRequest,
        license_category: LicenseCategory,
    ) -> ServiceResult<String> {
        self.call(
            "project.createProject",
            json!({
                "projectRequest": request,
                "licenseCategory": license_category,
            }),
        )
        .await
    }

    async fn clone_project(
        &self,
        source_project_id: &str,
        new_name: &str,
        clone_options: &[CloneOption],
        reset_obligations: &[ObligationCategory],
    ) -> ServiceResult<String> {
        self.call(
            "project.cloneProject",
            json!({
                "projectId": source_project_id,
                "newProjectName": new_name,
                "cloneOptions": clone_options,
                "resetObligationCategories": reset_obligations,
            }),
        )
        .await
    }

    async fn update_project(&self, project_id: &str, request: &ProjectRequest) -> ServiceResult<()> {
        let _: Value = self
            .call(
                "project.updateProject",
                json!({
                    "projectId": project_id,
                    "projectRequest": request,
                }),
            )
            .await?;
        Ok(())
    }

    async fn get_code_tree_nodes(
        &self,
        project_id: &str,
        root_path: &str,
        request: &CodeTreeRequest,
    ) -> ServiceResult<Vec<CodeTreeNode>> {
        let nodes: Option<Vec<CodeTreeNode>> = self
            .call(
                "codetree.getCodeTreeNodes",
                json!({
                    "projectId": project_id,
                    "parentPath": root_path,
                    "nodeRequest": request,
                }),
            )
            .await?;
        Ok(nodes.unwrap_or_default())
    }

    async fn get_report_template_by_title(&self, title: &str) -> ServiceResult<Option<ReportTemplate>> {
        self.call("report.getReportTemplateByTitle", json!({ "title": title }))
            .await
    }

    async fn generate_project_report(
        &self,
        project_id: &str,
        report_template_id: &str,
        format: ReportFormat,
        include_table_of_contents: bool,
    ) -> ServiceResult<Report> {
        let payload: ReportPayload = self
            .call(
                "report.generateProjectReport",
                json!({
                    "projectId": project_id,
                    "reportTemplateId": report_template_id,
                    "format": format,
                    "includeTableOfContents": include_table_of_contents,
                }),
            )
            .await?;
        payload.decode()
    }
}
