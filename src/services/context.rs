//! Client Context
//!
//! Owns the remote service handle and the log verbosity gate it shares with
//! the transport. Every orchestration component borrows the context for the
//! duration of one call.

use std::sync::Arc;

use scanbridge_core::{gated, LogGate, ProjectService};
use scanbridge_rpc::{RpcClientConfig, RpcProjectService};

use crate::models::settings::ServerSettings;
use crate::services::lifecycle::ProjectLifecycle;
use crate::services::metrics::MetricsAggregator;
use crate::services::reports::ReportRequester;
use crate::services::source::SourceConfigurator;
use crate::services::validator::ConnectionValidator;
use crate::storage::secrets::resolve_password;
use crate::utils::error::{BridgeError, BridgeResult};

/// Handle to one remote service plus its verbosity gate.
///
/// A context serves one in-flight call at a time.
pub struct ClientContext<S = RpcProjectService> {
    service: S,
    log_gate: Arc<LogGate>,
}

impl<S: ProjectService> ClientContext<S> {
    /// Wrap a service with a fresh gate at the default level
    pub fn new(service: S) -> Self {
        Self::with_log_gate(service, Arc::new(LogGate::default()))
    }

    /// Wrap a service, sharing an existing gate
    pub fn with_log_gate(service: S, log_gate: Arc<LogGate>) -> Self {
        Self { service, log_gate }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn log_gate(&self) -> &Arc<LogGate> {
        &self.log_gate
    }

    pub fn validator(&self) -> ConnectionValidator<'_, S> {
        ConnectionValidator::new(self)
    }

    pub fn projects(&self) -> ProjectLifecycle<'_, S> {
        ProjectLifecycle::new(self)
    }

    pub fn sources(&self) -> SourceConfigurator<'_, S> {
        SourceConfigurator::new(self)
    }

    pub fn metrics(&self) -> MetricsAggregator<'_, S> {
        MetricsAggregator::new(self)
    }

    pub fn reports(&self) -> ReportRequester<'_, S> {
        ReportRequester::new(self)
    }
}

impl ClientContext<RpcProjectService> {
    /// Build a JSON-RPC backed context from settings.
    ///
    /// Resolves the password source and shares one gate between the context
    /// and the transport. Makes no remote call; use `validator()` for that.
    pub fn connect(settings: &ServerSettings) -> BridgeResult<Self> {
        settings.validate().map_err(BridgeError::config)?;
        let password = resolve_password(&settings.password)?;

        let config = RpcClientConfig {
            server_url: settings.server_url.trim().to_string(),
            username: settings.username.clone(),
            password,
            timeout: settings.timeout(),
            proxy: settings.proxy.clone(),
        };

        let log_gate = Arc::new(LogGate::new(settings.log_level));
        let service = RpcProjectService::new(config)
            .map_err(|e| BridgeError::config(e.to_string()))?
            .with_log_gate(log_gate.clone());

        gated!(log_gate, debug, "Client configured for endpoint {}", service.endpoint());

        Ok(Self::with_log_gate(service, log_gate))
    }
}
