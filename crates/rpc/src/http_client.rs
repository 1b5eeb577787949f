//! HTTP Client Factory
//!
//! Builds the reqwest client used by the JSON-RPC transport, with the
//! per-call timeout and optional proxy applied.

use std::time::Duration;

use scanbridge_core::proxy::ProxyConfig;

use crate::RpcSetupError;

/// Build a `reqwest::Client` with the resolved proxy configuration.
///
/// - `Some(proxy)` -> configure proxy on the client
/// - `None` -> explicitly disable proxy (`no_proxy`), ignoring env vars
pub fn build_http_client(
    proxy: Option<&ProxyConfig>,
    timeout: Duration,
) -> Result<reqwest::Client, RpcSetupError> {
    let mut builder = reqwest::Client::builder().timeout(timeout);
    match proxy {
        Some(cfg) => {
            cfg.validate().map_err(RpcSetupError::InvalidProxy)?;
            let url = cfg.url();
            let mut p = reqwest::Proxy::all(&url)
                .map_err(|e| RpcSetupError::InvalidProxy(format!("{}: {}", url, e)))?;
            if let Some((user, password)) = cfg.basic_auth() {
                p = p.basic_auth(user, password);
            }
            builder = builder.proxy(p);
        }
        None => {
            builder = builder.no_proxy();
        }
    }
    builder
        .build()
        .map_err(|e| RpcSetupError::Client(e.to_string()))
}
