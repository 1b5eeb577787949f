//! scanbridge RPC
//!
//! JSON-RPC 2.0 over HTTP(S) transport for the remote project service:
//! - `http_client` - reqwest client factory (timeout + proxy)
//! - `jsonrpc` - request/response envelopes and HTTP status mapping
//! - `client` - `RpcProjectService`, the `ProjectService` implementation

pub mod client;
pub mod http_client;
pub mod jsonrpc;

use thiserror::Error;

pub use client::{RpcClientConfig, RpcProjectService, DEFAULT_TIMEOUT_SECS};
pub use http_client::build_http_client;
pub use jsonrpc::{parse_http_error, JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Errors raised while constructing the transport, before any call is made.
#[derive(Error, Debug)]
pub enum RpcSetupError {
    /// The server URL could not be used as an RPC base.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// The proxy settings were rejected.
    #[error("Invalid proxy settings: {0}")]
    InvalidProxy(String),

    /// reqwest refused to build a client.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}
