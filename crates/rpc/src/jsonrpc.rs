//! JSON-RPC 2.0 Envelopes
//!
//! Request/response framing for calls to the remote project service, and the
//! mapping from JSON-RPC errors and HTTP statuses onto `RemoteFault`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use scanbridge_core::fault::INVALID_CREDENTIALS;
use scanbridge_core::RemoteFault;

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Must be "2.0".
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
    /// Request identifier for correlating responses.
    pub id: u64,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, params: Value, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// A JSON-RPC 2.0 error object.
///
/// Application faults carry their fault code in `data.errorCode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Application fault code, when the service attached one.
    pub fn fault_code(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.get("errorCode"))
            .and_then(Value::as_str)
    }

    pub fn into_fault(self) -> RemoteFault {
        RemoteFault {
            code: self.fault_code().map(str::to_string),
            message: self.message,
        }
    }
}

/// A JSON-RPC 2.0 response.
///
/// `result` stays untyped until the error branch has been ruled out, so a
/// `null` result can still mean "nothing found" for lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    #[serde(default)]
    pub id: Value,
}

impl JsonRpcResponse {
    /// Extract the raw result (`Value::Null` when absent) or the fault.
    pub fn into_result(self) -> Result<Value, RemoteFault> {
        if let Some(err) = self.error {
            return Err(err.into_fault());
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// Map a non-success HTTP status onto a fault.
pub fn parse_http_error(status: u16, body: &str) -> RemoteFault {
    match status {
        401 | 403 => RemoteFault::new(
            INVALID_CREDENTIALS,
            "The user name or password provided was not valid.",
        ),
        404 => RemoteFault::uncoded(format!("HTTP 404: RPC endpoint not found: {}", body)),
        500..=599 => RemoteFault::uncoded(format!("HTTP {}: server error: {}", status, body)),
        _ => RemoteFault::uncoded(format!("HTTP {}: {}", status, body)),
    }
}
