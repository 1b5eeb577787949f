//! Core Error Types
//!
//! Defines the raw failure shapes a remote project service can produce and the
//! closed `ErrorKind` taxonomy they are translated into.
//!
//! A service call fails in exactly one of two ways:
//! - the remote application layer answered with a structured fault (`RemoteFault`)
//! - the transport never got an answer (`ConnectivityError`)
//!
//! Only the first is ever translated. Connectivity failures travel to the
//! caller untouched.

use std::fmt;

use thiserror::Error;

/// Closed set of failure categories surfaced by scanbridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied a blank, missing or out-of-range argument.
    Validation,
    /// Transport/DNS/network-level failure.
    Connectivity,
    /// The remote service rejected the credentials.
    Credential,
    /// Connection validation failed (wraps a translated fault).
    CredentialValidation,
    /// Requested named resource does not exist remotely.
    NotFound,
    /// Attempted create of a name that already resolves to a project.
    AlreadyExists,
    /// Any other remote fault, or a structurally invalid remote response.
    RemoteService,
    /// A code-tree metric could not be determined from the returned nodes.
    Aggregation,
    /// Local settings or secrets could not be loaded.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Connectivity => "connectivity",
            ErrorKind::Credential => "credential",
            ErrorKind::CredentialValidation => "credential_validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::RemoteService => "remote_service",
            ErrorKind::Aggregation => "aggregation",
            ErrorKind::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

/// A structured fault returned by the remote service's application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFault {
    /// Fault code, if the service supplied a recognizable one.
    pub code: Option<String>,
    /// Human-readable message from the service.
    pub message: String,
}

impl RemoteFault {
    /// Create a fault carrying a code.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Create a fault with no code (message only).
    pub fn uncoded(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for RemoteFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} (error code: {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

/// Transport-level failure: DNS, connect, TLS, timeout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Connection error: {message}")]
pub struct ConnectivityError {
    pub message: String,
    /// Set when the per-call timeout elapsed.
    pub timed_out: bool,
}

impl ConnectivityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }
}

/// Normalized result of fault translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TranslatedFault {
    pub kind: ErrorKind,
    pub remote_code: Option<String>,
    pub message: String,
}

impl TranslatedFault {
    /// Message with the remote code appended when present.
    pub fn describe(&self) -> String {
        match &self.remote_code {
            Some(code) => format!("{}, errorCode : {}", self.message, code),
            None => self.message.clone(),
        }
    }
}

/// Error returned by every `ProjectService` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service answered with a fault.
    #[error("Remote fault: {0}")]
    Fault(RemoteFault),

    /// The service could not be reached.
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),
}

impl From<RemoteFault> for ServiceError {
    fn from(fault: RemoteFault) -> Self {
        ServiceError::Fault(fault)
    }
}

/// Result type alias for remote service calls
pub type ServiceResult<T> = Result<T, ServiceError>;
