//! Error Handling
//!
//! Unified error type for the orchestration layer.
//! Uses thiserror for ergonomic error definitions.
//!
//! Faults from the remote service arrive as `ServiceError`s and are turned
//! into a `BridgeError` through the fault translator. Connectivity failures
//! pass through unchanged.

use scanbridge_core::{
    translate, ConnectivityError, ErrorKind, ServiceError, TranslatedFault,
};
use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A required argument was blank, missing or out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote service could not be reached
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),

    /// The remote service rejected the credentials
    #[error("{message}")]
    Credential {
        message: String,
        #[source]
        fault: Option<TranslatedFault>,
    },

    /// Connection validation failed
    #[error("{message}")]
    CredentialValidation {
        message: String,
        #[source]
        fault: TranslatedFault,
    },

    /// A named remote resource does not exist
    #[error("{message}")]
    NotFound {
        message: String,
        #[source]
        fault: Option<TranslatedFault>,
    },

    /// A project with the requested name already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Any other remote fault, or a structurally invalid remote answer
    #[error("{message}")]
    RemoteService {
        message: String,
        #[source]
        fault: Option<TranslatedFault>,
    },

    /// A code-tree metric could not be determined
    #[error("Aggregation error: {0}")]
    Aggregation(String),

    /// Settings or secrets could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for orchestration errors
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an already-exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Create a not found error with no underlying fault
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound {
            message: msg.into(),
            fault: None,
        }
    }

    /// Create a remote service error with no underlying fault
    pub fn remote_service(msg: impl Into<String>) -> Self {
        Self::RemoteService {
            message: msg.into(),
            fault: None,
        }
    }

    /// Create an aggregation error
    pub fn aggregation(msg: impl Into<String>) -> Self {
        Self::Aggregation(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build the error matching a translated fault's kind.
    ///
    /// `context` names the attempted operation and prefixes the message.
    pub fn from_fault(context: &str, fault: TranslatedFault) -> Self {
        let message = format!("{} : {}", context, fault.describe());
        match fault.kind {
            ErrorKind::Credential => Self::Credential {
                message,
                fault: Some(fault),
            },
            ErrorKind::NotFound => Self::NotFound {
                message,
                fault: Some(fault),
            },
            _ => Self::RemoteService {
                message,
                fault: Some(fault),
            },
        }
    }

    /// Wrap a translated fault as a remote service error whatever its kind.
    pub fn remote_fault(context: &str, fault: TranslatedFault) -> Self {
        Self::RemoteService {
            message: format!("{} : {}", context, fault.describe()),
            fault: Some(fault),
        }
    }

    /// Translate a service call failure, keeping connectivity errors intact.
    pub fn from_service(context: &str, err: ServiceError) -> Self {
        match err {
            ServiceError::Connectivity(e) => Self::Connectivity(e),
            ServiceError::Fault(fault) => Self::from_fault(context, translate(&fault)),
        }
    }

    /// Like `from_service`, but every fault becomes a remote service error.
    pub fn remote_service_from(context: &str, err: ServiceError) -> Self {
        match err {
            ServiceError::Connectivity(e) => Self::Connectivity(e),
            ServiceError::Fault(fault) => Self::remote_fault(context, translate(&fault)),
        }
    }

    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Connectivity(_) => ErrorKind::Connectivity,
            Self::Credential { .. } => ErrorKind::Credential,
            Self::CredentialValidation { .. } => ErrorKind::CredentialValidation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::RemoteService { .. } => ErrorKind::RemoteService,
            Self::Aggregation(_) => ErrorKind::Aggregation,
            Self::Config(_) | Self::Io(_) | Self::Serialization(_) => ErrorKind::Configuration,
        }
    }

    /// The translated fault behind this error, if any.
    pub fn fault(&self) -> Option<&TranslatedFault> {
        match self {
            Self::Credential { fault, .. }
            | Self::NotFound { fault, .. }
            | Self::RemoteService { fault, .. } => fault.as_ref(),
            Self::CredentialValidation { fault, .. } => Some(fault),
            _ => None,
        }
    }

    /// Remote fault code, when the service supplied one.
    pub fn remote_code(&self) -> Option<&str> {
        self.fault().and_then(|f| f.remote_code.as_deref())
    }
}
