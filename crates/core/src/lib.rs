//! scanbridge Core
//!
//! Foundational types for talking to a remote code-analysis project service.
//! This crate has no transport and no orchestration logic; it defines the
//! vocabulary the other workspace crates share.
//!
//! ## Module Organization
//!
//! - `error` - Raw failure shapes (`RemoteFault`, `ConnectivityError`, `ServiceError`) and `ErrorKind`
//! - `fault` - The fault-code translation table
//! - `types` - Wire value types (projects, code-tree nodes, report templates)
//! - `service` - The `ProjectService` trait every transport implements
//! - `proxy` - Proxy configuration shared with the HTTP client factory
//! - `logging` - Shared verbosity gate and scoped suppression guard

pub mod error;
pub mod fault;
pub mod logging;
pub mod proxy;
pub mod service;
pub mod types;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{
    ConnectivityError, ErrorKind, RemoteFault, ServiceError, ServiceResult, TranslatedFault,
};

// ── Fault Translation ──────────────────────────────────────────────────
pub use fault::translate;

// ── Logging ────────────────────────────────────────────────────────────
pub use logging::{LogGate, LogLevel, SuppressionGuard};

#[doc(hidden)]
pub use tracing as __tracing;

// ── Proxy Types ────────────────────────────────────────────────────────
pub use proxy::{ProxyConfig, ProxyProtocol};

// ── Service Trait & Wire Types ─────────────────────────────────────────
pub use service::ProjectService;
pub use types::{
    CloneOption, CodeTreeNode, CodeTreeRequest, LicenseCategory, NodeCount, NodeCountType,
    NodeType, ObligationCategory, Project, ProjectRequest, Report, ReportFormat, ReportTemplate,
    RepositoryKind, SourceLocation, CODE_TREE_ROOT, INFINITE_DEPTH,
};
