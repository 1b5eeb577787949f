//! scanbridge
//!
//! Client-side orchestration over a remote code-analysis project service.
//! It includes:
//! - Connection validation and fault translation
//! - Idempotent project create/clone by name
//! - Analysis source location configuration
//! - Code-tree metric aggregation and report requests
//! - Settings and encrypted password storage

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::{
    CloneSpec, MetricKind, MetricQuery, PasswordSource, ProjectRef, ReportSpec, ServerSettings,
};
pub use services::{
    ClientContext, ConnectionValidator, MetricsAggregator, ProjectLifecycle, ReportRequester,
    SourceConfigurator,
};
pub use storage::ConfigService;
pub use utils::error::{BridgeError, BridgeResult};

pub use scanbridge_core::{
    ErrorKind, LogLevel, ProjectService, Report, ReportFormat, ReportTemplate, RepositoryKind,
    SourceLocation,
};
