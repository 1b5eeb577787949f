//! Orchestration Services
//!
//! Components layered over a `ProjectService`, each borrowing a
//! `ClientContext` for one call:
//! - `validator` - connection and credential checks
//! - `lifecycle` - exists / resolve / ensure-created / clone by name
//! - `source` - analysis source location configuration
//! - `metrics` - code-tree count aggregation
//! - `reports` - report template lookup and generation

pub mod context;
pub mod lifecycle;
pub mod metrics;
pub mod reports;
pub mod source;
pub mod validator;

#[cfg(test)]
pub(crate) mod mock;

pub use context::ClientContext;
pub use lifecycle::ProjectLifecycle;
pub use metrics::{last_defined_count, MetricsAggregator};
pub use reports::ReportRequester;
pub use source::SourceConfigurator;
pub use validator::{ConnectionValidator, CONNECTION_PROBE_PROJECT_ID};
