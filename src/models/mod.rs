//! Data Models
//!
//! Local data structures layered over the core wire types.

pub mod metrics;
pub mod project;
pub mod report;
pub mod settings;

pub use metrics::*;
pub use project::*;
pub use report::*;
pub use settings::*;
