//! Utilities
//!
//! Common utilities used throughout the crate.

pub mod error;
pub mod paths;
pub mod validation;

pub use error::*;
pub use paths::*;
pub use validation::*;
