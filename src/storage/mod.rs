//! Storage Layer
//!
//! Local persistence: the JSON settings file and encrypted password files.

pub mod config;
pub mod secrets;

pub use config::*;
pub use secrets::*;
