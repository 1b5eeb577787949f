//! Integration Tests Module
//!
//! End-to-end tests for scanbridge against an in-memory project service.
//! Tests cover the project lifecycle, the full validate/configure/measure/report
//! workflow, and settings with encrypted password files.

// In-memory project service
mod support;

// Create, exists and clone scenarios
mod lifecycle_test;


// Settings file and password file handling
mod settings_test;
