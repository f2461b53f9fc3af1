//! Workflow integration tests
//!
//! Tests for complete workflows that exercise multiple commands
//! and validate end-to-end behavior.

pub mod config;
pub mod edit_lifecycle;
pub mod submit_cancel;
