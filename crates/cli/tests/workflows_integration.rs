//! Integration tests for the ladder CLI
//!
//! Each test drives the real binary against a temporary project directory.

// Test modules
mod common;
mod workflows;

// Re-export common for test modules
#[allow(unused_imports)]
use common::TestProject;
