//! CLI command implementations

pub mod cancel;
pub mod config;
pub mod edit;
pub mod export;
pub mod open;
pub mod show;
pub mod submit;
pub mod suggest;
pub mod validate;
