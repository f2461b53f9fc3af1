//! Retention ladder editor sessions
//!
//! This crate provides:
//! - Environment label catalog (built-in and custom environment types)
//! - Editor session lifecycle (open, edit, reset, cancel, confirm)
//! - Draft persistence under `.ladder/` with atomic writes
//! - Submission seam for the "update schedule" call

pub mod draft;
pub mod environment;
pub mod error;
pub mod session;
pub mod submit;

// Re-exports
pub use draft::{Draft, DraftStore, LADDER_DIR};
pub use environment::{EnvironmentCatalog, BUILTIN_ENVIRONMENTS};
pub use error::{Result, SessionError};
pub use session::{EditOutcome, Session};
pub use submit::{MemorySubmitter, OutboxSubmitter, ScheduleSubmitter, SubmitReceipt};
