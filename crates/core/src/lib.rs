//! Retention ladder constraint engine
//!
//! This crate provides:
//! - Time units with fixed minute equivalents
//! - Schedule rows with stable ULID-based ids
//! - Per-row bounds derived from neighboring rows
//! - Pure ladder edits (set every, set unit, adjust repeat, remove, append)
//! - Next-row suggestion
//! - Submit-time validation and the submit payload

pub mod bounds;
pub mod error;
pub mod ladder;
pub mod payload;
pub mod row;
pub mod unit;
pub mod validate;

// Re-exports
pub use bounds::{compute_row_bounds, min_every_for_unit, RowBounds, MIN_INTERVAL_MINUTES};
pub use error::{EditError, ParseUnitError, ValidationError};
pub use ladder::{Ladder, MAX_REPEAT_SUM};
pub use payload::{BackupScheduleRowPublic, SchedulePayload};
pub use row::{RowId, RowSpec, ScheduleRow, DEFAULT_ROWS};
pub use unit::{TimeUnit, TIME_UNITS};
pub use validate::validate;
