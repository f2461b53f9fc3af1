//! Error types for ladder edits and validation

use crate::bounds::MIN_INTERVAL_MINUTES;
use crate::ladder::MAX_REPEAT_SUM;
use crate::row::RowId;
use crate::unit::TimeUnit;
use thiserror::Error;

/// Why an edit was not applied
///
/// Clamped edits are not errors; only edits that cannot produce a valid
/// ladder at all end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no row at index {index} (ladder has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no row with id {0}")]
    UnknownRow(RowId),

    #[error("no valid interval at index {index}: needs at least {min_every} but at most {max_every}")]
    NoValidEvery {
        index: usize,
        min_every: u32,
        max_every: u32,
    },

    #[error("the unit at index {index} is locked; only the last row's unit can change")]
    UnitLocked { index: usize },

    #[error("{requested} is finer than the previous row's {previous}")]
    UnitRegression {
        requested: TimeUnit,
        previous: TimeUnit,
    },

    #[error("all {} retained backups are already allocated", MAX_REPEAT_SUM)]
    CapacityExhausted,

    #[error("no longer interval fits after the last row")]
    NoLongerInterval,

    #[error("the last remaining schedule cannot be removed")]
    LastRow,
}

/// First ladder rule a row list breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Add at least one schedule.")]
    Empty,

    #[error("Each schedule must run at least every {} minutes.", MIN_INTERVAL_MINUTES)]
    IntervalTooShort,

    #[error("Each schedule must cover a longer timeframe than the one before it.")]
    NotIncreasing,

    #[error("Schedules cannot retain more than {} backups in total.", MAX_REPEAT_SUM)]
    TooManyBackups,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time unit '{0}' (expected minutes, hours, days, weeks or months)")]
pub struct ParseUnitError(pub String);
