//! Submit-time validation of a whole ladder

use crate::bounds::MIN_INTERVAL_MINUTES;
use crate::error::ValidationError;
use crate::ladder::MAX_REPEAT_SUM;
use crate::row::ScheduleRow;

/// Check the ladder rules in order and report the first one broken
pub fn validate(rows: &[ScheduleRow]) -> Result<(), ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::Empty);
    }

    if rows.iter().any(|row| row.effective_minutes() < MIN_INTERVAL_MINUTES) {
        return Err(ValidationError::IntervalTooShort);
    }

    if rows
        .windows(2)
        .any(|pair| pair[1].effective_minutes() <= pair[0].effective_minutes())
    {
        return Err(ValidationError::NotIncreasing);
    }

    let total: u64 = rows.iter().map(|row| u64::from(row.repeat)).sum();
    if total > u64::from(MAX_REPEAT_SUM) {
        return Err(ValidationError::TooManyBackups);
    }

    Ok(())
}
