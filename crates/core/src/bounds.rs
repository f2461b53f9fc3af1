//! Per-row bounds derived from neighboring rows
//!
//! Each row's allowed `every` depends only on the row before it (lower
//! bound) and the row after it (upper bound), so bounds are plain index
//! arithmetic over the row slice.

use crate::row::ScheduleRow;
use crate::unit::TimeUnit;

/// Shortest interval any row may have, in minutes
pub const MIN_INTERVAL_MINUTES: u64 = 15;

/// Allowed range of `every` for one row under one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    pub min_every: u32,
    /// `None` when there is no following row
    pub max_every: Option<u32>,
}

impl RowBounds {
    /// Whether any integer fits between the bounds
    ///
    /// An unsatisfiable row is shown as invalid and keeps its stale value;
    /// it is never silently rewritten.
    pub fn is_satisfiable(&self) -> bool {
        self.max_every.map_or(true, |max| max >= self.min_every)
    }

    pub fn contains(&self, every: u32) -> bool {
        every >= self.min_every && self.max_every.map_or(true, |max| every <= max)
    }

    /// Clamp `every` into the bounds, `None` if the bounds are empty
    pub fn clamp(&self, every: u32) -> Option<u32> {
        if !self.is_satisfiable() {
            return None;
        }
        let raised = every.max(self.min_every);
        Some(match self.max_every {
            Some(max) => raised.min(max),
            None => raised,
        })
    }
}

/// Smallest `every` that reaches the global minimum interval in `unit`
pub fn min_every_for_unit(unit: TimeUnit) -> u32 {
    saturate(MIN_INTERVAL_MINUTES.div_ceil(unit.minutes()).max(1))
}

/// Bounds for `rows[index]` under its current unit
///
/// Returns `None` when `index` is out of range.
pub fn compute_row_bounds(rows: &[ScheduleRow], index: usize) -> Option<RowBounds> {
    let row = rows.get(index)?;
    bounds_for_unit(rows, index, row.unit)
}

/// Bounds for `rows[index]` as if its unit were `unit`
pub fn bounds_for_unit(rows: &[ScheduleRow], index: usize, unit: TimeUnit) -> Option<RowBounds> {
    if index >= rows.len() {
        return None;
    }
    let per_unit = unit.minutes();

    let min_minutes = match index.checked_sub(1).map(|i| &rows[i]) {
        Some(prev) => prev.effective_minutes() + 1,
        None => MIN_INTERVAL_MINUTES,
    };
    let min_every = u64::from(min_every_for_unit(unit)).max(min_minutes.div_ceil(per_unit));

    let max_every = rows
        .get(index + 1)
        .map(|next| saturate(next.effective_minutes().saturating_sub(1) / per_unit));

    Some(RowBounds {
        min_every: saturate(min_every),
        max_every,
    })
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
