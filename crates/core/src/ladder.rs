//! The retention ladder and its edit operations
//!
//! A [`Ladder`] is an immutable, cheaply cloned row list. Every edit returns
//! a ladder: either the very same shared instance when nothing changed (a
//! no-op or a rejected edit) or a new one. [`Ladder::ptr_eq`] is the change
//! signal for anything watching the editor state.
//!
//! Each edit comes in two forms:
//! - `try_*` returns `Err(EditError)` when the edit cannot produce a valid
//!   ladder, so a shell can explain why.
//! - the plain form swallows the rejection and hands back `self`.

use crate::bounds::{bounds_for_unit, compute_row_bounds, min_every_for_unit, RowBounds};
use crate::error::{EditError, ValidationError};
use crate::row::{RowId, RowSpec, ScheduleRow, DEFAULT_ROWS};
use crate::unit::TimeUnit;
use crate::validate::validate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Most backups a whole ladder may retain
pub const MAX_REPEAT_SUM: u32 = 20;

const SUGGESTED_REPEAT: u32 = 1;

/// Ordered schedule rows with strictly increasing intervals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScheduleRow>", into = "Vec<ScheduleRow>")]
pub struct Ladder {
    rows: Arc<[ScheduleRow]>,
}

impl Ladder {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Build a ladder from id-less specs, assigning fresh ids
    pub fn from_specs(specs: impl IntoIterator<Item = RowSpec>) -> Self {
        Self::new(specs.into_iter().map(ScheduleRow::new).collect())
    }

    /// The ladder an editor starts from
    pub fn with_defaults() -> Self {
        Self::from_specs(DEFAULT_ROWS)
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScheduleRow> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.rows.iter()
    }

    /// Index of the row with `id`
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Whether two ladders are the same shared instance
    pub fn ptr_eq(a: &Ladder, b: &Ladder) -> bool {
        Arc::ptr_eq(&a.rows, &b.rows)
    }

    /// Sum of `repeat` over all rows
    pub fn total_repeat(&self) -> u64 {
        self.rows.iter().map(|row| u64::from(row.repeat)).sum()
    }

    /// Backups still available under the global ceiling
    pub fn remaining_capacity(&self) -> u32 {
        u64::from(MAX_REPEAT_SUM)
            .saturating_sub(self.total_repeat())
            .try_into()
            .unwrap_or(0)
    }

    pub fn can_add_row(&self) -> bool {
        self.remaining_capacity() > 0
    }

    pub fn can_remove_row(&self) -> bool {
        self.rows.len() > 1
    }

    /// Only the last row's unit may change
    pub fn is_unit_locked(&self, index: usize) -> bool {
        index + 1 < self.rows.len()
    }

    /// Allowed `every` range for the row at `index` under its current unit
    pub fn row_bounds(&self, index: usize) -> Option<RowBounds> {
        compute_row_bounds(&self.rows, index)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.rows)
    }

    fn row_at(&self, index: usize) -> Result<&ScheduleRow, EditError> {
        self.rows.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    fn replace(&self, index: usize, row: ScheduleRow) -> Ladder {
        let mut rows = self.rows.to_vec();
        rows[index] = row;
        Ladder::new(rows)
    }

    /// Set the row's `every`, clamped into its bounds
    ///
    /// Asking for less than the minimum gives the minimum; asking for more
    /// than the next row allows gives the maximum. Only an empty range
    /// rejects.
    pub fn try_set_every(&self, index: usize, raw: u32) -> Result<Ladder, EditError> {
        let row = *self.row_at(index)?;
        let bounds = compute_row_bounds(&self.rows, index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })?;
        let every = bounds.clamp(raw).ok_or_else(|| no_valid_every(index, bounds))?;

        if every == row.every {
            return Ok(self.clone());
        }
        Ok(self.replace(index, ScheduleRow { every, ..row }))
    }

    pub fn set_every(&self, index: usize, raw: u32) -> Ladder {
        self.try_set_every(index, raw).unwrap_or_else(|_| self.clone())
    }

    /// Change the unit of the last row
    ///
    /// `every` is recomputed as the smallest value valid under the new unit.
    pub fn try_set_unit(&self, index: usize, unit: TimeUnit) -> Result<Ladder, EditError> {
        let row = *self.row_at(index)?;
        if row.unit == unit {
            return Ok(self.clone());
        }
        if self.is_unit_locked(index) {
            return Err(EditError::UnitLocked { index });
        }
        if let Some(prev) = index.checked_sub(1).and_then(|i| self.rows.get(i)) {
            if unit.minutes() < prev.unit.minutes() {
                return Err(EditError::UnitRegression {
                    requested: unit,
                    previous: prev.unit,
                });
            }
        }

        let bounds = bounds_for_unit(&self.rows, index, unit).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })?;
        let every = bounds
            .clamp(bounds.min_every)
            .ok_or_else(|| no_valid_every(index, bounds))?;

        Ok(self.replace(index, ScheduleRow { every, unit, ..row }))
    }

    pub fn set_unit(&self, index: usize, unit: TimeUnit) -> Ladder {
        self.try_set_unit(index, unit).unwrap_or_else(|_| self.clone())
    }

    /// Move the row's `repeat` by `delta` within `[1, MAX_REPEAT_SUM - others]`
    ///
    /// Pushing past either end clamps, so a `+1` at the ceiling is a no-op.
    /// Decrements only honor the floor: on an overfull draft they step down
    /// by `delta` instead of snapping to the ceiling, and they are never
    /// rejected.
    pub fn try_adjust_repeat(&self, index: usize, delta: i64) -> Result<Ladder, EditError> {
        let row = *self.row_at(index)?;
        let current = i64::from(row.repeat);
        let requested = current.saturating_add(delta);

        let target = if delta <= 0 {
            requested.max(1)
        } else {
            let others = self.total_repeat() - u64::from(row.repeat);
            let ceiling = i64::from(MAX_REPEAT_SUM) - i64::try_from(others).unwrap_or(i64::MAX);
            if ceiling < 1 {
                return Err(EditError::CapacityExhausted);
            }
            // never lower a row when asked to raise it
            requested.min(ceiling).max(current)
        };

        let repeat = u32::try_from(target).unwrap_or(row.repeat);
        if repeat == row.repeat {
            return Ok(self.clone());
        }
        Ok(self.replace(index, ScheduleRow { repeat, ..row }))
    }

    pub fn adjust_repeat(&self, index: usize, delta: i64) -> Ladder {
        self.try_adjust_repeat(index, delta).unwrap_or_else(|_| self.clone())
    }

    /// Remove a row, keeping at least one
    pub fn try_remove_row(&self, id: RowId) -> Result<Ladder, EditError> {
        if self.position(id).is_none() {
            return Err(EditError::UnknownRow(id));
        }
        if !self.can_remove_row() {
            return Err(EditError::LastRow);
        }
        Ok(self.without_row(id))
    }

    pub fn remove_row(&self, id: RowId) -> Ladder {
        self.try_remove_row(id).unwrap_or_else(|_| self.clone())
    }

    /// Drop a row unconditionally; may leave the ladder empty
    ///
    /// Callers own the at-least-one-row guard. An unknown id is a no-op.
    pub fn without_row(&self, id: RowId) -> Ladder {
        match self.position(id) {
            Some(index) => {
                let mut rows = self.rows.to_vec();
                rows.remove(index);
                Ladder::new(rows)
            }
            None => self.clone(),
        }
    }

    /// Propose the next rung of the ladder
    ///
    /// Tries each unit coarser than the last row's (then months again) and
    /// takes the smallest `every` whose interval strictly exceeds the last
    /// row's. An exact tie is not enough: after `7 days` the suggestion is
    /// `2 weeks`, not `1 week`.
    ///
    /// Returns `None` when the last row is already so long that no longer
    /// interval is representable.
    pub fn suggest_next_row(&self) -> Option<RowSpec> {
        let Some(last) = self.rows.last() else {
            return Some(RowSpec::new(
                min_every_for_unit(TimeUnit::Minutes),
                TimeUnit::Minutes,
                SUGGESTED_REPEAT,
            ));
        };
        let last_minutes = last.effective_minutes();

        let mut candidates = std::iter::successors(last.unit.next(), |unit| unit.next())
            .chain(std::iter::once(TimeUnit::Months));
        let (every, unit) = candidates
            .find_map(|unit| smallest_every_above(unit, last_minutes).map(|every| (every, unit)))?;

        let repeat = SUGGESTED_REPEAT.min(self.remaining_capacity()).max(1);
        Some(RowSpec::new(every, unit, repeat))
    }

    /// Append the suggested row with a fresh id
    pub fn try_append_suggested(&self) -> Result<Ladder, EditError> {
        if !self.can_add_row() {
            return Err(EditError::CapacityExhausted);
        }
        let suggestion = self.suggest_next_row().ok_or(EditError::NoLongerInterval)?;
        let mut rows = self.rows.to_vec();
        rows.push(ScheduleRow::new(suggestion));
        Ok(Ladder::new(rows))
    }

    pub fn append_suggested(&self) -> Ladder {
        self.try_append_suggested().unwrap_or_else(|_| self.clone())
    }

    /// Rows without ids, in order
    pub fn specs(&self) -> Vec<RowSpec> {
        self.rows.iter().map(ScheduleRow::spec).collect()
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl From<Vec<ScheduleRow>> for Ladder {
    fn from(rows: Vec<ScheduleRow>) -> Self {
        Self::new(rows)
    }
}

impl From<Ladder> for Vec<ScheduleRow> {
    fn from(ladder: Ladder) -> Self {
        ladder.rows.to_vec()
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn no_valid_every(index: usize, bounds: RowBounds) -> EditError {
    EditError::NoValidEvery {
        index,
        min_every: bounds.min_every,
        max_every: bounds.max_every.unwrap_or(u32::MAX),
    }
}

/// Smallest `every` in `unit` strictly longer than `minutes`, if it fits
fn smallest_every_above(unit: TimeUnit, minutes: u64) -> Option<u32> {
    let every = (minutes / unit.minutes() + 1).max(u64::from(min_every_for_unit(unit)));
    u32::try_from(every).ok()
}
