//! Schedule rows and their identifiers

use crate::unit::TimeUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Stable identifier of a schedule row
///
/// Generated once when the row is created and carried through every edit.
/// ULIDs are never reused, so a removed row's id cannot come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(Ulid);

impl RowId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Ulid> for RowId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}

/// Cadence triple without an identity
///
/// This is what the ladder suggests for a new row and what gets handed to
/// the schedule API on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowSpec {
    /// Count of `unit` between backups
    pub every: u32,
    pub unit: TimeUnit,
    /// Backups retained at this cadence
    pub repeat: u32,
}

impl RowSpec {
    pub const fn new(every: u32, unit: TimeUnit, repeat: u32) -> Self {
        Self { every, unit, repeat }
    }

    /// Real-world interval between backups, in minutes
    pub fn effective_minutes(&self) -> u64 {
        u64::from(self.every) * self.unit.minutes()
    }

    /// How far back the retained backups of this row reach, in minutes
    pub fn coverage_minutes(&self) -> u64 {
        self.effective_minutes().saturating_mul(u64::from(self.repeat))
    }
}

/// Default ladder used when an editor is opened or reset
pub const DEFAULT_ROWS: [RowSpec; 3] = [
    RowSpec::new(15, TimeUnit::Minutes, 4),
    RowSpec::new(1, TimeUnit::Hours, 11),
    RowSpec::new(7, TimeUnit::Days, 4),
];

/// One rung of the retention ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub id: RowId,
    pub every: u32,
    pub unit: TimeUnit,
    pub repeat: u32,
}

impl ScheduleRow {
    /// Create a row with a fresh id
    pub fn new(spec: RowSpec) -> Self {
        Self::with_id(RowId::new(), spec)
    }

    pub fn with_id(id: RowId, spec: RowSpec) -> Self {
        Self {
            id,
            every: spec.every,
            unit: spec.unit,
            repeat: spec.repeat,
        }
    }

    /// The row without its id
    pub fn spec(&self) -> RowSpec {
        RowSpec::new(self.every, self.unit, self.repeat)
    }

    pub fn effective_minutes(&self) -> u64 {
        self.spec().effective_minutes()
    }

    pub fn coverage_minutes(&self) -> u64 {
        self.spec().coverage_minutes()
    }
}

impl From<&ScheduleRow> for RowSpec {
    fn from(row: &ScheduleRow) -> Self {
        row.spec()
    }
}
