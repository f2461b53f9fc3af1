//! Shapes handed to the schedule API on submit

use crate::error::ValidationError;
use crate::ladder::Ladder;
use crate::row::RowSpec;
use crate::unit::TimeUnit;
use serde::{Deserialize, Serialize};

/// A validated ladder ready for the "update schedule" call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePayload {
    /// Environment label (`development`, `staging`, `production` or a custom type)
    pub label: String,
    /// Rows in ladder order, ids stripped
    pub schedule: Vec<RowSpec>,
}

impl SchedulePayload {
    /// Build a payload, refusing ladders that break a ladder rule
    pub fn from_ladder(label: impl Into<String>, ladder: &Ladder) -> Result<Self, ValidationError> {
        ladder.validate()?;
        Ok(Self {
            label: label.into(),
            schedule: ladder.specs(),
        })
    }

    /// Rows in the backend's persisted shape
    pub fn to_public_rows(&self) -> Vec<BackupScheduleRowPublic> {
        self.schedule.iter().copied().map(BackupScheduleRowPublic::from).collect()
    }
}

/// Backend's persisted schedule row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupScheduleRowPublic {
    pub interval: u32,
    pub unit: TimeUnit,
    pub retention: u32,
}

impl From<RowSpec> for BackupScheduleRowPublic {
    fn from(spec: RowSpec) -> Self {
        Self {
            interval: spec.every,
            unit: spec.unit,
            retention: spec.repeat,
        }
    }
}

impl From<BackupScheduleRowPublic> for RowSpec {
    fn from(row: BackupScheduleRowPublic) -> Self {
        RowSpec::new(row.interval, row.unit, row.retention)
    }
}
