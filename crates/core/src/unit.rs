//! Time units and their fixed minute equivalents

use crate::error::ParseUnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of a schedule row's cadence
///
/// Declaration order is the ladder order: each unit is coarser than the one
/// before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

/// Static description of a time unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInfo {
    pub unit: TimeUnit,
    /// Plural label as shown and serialized
    pub label: &'static str,
    /// Singular label for counts of one
    pub singular: &'static str,
    pub minutes_per_unit: u64,
}

/// Unit table, indexed by `TimeUnit as usize`
///
/// A month is exactly 30 days. Ladder comparisons rely on every entry being
/// a stable integer, so this is not calendar-aware.
pub const TIME_UNITS: [UnitInfo; 5] = [
    UnitInfo {
        unit: TimeUnit::Minutes,
        label: "minutes",
        singular: "minute",
        minutes_per_unit: 1,
    },
    UnitInfo {
        unit: TimeUnit::Hours,
        label: "hours",
        singular: "hour",
        minutes_per_unit: 60,
    },
    UnitInfo {
        unit: TimeUnit::Days,
        label: "days",
        singular: "day",
        minutes_per_unit: 24 * 60,
    },
    UnitInfo {
        unit: TimeUnit::Weeks,
        label: "weeks",
        singular: "week",
        minutes_per_unit: 7 * 24 * 60,
    },
    UnitInfo {
        unit: TimeUnit::Months,
        label: "months",
        singular: "month",
        minutes_per_unit: 30 * 24 * 60,
    },
];

impl TimeUnit {
    /// All units, finest first
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
    ];

    /// Table entry for this unit
    pub fn info(self) -> &'static UnitInfo {
        &TIME_UNITS[self as usize]
    }

    /// Minutes represented by one of this unit
    pub fn minutes(self) -> u64 {
        self.info().minutes_per_unit
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Label agreeing with `count` ("1 hour", "2 hours")
    pub fn label_for(self, count: u64) -> &'static str {
        if count == 1 {
            self.info().singular
        } else {
            self.info().label
        }
    }

    /// Next coarser unit, `None` after months
    pub fn next(self) -> Option<TimeUnit> {
        Self::ALL.get(self as usize + 1).copied()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "m" | "min" | "mins" | "minute" | "minutes" => TimeUnit::Minutes,
            "h" | "hr" | "hrs" | "hour" | "hours" => TimeUnit::Hours,
            "d" | "day" | "days" => TimeUnit::Days,
            "w" | "wk" | "wks" | "week" | "weeks" => TimeUnit::Weeks,
            "mo" | "mon" | "month" | "months" => TimeUnit::Months,
            _ => return Err(ParseUnitError(s.to_string())),
        };
        Ok(unit)
    }
}
