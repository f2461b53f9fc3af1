//! Shared utilities for CLI commands

use crate::system_config::{self, SystemConfig};
use anyhow::{Context, Result};
use ladder_core::{RowBounds, ScheduleRow, TimeUnit};
use session::{DraftStore, Session};

/// Everything an editing command needs
pub struct Project {
    pub store: DraftStore,
    pub config: SystemConfig,
    pub session: Session,
}

impl Project {
    /// Find the nearest `.ladder/` from cwd and resume its draft
    pub fn load() -> Result<Self> {
        let store = find_store()?;
        let config = system_config::load()?;
        let draft = store
            .load()
            .context("Failed to load draft (run 'ladder open' to start one)")?;
        let session = Session::resume(config.catalog(), draft).context("Failed to resume draft")?;
        Ok(Self {
            store,
            config,
            session,
        })
    }

    /// Persist the session back to the draft file
    pub fn save(&self) -> Result<()> {
        self.store
            .save(&self.session.to_draft())
            .context("Failed to save draft")
    }

    /// Resolve a row reference (position or id prefix) to an index
    pub fn row_index(&self, reference: &str) -> Result<usize> {
        self.session
            .resolve_row(reference)
            .with_context(|| format!("Unknown row '{}'", reference))
    }
}

/// Find the project root by walking up from cwd to find .ladder/
pub fn find_store() -> Result<DraftStore> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    DraftStore::find(&cwd).context("Not a ladder project (run 'ladder open' first)")
}

/// Format a span of minutes in the largest unit that divides it exactly
///
/// 660 -> "11 hours", 10080 -> "1 week", 90 -> "90 minutes"
pub fn format_minutes(minutes: u64) -> String {
    let unit = TimeUnit::ALL
        .iter()
        .rev()
        .copied()
        .find(|unit| minutes >= unit.minutes() && minutes % unit.minutes() == 0)
        .unwrap_or(TimeUnit::Minutes);
    let count = minutes / unit.minutes();
    format!("{} {}", count, unit.label_for(count))
}

/// "every 15 minutes", "every 1 hour"
pub fn format_cadence(row: &ScheduleRow) -> String {
    format!("every {} {}", row.every, row.unit.label_for(u64::from(row.every)))
}

/// Allowed `every` range: "15-59", "1+", or "none"
pub fn format_bounds(bounds: &RowBounds) -> String {
    if !bounds.is_satisfiable() {
        return "none".to_string();
    }
    match bounds.max_every {
        Some(max) if max == bounds.min_every => max.to_string(),
        Some(max) => format!("{}-{}", bounds.min_every, max),
        None => format!("{}+", bounds.min_every),
    }
}

/// First eight characters of a row id
pub fn short_id(row: &ScheduleRow) -> String {
    row.id.to_string()[..8].to_string()
}
