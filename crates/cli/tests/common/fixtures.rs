//! Temporary project directories for workflow tests

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory that the `ladder` binary treats as a project
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Empty directory with no `.ladder/`
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Directory with a freshly opened draft
    pub fn opened() -> Result<Self> {
        let project = Self::new()?;
        crate::ladder!(project.path(), "open").assert_success()?;
        Ok(project)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn draft_path(&self) -> PathBuf {
        self.path().join(".ladder").join("draft.toml")
    }

    pub fn outbox_dir(&self) -> PathBuf {
        self.path().join(".ladder").join("outbox")
    }

    /// Config file the commands in this project use
    pub fn config_path(&self) -> PathBuf {
        self.path().join("ladder-config.toml")
    }

    /// Current draft as `ladder show --json` reports it
    pub fn show(&self) -> Result<serde_json::Value> {
        crate::ladder!(self.path(), "show", "--json")
            .assert_success()?
            .json()
    }

    /// `(every, unit, repeat)` of every row in the draft
    pub fn rows(&self) -> Result<Vec<(u64, String, u64)>> {
        let view = self.show()?;
        let rows = view["rows"]
            .as_array()
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|row| {
                (
                    row["every"].as_u64().unwrap_or_default(),
                    row["unit"].as_str().unwrap_or_default().to_string(),
                    row["repeat"].as_u64().unwrap_or_default(),
                )
            })
            .collect();
        Ok(rows)
    }
}
