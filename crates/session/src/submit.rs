//! Hand-off of a validated ladder to the schedule API

use crate::error::{Result, SessionError};
use async_trait::async_trait;
use ladder_core::SchedulePayload;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ulid::Ulid;

/// Acknowledgement of a submitted schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: Ulid,
    pub label: String,
    pub rows: usize,
    /// Where the payload ended up, for submitters that write files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
}

/// The "update schedule" call
#[async_trait]
pub trait ScheduleSubmitter: Send + Sync {
    async fn submit(&self, payload: &SchedulePayload) -> Result<SubmitReceipt>;
}

/// Writes each payload as pretty JSON into a directory
///
/// Files are named `<ulid>.json`, so listing the directory gives submission
/// order.
#[derive(Debug, Clone)]
pub struct OutboxSubmitter {
    dir: PathBuf,
}

impl OutboxSubmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ScheduleSubmitter for OutboxSubmitter {
    async fn submit(&self, payload: &SchedulePayload) -> Result<SubmitReceipt> {
        let id = Ulid::new();
        let json = serde_json::to_vec_pretty(payload)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let target = self.dir.join(format!("{}.json", id));
        let staging = self.dir.join(format!(".{}.json.tmp", id));
        tokio::fs::write(&staging, &json).await?;
        tokio::fs::rename(&staging, &target).await?;

        tracing::info!(%id, label = %payload.label, path = %target.display(), "schedule written to outbox");
        Ok(SubmitReceipt {
            id,
            label: payload.label.clone(),
            rows: payload.schedule.len(),
            location: Some(target),
        })
    }
}

/// Keeps payloads in memory
#[derive(Debug, Default)]
pub struct MemorySubmitter {
    submitted: Mutex<Vec<SchedulePayload>>,
    fail_with: Option<String>,
}

impl MemorySubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submitter whose every call fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    pub fn submitted(&self) -> Vec<SchedulePayload> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl ScheduleSubmitter for MemorySubmitter {
    async fn submit(&self, payload: &SchedulePayload) -> Result<SubmitReceipt> {
        if let Some(reason) = &self.fail_with {
            return Err(SessionError::Submit(reason.clone()));
        }
        self.submitted.lock().push(payload.clone());
        Ok(SubmitReceipt {
            id: Ulid::new(),
            label: payload.label.clone(),
            rows: payload.schedule.len(),
            location: None,
        })
    }
}
