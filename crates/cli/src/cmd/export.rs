//! Print the payload `ladder submit` would send

use crate::util::Project;
use anyhow::{Context, Result};
use ladder_core::BackupScheduleRowPublic;
use serde::Serialize;

/// Payload in the backend's persisted row shape
#[derive(Serialize)]
struct PublicPayload {
    label: String,
    schedule: Vec<BackupScheduleRowPublic>,
}

pub async fn run(public: bool) -> Result<()> {
    let project = Project::load()?;
    let payload = project
        .session
        .payload()
        .context("Schedule is not valid")?;

    let text = if public {
        serde_json::to_string_pretty(&PublicPayload {
            schedule: payload.to_public_rows(),
            label: payload.label,
        })?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    println!("{}", text);
    Ok(())
}
